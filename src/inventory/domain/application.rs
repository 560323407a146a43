use serde::{Deserialize, Serialize};

/// Application value object representing a project registered with the server
///
/// `id` is the server's internal identifier (used in report endpoints),
/// `public_id` is the human-facing identifier (used in label endpoints).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    id: String,
    public_id: String,
}

impl Application {
    pub fn new(id: impl Into<String>, public_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            public_id: public_id.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn public_id(&self) -> &str {
        &self.public_id
    }
}
