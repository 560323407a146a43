use serde::{Deserialize, Serialize};

/// NewType wrapper for a component content hash
///
/// The hash is the registry key: two reports referencing the same hash
/// refer to the same software artifact.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentHash(String);

impl ComponentHash {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ComponentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Usage - one appearance of a component in one application's report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    stage: String,
    #[serde(rename = "publicId")]
    application_public_id: String,
    labels: Vec<String>,
}

impl Usage {
    /// Creates an unlabeled usage
    pub fn new(stage: impl Into<String>, application_public_id: impl Into<String>) -> Self {
        Self {
            stage: stage.into(),
            application_public_id: application_public_id.into(),
            labels: Vec::new(),
        }
    }

    pub fn stage(&self) -> &str {
        &self.stage
    }

    pub fn application_public_id(&self) -> &str {
        &self.application_public_id
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Appends labels in the order given. Duplicates are kept.
    pub fn add_labels<I>(&mut self, labels: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.labels.extend(labels);
    }

    pub fn is_labeled(&self) -> bool {
        !self.labels.is_empty()
    }
}

/// Component - a software artifact referenced by one or more reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    hash: ComponentHash,
    package_url: Option<String>,
    display_name: Option<String>,
    usages: Vec<Usage>,
}

impl Component {
    /// Creates a component with no usages
    pub fn new(
        hash: ComponentHash,
        package_url: Option<String>,
        display_name: Option<String>,
    ) -> Self {
        Self {
            hash,
            package_url,
            display_name,
            usages: Vec::new(),
        }
    }

    pub fn hash(&self) -> &ComponentHash {
        &self.hash
    }

    pub fn package_url(&self) -> Option<&str> {
        self.package_url.as_deref()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn usages(&self) -> &[Usage] {
        &self.usages
    }

    pub fn usages_mut(&mut self) -> &mut [Usage] {
        &mut self.usages
    }

    pub fn add_usage(&mut self, usage: Usage) {
        self.usages.push(usage);
    }

    /// Drops every usage that carries no label
    ///
    /// # Returns
    /// The number of usages removed
    pub fn retain_labeled_usages(&mut self) -> usize {
        let before = self.usages.len();
        self.usages.retain(Usage::is_labeled);
        before - self.usages.len()
    }
}
