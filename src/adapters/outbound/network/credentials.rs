use crate::shared::error::InventoryError;
use std::fmt;
use std::str::FromStr;

/// Credentials used when none are given on the command line or in config
pub const DEFAULT_CREDENTIALS: &str = "admin:admin123";

/// HTTP Basic credentials parsed from `USER:PASSWORD`
///
/// The password is everything after the first `:` and may itself contain
/// colons. `Debug` output never shows the password.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    username: String,
    password: String,
}

impl BasicCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl FromStr for BasicCredentials {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (username, password) = s.split_once(':').ok_or(InventoryError::InvalidCredentials)?;
        if username.is_empty() {
            return Err(InventoryError::InvalidCredentials);
        }
        Ok(Self::new(username, password))
    }
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
