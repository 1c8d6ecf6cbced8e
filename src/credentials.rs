use serde::Deserialize;
use std::path::Path;

use crate::error::{Error, Result};

/// Account credentials, read once before login.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// The only validation performed: both fields must be non-empty.
    pub fn ensure_present(&self) -> Result<()> {
        if self.username.trim().is_empty() || self.password.trim().is_empty() {
            return Err(Error::Authentication(
                "username or password is empty".to_string(),
            ));
        }
        Ok(())
    }
}
