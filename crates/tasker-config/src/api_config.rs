use crate::{ConfigError, ConfigErrorResult, DEFAULT_API_URL};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the task backend
    pub base_url: String,
    /// Acting user id; the CLI flag takes precedence when given
    pub user_id: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_API_URL),
            user_id: None,
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::api(
                "api.base_url must start with http:// or https://",
            ));
        }

        Ok(())
    }
}
