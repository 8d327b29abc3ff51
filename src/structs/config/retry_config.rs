use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RetryConfig {
    #[serde(default = "ConfigHelper::default_max_attempts")]
    pub max_attempts: usize,

    #[serde(default = "ConfigHelper::default_retry_delay_ms")]
    pub delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: ConfigHelper::default_max_attempts(),
            delay_ms: ConfigHelper::default_retry_delay_ms(),
        }
    }
}
