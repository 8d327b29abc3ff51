use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GithubConfig {
    #[serde(default = "ConfigHelper::default_api_url")]
    pub api_url: String,

    #[serde(default = "ConfigHelper::default_token_env")]
    pub token_env: String,

    #[serde(default = "ConfigHelper::default_per_page")]
    pub per_page: usize,

    #[serde(default = "ConfigHelper::default_rate_limit_retries")]
    pub rate_limit_retries: u32,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_url: ConfigHelper::default_api_url(),
            token_env: ConfigHelper::default_token_env(),
            per_page: ConfigHelper::default_per_page(),
            rate_limit_retries: ConfigHelper::default_rate_limit_retries(),
        }
    }
}
