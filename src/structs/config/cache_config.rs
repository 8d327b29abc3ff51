use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CacheConfig {
    #[serde(default = "ConfigHelper::default_cache_dir")]
    pub dir: String,

    #[serde(default)]
    pub refresh: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dir: ConfigHelper::default_cache_dir(),
            refresh: false,
        }
    }
}
