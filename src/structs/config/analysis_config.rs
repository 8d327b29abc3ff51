use crate::helpers::config_helper::ConfigHelper;
use crate::structs::config::pattern_rule::PatternRule;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AnalysisConfig {
    #[serde(default = "ConfigHelper::default_ignored_check_runs")]
    pub ignored_check_runs: Vec<String>,

    #[serde(default = "ConfigHelper::default_benign_patterns")]
    pub benign_patterns: Vec<String>,

    #[serde(default = "ConfigHelper::default_issue_key_rule")]
    pub issue_key_rule: PatternRule,

    #[serde(default = "ConfigHelper::default_actions_rule")]
    pub actions_rule: PatternRule,

    #[serde(default)]
    pub links_only: bool,

    #[serde(default = "ConfigHelper::default_frontend_marker")]
    pub frontend_marker: String,

    #[serde(default = "ConfigHelper::default_backend_marker")]
    pub backend_marker: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            ignored_check_runs: ConfigHelper::default_ignored_check_runs(),
            benign_patterns: ConfigHelper::default_benign_patterns(),
            issue_key_rule: ConfigHelper::default_issue_key_rule(),
            actions_rule: ConfigHelper::default_actions_rule(),
            links_only: false,
            frontend_marker: ConfigHelper::default_frontend_marker(),
            backend_marker: ConfigHelper::default_backend_marker(),
        }
    }
}
