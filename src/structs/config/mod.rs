pub mod analysis_config;
pub mod cache_config;
pub mod config;
pub mod github_config;
pub mod pattern_rule;
pub mod retry_config;
