use crate::config::constants::{
    BACKEND_MARKER, BENIGN_PATTERNS, CHANGELOG_LINK_PATTERN, DEFAULT_CACHE_DIR, DEFAULT_MAX_ATTEMPTS,
    DEFAULT_RETRY_DELAY_MS, FRONTEND_MARKER, GITHUB_API_URL, GITHUB_TOKEN_ENV, IGNORED_CHECK_RUNS,
    MAX_PER_PAGE, OUTDATED_ACTIONS_PATTERN, RATE_LIMIT_RETRIES,
};
use crate::structs::config::pattern_rule::PatternRule;

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_api_url() -> String {
        GITHUB_API_URL.to_string()
    }

    pub fn default_token_env() -> String {
        GITHUB_TOKEN_ENV.to_string()
    }

    pub fn default_per_page() -> usize {
        MAX_PER_PAGE
    }

    pub fn default_rate_limit_retries() -> u32 {
        RATE_LIMIT_RETRIES
    }

    pub fn default_cache_dir() -> String {
        DEFAULT_CACHE_DIR.to_string()
    }

    pub fn default_max_attempts() -> usize {
        DEFAULT_MAX_ATTEMPTS
    }

    pub fn default_retry_delay_ms() -> u64 {
        DEFAULT_RETRY_DELAY_MS
    }

    pub fn default_ignored_check_runs() -> Vec<String> {
        IGNORED_CHECK_RUNS.iter().map(|s| s.to_string()).collect()
    }

    pub fn default_benign_patterns() -> Vec<String> {
        BENIGN_PATTERNS.iter().map(|s| s.to_string()).collect()
    }

    pub fn default_issue_key_rule() -> PatternRule {
        PatternRule::new(CHANGELOG_LINK_PATTERN, 1)
    }

    pub fn default_actions_rule() -> PatternRule {
        PatternRule::new(OUTDATED_ACTIONS_PATTERN, 1)
    }

    pub fn default_frontend_marker() -> String {
        FRONTEND_MARKER.to_string()
    }

    pub fn default_backend_marker() -> String {
        BACKEND_MARKER.to_string()
    }
}
