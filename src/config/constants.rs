use std::time::Duration;

pub const DEFAULT_ORG: &str = "getsentry";
pub const DEFAULT_COMMIT_COUNT: usize = 10;

pub const GITHUB_API_URL: &str = "https://api.github.com";
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const GITHUB_WEB_URL: &str = "https://github.com";
pub const GITHUB_API_VERSION: &str = "2022-11-28";
pub const USER_AGENT: &str = concat!("checkrun-analyzer/", env!("CARGO_PKG_VERSION"));
pub const MAX_PER_PAGE: usize = 100;
pub const RATE_LIMIT_RETRIES: u32 = 2;
pub const DEFAULT_RATE_LIMIT_WAIT_SECS: u64 = 60;

pub const DEFAULT_CACHE_DIR: &str = ".github-cache";
pub const CONFIG_FILE_PATH: &str = ".checkrun-analyzer/config.toml";

pub const CACHE_CATEGORY_COMMITS: &str = "commits";
pub const CACHE_CATEGORY_CHECK_RUNS: &str = "checkruns";
pub const CACHE_CATEGORY_ANNOTATIONS: &str = "annotations";
pub const CACHE_CATEGORY_REPOSITORIES: &str = "repos";
pub const ORG_LISTING_REPO: &str = "_org";
pub const ORG_LISTING_ID: &str = "all";

pub const DEFAULT_MAX_ATTEMPTS: usize = 3;
pub const DEFAULT_RETRY_DELAY_MS: u64 = 2000;

pub const FRONTEND_MARKER: &str = "frontend tests";
pub const BACKEND_MARKER: &str = "backend test";

pub const COMPLETED_STATUS: &str = "completed";

pub const IGNORED_CHECK_RUNS: &[&str] = &[
    // Scheduled
    "lock",
    "Analyze (python)",
    "Analyze (javascript)",
    // Triggered via workflow
    "visual-diff",
    "detect what files changed",
    // Issue / PR comment
    "test getsentry",
    "unroute-new-issue",
    "route",
    "ensure_one_status",
    "stale",
];

pub const BENIGN_PATTERNS: &[&str] = &[
    r"^Process completed with exit code \d+\.$",
    r"^The process '.*' failed with exit code \d+$",
    r"^The operation was canceled\.$",
    r"^No files were found with the provided path: .*",
    r"^Unexpected console statement\.?$",
];

pub const CHANGELOG_LINK_PATTERN: &str = r"(https://github\.blog/changelog/[^/\s]*/)";
pub const OUTDATED_ACTIONS_PATTERN: &str = r"Please update the following actions [^:]*:\s*(.*)";

pub fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}

pub fn sleep_duration_secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
