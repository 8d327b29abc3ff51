use std::path::PathBuf;
use clap::Args;
use crate::config::constants::{DEFAULT_COMMIT_COUNT, DEFAULT_ORG};

#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Organization (or user) owning the repositories
    #[clap(long, default_value = DEFAULT_ORG)]
    pub org: String,

    /// Repository to analyze; every repository in the organization when omitted
    #[clap(short, long)]
    pub repo: Option<String>,

    /// Number of latest commits to examine per repository
    #[clap(long, default_value_t = DEFAULT_COMMIT_COUNT)]
    pub commits: usize,

    /// Analyze only this commit reference
    #[clap(long)]
    pub commit: Option<String>,

    #[clap(short, long)]
    pub verbose: bool,

    /// Write the aggregated issues to this CSV file
    #[clap(long)]
    pub csv: Option<PathBuf>,

    /// Only annotations linking to a changelog entry become issues
    #[clap(long)]
    pub links_only: bool,

    /// Ignore cached responses (results are still cached)
    #[clap(long)]
    pub refresh: bool,

    #[clap(long)]
    pub cache_dir: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[clap(long)]
    pub config: Option<PathBuf>,
}

impl TargetArgs {
    /// Default `env_logger` filter. Verbose mode only raises this crate.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "info,checkrun_analyzer=debug"
        } else {
            "info"
        }
    }
}
