pub mod annotation_aggregator;
pub mod check_run_normalizer;
pub mod data_client;
pub mod disk_cache;
pub mod duration_stats;
pub mod github_client;
pub mod repository_analyzer;
pub mod retry;
