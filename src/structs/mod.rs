pub mod annotation;
pub mod check_run;
pub mod check_run_output;
pub mod check_runs_page;
pub mod cli;
pub mod commit;
pub mod commit_analysis;
pub mod config;
pub mod group_stats;
pub mod issue;
pub mod raw_check_run;
pub mod repository;
pub mod repository_report;
pub mod target_args;
pub mod timing_summary;
