use serde::Deserialize;
use crate::structs::raw_check_run::RawCheckRun;

/// One page of `GET /repos/{owner}/{repo}/commits/{ref}/check-runs`.
#[derive(Debug, Deserialize)]
pub struct CheckRunsPage {
    #[serde(default)]
    pub total_count: u64,

    #[serde(default)]
    pub check_runs: Vec<RawCheckRun>,
}
