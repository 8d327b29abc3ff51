use serde::{Deserialize, Serialize};
use crate::structs::check_run_output::CheckRunOutput;

/// Check run as returned by the checks API, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCheckRun {
    pub id: u64,
    pub name: String,

    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub conclusion: Option<String>,

    #[serde(default)]
    pub started_at: Option<String>,

    #[serde(default)]
    pub completed_at: Option<String>,

    #[serde(default)]
    pub html_url: Option<String>,

    #[serde(default)]
    pub output: CheckRunOutput,
}
