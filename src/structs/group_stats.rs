use serde::Serialize;
use crate::enums::job_group::JobGroup;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStats {
    pub group: JobGroup,
    pub total_duration: i64,
    pub check_runs_count: usize,
    /// Per-commit durations, sorted ascending.
    pub durations: Vec<i64>,
    pub mean_duration: f64,
    pub median_duration: f64,
    pub q75: f64,
    pub q90: f64,
}
