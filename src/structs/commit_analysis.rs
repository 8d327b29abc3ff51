use serde::Serialize;
use crate::enums::job_group::JobGroup;
use crate::structs::check_run::CheckRun;

/// Timing of all check runs for one commit.
#[derive(Debug, Clone, Serialize)]
pub struct CommitAnalysis {
    pub commit_ref: String,
    pub check_runs: Vec<CheckRun>,
    pub first: CheckRun,
    pub last: CheckRun,
    pub duration: i64,
    pub group: JobGroup,
}

impl CommitAnalysis {
    /// Returns `None` when no check run carries usable timestamps.
    pub fn from_check_runs(
        commit_ref: &str,
        check_runs: Vec<CheckRun>,
        frontend_marker: &str,
        backend_marker: &str,
    ) -> Option<Self> {
        let mut first: Option<&CheckRun> = None;
        let mut last: Option<&CheckRun> = None;

        for cr in &check_runs {
            let (Some(started), Some(completed)) = (cr.started_at, cr.completed_at) else {
                continue;
            };
            if first.and_then(|f| f.started_at).map_or(true, |s| started < s) {
                first = Some(cr);
            }
            if last.and_then(|l| l.completed_at).map_or(true, |c| completed > c) {
                last = Some(cr);
            }
        }

        let first = first?.clone();
        let last = last?.clone();
        let duration = last.completed_at? - first.started_at?;
        let group = JobGroup::from_check_runs(&check_runs, frontend_marker, backend_marker);

        Some(Self {
            commit_ref: commit_ref.to_string(),
            check_runs,
            first,
            last,
            duration,
            group,
        })
    }
}
