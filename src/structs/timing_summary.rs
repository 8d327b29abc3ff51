use serde::Serialize;
use crate::structs::commit_analysis::CommitAnalysis;
use crate::structs::group_stats::GroupStats;

#[derive(Debug, Clone, Serialize)]
pub struct TimingSummary {
    pub longest: CommitAnalysis,
    pub groups: Vec<GroupStats>,
}
