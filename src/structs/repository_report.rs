use crate::errors::AnalyzerResult;
use crate::structs::commit_analysis::CommitAnalysis;
use crate::structs::issue::Issue;
use crate::structs::timing_summary::TimingSummary;

/// Everything learned about one repository in a single run.
#[derive(Debug)]
pub struct RepositoryReport {
    pub owner: String,
    pub repo: String,
    pub commits_examined: usize,
    pub commit_analyses: Vec<CommitAnalysis>,
    pub issues: Vec<Issue>,
    pub timing: Option<AnalyzerResult<TimingSummary>>,
}

impl RepositoryReport {
    pub fn empty(owner: &str, repo: &str) -> Self {
        Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            commits_examined: 0,
            commit_analyses: Vec::new(),
            issues: Vec::new(),
            timing: None,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}
