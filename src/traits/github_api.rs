use async_trait::async_trait;
use crate::enums::api_error::ApiError;
use crate::structs::annotation::Annotation;
use crate::structs::commit::Commit;
use crate::structs::raw_check_run::RawCheckRun;
use crate::structs::repository::Repository;

/// The remote checks API. Implementations return fully paginated results.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GithubApi: Send + Sync {

    /// Latest commits on the default branch, most recent first, at most `count`.
    async fn list_commits(&self, owner: &str, repo: &str, count: usize) -> Result<Vec<Commit>, ApiError>;

    /// Completed check runs for a commit reference.
    async fn list_check_runs_for_ref(&self, owner: &str, repo: &str, git_ref: &str) -> Result<Vec<RawCheckRun>, ApiError>;

    async fn list_check_run_annotations(&self, owner: &str, repo: &str, check_run_id: u64) -> Result<Vec<Annotation>, ApiError>;

    async fn list_org_repositories(&self, org: &str) -> Result<Vec<Repository>, ApiError>;
}
