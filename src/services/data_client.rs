use std::sync::Arc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::config::constants::{
    CACHE_CATEGORY_ANNOTATIONS, CACHE_CATEGORY_CHECK_RUNS, CACHE_CATEGORY_COMMITS, CACHE_CATEGORY_REPOSITORIES,
    ORG_LISTING_ID, ORG_LISTING_REPO,
};
use crate::errors::AnalyzerResult;
use crate::services::disk_cache::DiskCache;
use crate::services::retry::RetryPolicy;
use crate::structs::annotation::Annotation;
use crate::structs::raw_check_run::RawCheckRun;
use crate::structs::repository::Repository;
use crate::traits::github_api::GithubApi;

/// Cache-first access to the remote API with bounded retries.
///
/// Every successful fetch is written to the cache before it is returned, and a
/// cached value is returned verbatim without touching the network.
pub struct RemoteDataClient {
    api: Arc<dyn GithubApi>,
    cache: DiskCache,
    retry: RetryPolicy,
}

impl RemoteDataClient {
    pub fn new(api: Arc<dyn GithubApi>, cache: DiskCache, retry: RetryPolicy) -> Self {
        Self { api, cache, retry }
    }

    /// Latest commit SHAs, most recent first. An empty repository yields no commits.
    pub async fn list_latest_commits(&self, owner: &str, repo: &str, count: usize) -> AnalyzerResult<Vec<String>> {
        let id = format!("latest-{}", count);
        if let Some(shas) = self.cache.get::<Vec<String>>(CACHE_CATEGORY_COMMITS, owner, repo, &id).await {
            return Ok(shas);
        }

        log::info!("📥 Getting latest commits for {}/{}", owner, repo);
        let commits = self
            .retry
            .run(move || async move {
                match self.api.list_commits(owner, repo, count).await {
                    Err(e) if e.is_conflict() => {
                        log::info!("📭 {}/{} has no commits", owner, repo);
                        Ok(Vec::new())
                    }
                    other => other,
                }
            })
            .await?;

        let shas: Vec<String> = commits.into_iter().map(|c| c.sha).collect();
        self.store(CACHE_CATEGORY_COMMITS, owner, repo, &id, &shas).await;
        Ok(shas)
    }

    /// Check runs for a commit. A fetch that keeps failing is logged and yields no runs.
    pub async fn list_check_runs_for_commit(&self, owner: &str, repo: &str, git_ref: &str) -> Vec<RawCheckRun> {
        if let Some(runs) = self.cache.get::<Vec<RawCheckRun>>(CACHE_CATEGORY_CHECK_RUNS, owner, repo, git_ref).await {
            return runs;
        }

        log::info!("📥 Downloading check runs {}/{}@{}", owner, repo, git_ref);
        match self.retry.run(move || self.api.list_check_runs_for_ref(owner, repo, git_ref)).await {
            Ok(runs) => {
                self.store(CACHE_CATEGORY_CHECK_RUNS, owner, repo, git_ref, &runs).await;
                runs
            }
            Err(e) => {
                log::error!("❌ Failed to get check runs for {}/{}@{}: {}", owner, repo, git_ref, e);
                Vec::new()
            }
        }
    }

    pub async fn list_check_run_annotations(&self, owner: &str, repo: &str, check_run_id: u64) -> AnalyzerResult<Vec<Annotation>> {
        let id = check_run_id.to_string();
        self.cached_or_fetch(CACHE_CATEGORY_ANNOTATIONS, owner, repo, &id, move || {
            self.api.list_check_run_annotations(owner, repo, check_run_id)
        }).await
    }

    pub async fn list_repositories_for_org(&self, owner: &str) -> AnalyzerResult<Vec<Repository>> {
        log::debug!("Listing repositories for {}", owner);
        self.cached_or_fetch(CACHE_CATEGORY_REPOSITORIES, owner, ORG_LISTING_REPO, ORG_LISTING_ID, move || {
            self.api.list_org_repositories(owner)
        }).await
    }

    async fn cached_or_fetch<T, F, Fut>(&self, category: &str, owner: &str, repo: &str, id: &str, fetch: F) -> AnalyzerResult<Vec<T>>
    where
        T: Serialize + DeserializeOwned,
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<Vec<T>, crate::enums::api_error::ApiError>>,
    {
        if let Some(items) = self.cache.get::<Vec<T>>(category, owner, repo, id).await {
            return Ok(items);
        }

        let items = self.retry.run(fetch).await?;
        self.store(category, owner, repo, id, &items).await;
        Ok(items)
    }

    async fn store<T: Serialize + ?Sized>(&self, category: &str, owner: &str, repo: &str, id: &str, data: &T) {
        if let Err(e) = self.cache.set(category, owner, repo, id, data).await {
            log::warn!("⚠️ {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use crate::enums::api_error::ApiError;
    use crate::structs::commit::Commit;
    use crate::traits::github_api::MockGithubApi;

    fn client(api: MockGithubApi, cache_dir: &std::path::Path) -> RemoteDataClient {
        RemoteDataClient::new(Arc::new(api), DiskCache::new(cache_dir), RetryPolicy::new(2, Duration::ZERO))
    }

    fn raw_run(id: u64, name: &str) -> RawCheckRun {
        RawCheckRun {
            id,
            name: name.to_string(),
            status: "completed".to_string(),
            ..RawCheckRun::default()
        }
    }

    #[tokio::test]
    async fn second_lookup_is_served_from_cache() {
        let dir = tempfile::tempdir().unwrap();
        let mut api = MockGithubApi::new();
        api.expect_list_check_runs_for_ref()
            .times(1)
            .returning(|_, _, _| Ok(vec![raw_run(1, "lint")]));
        let client = client(api, dir.path());

        let first = client.list_check_runs_for_commit("o", "r", "abc").await;
        let second = client.list_check_runs_for_commit("o", "r", "abc").await;

        assert_eq!(first, second);
        assert_eq!(second[0].name, "lint");
    }

    #[tokio::test]
    async fn cached_value_is_returned_without_remote_call() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DiskCache::new(dir.path());
        cache.set(CACHE_CATEGORY_COMMITS, "o", "r", "latest-3", &vec!["c1", "c2"]).await.unwrap();

        let client = client(MockGithubApi::new(), dir.path());
        let shas = client.list_latest_commits("o", "r", 3).await.unwrap();

        assert_eq!(shas, vec!["c1", "c2"]);
    }

    #[tokio::test]
    async fn conflict_means_no_commits() {
        let dir = tempfile::tempdir().unwrap();
        let mut api = MockGithubApi::new();
        api.expect_list_commits()
            .times(1)
            .returning(|_, _, _| Err(ApiError::Conflict { url: "/repos/o/empty/commits".to_string() }));
        let client = client(api, dir.path());

        let shas = client.list_latest_commits("o", "empty", 10).await.unwrap();
        assert!(shas.is_empty());
    }

    #[tokio::test]
    async fn commits_are_mapped_to_shas() {
        let dir = tempfile::tempdir().unwrap();
        let mut api = MockGithubApi::new();
        api.expect_list_commits().returning(|_, _, _| {
            Ok(vec![
                Commit { sha: "c1".to_string(), html_url: None },
                Commit { sha: "c2".to_string(), html_url: None },
            ])
        });
        let client = client(api, dir.path());

        assert_eq!(client.list_latest_commits("o", "r", 2).await.unwrap(), vec!["c1", "c2"]);
    }

    #[tokio::test]
    async fn failing_check_run_fetch_degrades_to_no_runs() {
        let dir = tempfile::tempdir().unwrap();
        let mut api = MockGithubApi::new();
        api.expect_list_check_runs_for_ref()
            .times(2)
            .returning(|_, _, _| Err(ApiError::Network("connection reset".to_string())));
        let client = client(api, dir.path());

        let runs = client.list_check_runs_for_commit("o", "r", "abc").await;

        assert!(runs.is_empty());
        let cached: Option<Vec<RawCheckRun>> = DiskCache::new(dir.path()).get(CACHE_CATEGORY_CHECK_RUNS, "o", "r", "abc").await;
        assert!(cached.is_none());
    }

    #[tokio::test]
    async fn transient_annotation_failure_is_retried() {
        let dir = tempfile::tempdir().unwrap();
        let mut api = MockGithubApi::new();
        let mut seq = mockall::Sequence::new();
        api.expect_list_check_run_annotations()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Err(ApiError::Network("timeout".to_string())));
        api.expect_list_check_run_annotations()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok(vec![Annotation::with_message("boom")]));
        let client = client(api, dir.path());

        let annotations = client.list_check_run_annotations("o", "r", 42).await.unwrap();
        assert_eq!(annotations[0].message.as_deref(), Some("boom"));
        assert!(dir.path().join("annotations/o/r/42.json").exists());
    }

    #[tokio::test]
    async fn exhausted_retries_surface_the_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut api = MockGithubApi::new();
        api.expect_list_org_repositories()
            .times(2)
            .returning(|_| Err(ApiError::Network("down".to_string())));
        let client = client(api, dir.path());

        assert!(client.list_repositories_for_org("o").await.is_err());
    }
}
