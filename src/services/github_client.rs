use async_trait::async_trait;
use reqwest::header::{HeaderMap, ACCEPT, RETRY_AFTER};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tokio::time::sleep;
use crate::config::constants::{sleep_duration_secs, DEFAULT_RATE_LIMIT_WAIT_SECS, GITHUB_API_VERSION, USER_AGENT};
use crate::enums::api_error::ApiError;
use crate::structs::annotation::Annotation;
use crate::structs::check_runs_page::CheckRunsPage;
use crate::structs::commit::Commit;
use crate::structs::config::github_config::GithubConfig;
use crate::structs::raw_check_run::RawCheckRun;
use crate::structs::repository::Repository;
use crate::traits::github_api::GithubApi;

/// REST client for the GitHub checks, commits and repositories endpoints.
#[derive(Clone)]
pub struct GithubHttpClient {
    token: String,
    base_url: String,
    client: Client,
    per_page: usize,
    rate_limit_retries: u32,
}

impl GithubHttpClient {
    pub fn new(token: String, config: &GithubConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            token,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            client,
            per_page: config.per_page,
            rate_limit_retries: config.rate_limit_retries,
        })
    }

    /// GET with rate-limit back-off: a throttled request is retried up to
    /// `rate_limit_retries` times after the delay the server asks for.
    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut retries = 0;

        loop {
            let response = self
                .client
                .get(&url)
                .query(query)
                .bearer_auth(&self.token)
                .header(ACCEPT, "application/vnd.github+json")
                .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
                .send()
                .await?;

            let status = response.status();
            if status.is_success() {
                return response.json::<T>().await.map_err(|e| ApiError::Decode {
                    url: url.clone(),
                    reason: e.to_string(),
                });
            }

            if let Some(wait_secs) = rate_limit_delay(status, response.headers()) {
                if retries < self.rate_limit_retries {
                    retries += 1;
                    log::warn!("⏳ Request quota exhausted for request GET {}", url);
                    log::info!("Retrying after {} seconds!", wait_secs);
                    sleep(sleep_duration_secs(wait_secs)).await;
                    continue;
                }
                return Err(ApiError::RateLimited {
                    url,
                    retry_after_secs: wait_secs,
                });
            }

            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(match status {
                StatusCode::UNAUTHORIZED => ApiError::Authentication(body),
                StatusCode::CONFLICT => ApiError::Conflict { url },
                _ => ApiError::Status {
                    url,
                    status: status.as_u16(),
                    body,
                },
            });
        }
    }

    /// Fetches pages of `per_page` items until a short page or until `limit` items.
    async fn paginate<T, F>(&self, path: &str, extra: &[(&str, String)], limit: Option<usize>, mut items_of: F) -> Result<Vec<T>, ApiError>
    where
        T: DeserializeOwned,
        F: FnMut(serde_json::Value) -> Result<Vec<T>, serde_json::Error>,
    {
        let per_page = match limit {
            Some(limit) => limit.clamp(1, self.per_page),
            None => self.per_page,
        };
        let mut results = Vec::new();
        let mut page = 1;

        loop {
            let mut query: Vec<(&str, String)> = extra.to_vec();
            query.push(("per_page", per_page.to_string()));
            query.push(("page", page.to_string()));

            let body: serde_json::Value = self.get_json(path, &query).await?;
            let items = items_of(body).map_err(|e| ApiError::Decode {
                url: format!("{}{}", self.base_url, path),
                reason: e.to_string(),
            })?;
            let received = items.len();
            results.extend(items);

            if let Some(limit) = limit {
                if results.len() >= limit {
                    results.truncate(limit);
                    break;
                }
            }
            if received < per_page {
                break;
            }
            page += 1;
        }

        Ok(results)
    }
}

/// Seconds to wait when the response is a primary or secondary rate limit.
fn rate_limit_delay(status: StatusCode, headers: &HeaderMap) -> Option<u64> {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<i64>().ok())
    };

    let retry_after = headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok());
    let exhausted = header("x-ratelimit-remaining") == Some(0);

    let throttled = status == StatusCode::TOO_MANY_REQUESTS
        || (status == StatusCode::FORBIDDEN && (retry_after.is_some() || exhausted));
    if !throttled {
        return None;
    }

    if let Some(secs) = retry_after {
        return Some(secs);
    }
    if let Some(reset) = header("x-ratelimit-reset") {
        let now = chrono::Utc::now().timestamp();
        return Some(u64::try_from(reset - now).unwrap_or(0));
    }
    Some(DEFAULT_RATE_LIMIT_WAIT_SECS)
}

#[async_trait]
impl GithubApi for GithubHttpClient {
    async fn list_commits(&self, owner: &str, repo: &str, count: usize) -> Result<Vec<Commit>, ApiError> {
        if count == 0 {
            return Ok(Vec::new());
        }
        let path = format!("/repos/{}/{}/commits", owner, repo);
        self.paginate(&path, &[], Some(count), serde_json::from_value).await
    }

    async fn list_check_runs_for_ref(&self, owner: &str, repo: &str, git_ref: &str) -> Result<Vec<RawCheckRun>, ApiError> {
        let path = format!("/repos/{}/{}/commits/{}/check-runs", owner, repo, git_ref);
        let query = [("status", "completed".to_string())];
        self.paginate(&path, &query, None, |body| {
            serde_json::from_value::<CheckRunsPage>(body).map(|page| page.check_runs)
        }).await
    }

    async fn list_check_run_annotations(&self, owner: &str, repo: &str, check_run_id: u64) -> Result<Vec<Annotation>, ApiError> {
        let path = format!("/repos/{}/{}/check-runs/{}/annotations", owner, repo, check_run_id);
        self.paginate(&path, &[], None, serde_json::from_value).await
    }

    async fn list_org_repositories(&self, org: &str) -> Result<Vec<Repository>, ApiError> {
        let path = format!("/orgs/{}/repos", org);
        self.paginate(&path, &[], None, serde_json::from_value).await
    }
}
