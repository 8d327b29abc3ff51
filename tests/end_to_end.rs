use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use async_trait::async_trait;
use checkrun_analyzer::config::constants::{DEFAULT_COMMIT_COUNT, DEFAULT_ORG};
use checkrun_analyzer::enums::api_error::ApiError;
use checkrun_analyzer::enums::job_group::JobGroup;
use checkrun_analyzer::services::repository_analyzer::AnalysisPhases;
use checkrun_analyzer::structs::annotation::Annotation;
use checkrun_analyzer::structs::check_run_output::CheckRunOutput;
use checkrun_analyzer::structs::commit::Commit;
use checkrun_analyzer::structs::config::config::Config;
use checkrun_analyzer::structs::raw_check_run::RawCheckRun;
use checkrun_analyzer::structs::repository::Repository;
use checkrun_analyzer::structs::target_args::TargetArgs;
use checkrun_analyzer::traits::github_api::GithubApi;
use checkrun_analyzer::workers::command_runner::CommandRunner;

const CHANGELOG: &str = "https://github.blog/changelog/xyz/";

/// In-memory GitHub with two commits: A runs frontend tests cleanly, B has a
/// backend test carrying one deprecation annotation.
#[derive(Default)]
struct FakeGithub {
    calls: AtomicUsize,
}

fn check_run(id: u64, name: &str, start: &str, end: &str, annotations_count: u64) -> RawCheckRun {
    RawCheckRun {
        id,
        name: name.to_string(),
        status: "completed".to_string(),
        conclusion: Some("success".to_string()),
        started_at: Some(start.to_string()),
        completed_at: Some(end.to_string()),
        html_url: Some(format!("https://github.com/{}/widgets/runs/{}", DEFAULT_ORG, id)),
        output: CheckRunOutput {
            annotations_count,
            ..CheckRunOutput::default()
        },
    }
}

#[async_trait]
impl GithubApi for FakeGithub {
    async fn list_commits(&self, _owner: &str, repo: &str, count: usize) -> Result<Vec<Commit>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if repo == "empty" {
            return Err(ApiError::Conflict { url: format!("/repos/o/{}/commits", repo) });
        }
        Ok(["A", "B"]
            .iter()
            .take(count)
            .map(|sha| Commit { sha: sha.to_string(), html_url: None })
            .collect())
    }

    async fn list_check_runs_for_ref(&self, _owner: &str, _repo: &str, git_ref: &str) -> Result<Vec<RawCheckRun>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let runs: HashMap<&str, Vec<RawCheckRun>> = HashMap::from([
            ("A", vec![
                check_run(1, "frontend tests", "2022-10-03T12:00:00Z", "2022-10-03T12:05:00Z", 0),
                check_run(2, "lock", "2022-10-03T11:00:00Z", "2022-10-03T13:00:00Z", 0),
            ]),
            ("B", vec![check_run(3, "backend test (0)", "2022-10-03T13:00:00Z", "2022-10-03T13:20:00Z", 1)]),
        ]);
        Ok(runs.get(git_ref).cloned().unwrap_or_default())
    }

    async fn list_check_run_annotations(&self, _owner: &str, _repo: &str, check_run_id: u64) -> Result<Vec<Annotation>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(check_run_id, 3);
        Ok(vec![Annotation::with_message(&format!(
            "Node.js 12 actions are deprecated. For more information see: {}. Please update the following actions to use Node.js 16: actions/checkout",
            CHANGELOG
        ))])
    }

    async fn list_org_repositories(&self, _org: &str) -> Result<Vec<Repository>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(["widgets", "Api", "empty"]
            .iter()
            .map(|name| Repository { name: name.to_string(), ..Repository::default() })
            .collect())
    }
}

fn target(repo: Option<&str>, csv: Option<PathBuf>) -> TargetArgs {
    TargetArgs {
        org: DEFAULT_ORG.to_string(),
        repo: repo.map(str::to_string),
        commits: DEFAULT_COMMIT_COUNT,
        commit: None,
        verbose: true,
        csv,
        links_only: false,
        refresh: false,
        cache_dir: None,
        config: None,
    }
}

fn config(cache_dir: &std::path::Path) -> Config {
    let mut config = Config::default();
    config.cache.dir = cache_dir.display().to_string();
    config.retry.delay_ms = 0;
    config
}

#[tokio::test]
async fn two_commit_repository_yields_one_issue_and_two_groups() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path());
    let client = CommandRunner::build_data_client(Arc::new(FakeGithub::default()), &config);

    let reports = CommandRunner::run_analysis(&client, &config, &target(Some("widgets"), None), AnalysisPhases::all())
        .await
        .unwrap();

    assert_eq!(reports.len(), 1);
    let report = &reports[0];
    assert_eq!(report.commits_examined, 2);

    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].id, CHANGELOG);
    assert_eq!(report.issues[0].count(), 1);
    assert_eq!(report.issues[0].actions, vec!["actions/checkout"]);

    let timing = report.timing.as_ref().unwrap().as_ref().unwrap();
    assert_eq!(timing.longest.commit_ref, "B");
    assert_eq!(timing.longest.duration, 1_200_000);

    let groups: Vec<(JobGroup, usize)> = timing.groups.iter().map(|g| (g.group, g.check_runs_count)).collect();
    assert_eq!(groups, vec![(JobGroup::Frontend, 1), (JobGroup::Backend, 1)]);
    // The ignored "lock" job would otherwise stretch commit A to two hours.
    assert_eq!(timing.groups[0].mean_duration, 300_000.0);
}

#[tokio::test]
async fn second_run_is_served_entirely_from_cache() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path());
    let target = target(Some("widgets"), None);

    let first_api = Arc::new(FakeGithub::default());
    let client = CommandRunner::build_data_client(first_api.clone(), &config);
    CommandRunner::run_analysis(&client, &config, &target, AnalysisPhases::all()).await.unwrap();
    assert!(first_api.calls.load(Ordering::SeqCst) > 0);

    let second_api = Arc::new(FakeGithub::default());
    let client = CommandRunner::build_data_client(second_api.clone(), &config);
    let reports = CommandRunner::run_analysis(&client, &config, &target, AnalysisPhases::all()).await.unwrap();

    assert_eq!(second_api.calls.load(Ordering::SeqCst), 0);
    assert_eq!(reports[0].issues[0].id, CHANGELOG);
}

#[tokio::test]
async fn refresh_bypasses_cached_responses() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config(dir.path());
    let target = target(Some("widgets"), None);

    let client = CommandRunner::build_data_client(Arc::new(FakeGithub::default()), &config);
    CommandRunner::run_analysis(&client, &config, &target, AnalysisPhases::all()).await.unwrap();

    config.cache.refresh = true;
    let api = Arc::new(FakeGithub::default());
    let client = CommandRunner::build_data_client(api.clone(), &config);
    CommandRunner::run_analysis(&client, &config, &target, AnalysisPhases::all()).await.unwrap();

    assert!(api.calls.load(Ordering::SeqCst) > 0);
}

#[tokio::test]
async fn organization_run_sorts_repositories_and_writes_csv() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path());
    let csv_path = dir.path().join("issues.csv");
    let client = CommandRunner::build_data_client(Arc::new(FakeGithub::default()), &config);

    let reports = CommandRunner::run_analysis(&client, &config, &target(None, Some(csv_path.clone())), AnalysisPhases {
        annotations: true,
        timing: false,
    })
    .await
    .unwrap();

    let names: Vec<&str> = reports.iter().map(|r| r.repo.as_str()).collect();
    assert_eq!(names, vec!["Api", "empty", "widgets"]);

    let empty = &reports[1];
    assert_eq!(empty.commits_examined, 0);
    assert!(empty.issues.is_empty());
    assert!(empty.timing.is_none());

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Owner,Repo,Issue Count,Issue Link / Description,Affected Actions,Example runs");
    assert!(lines.contains(&"getsentry,empty,0,,,"));
    assert!(csv.contains(&format!("getsentry,widgets,1,{},actions/checkout,https://github.com/getsentry/widgets/runs/3", CHANGELOG)));
}
