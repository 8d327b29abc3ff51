use crate::errors::AnalyzerResult;
use crate::services::annotation_aggregator::{AnnotationAggregator, MessageRules};
use crate::services::check_run_normalizer::CheckRunNormalizer;
use crate::services::data_client::RemoteDataClient;
use crate::services::duration_stats::DurationStatistics;
use crate::structs::check_run::CheckRun;
use crate::structs::commit_analysis::CommitAnalysis;
use crate::structs::config::analysis_config::AnalysisConfig;
use crate::structs::repository_report::RepositoryReport;

/// What a single repository run should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisPhases {
    pub annotations: bool,
    pub timing: bool,
}

impl AnalysisPhases {
    pub fn all() -> Self {
        Self {
            annotations: true,
            timing: true,
        }
    }
}

/// Runs the commit -> check run -> annotation pipeline for one repository.
///
/// Commits are processed one at a time in listing order, and annotations are
/// fetched one check run at a time.
pub struct RepositoryAnalyzer<'a> {
    client: &'a RemoteDataClient,
    normalizer: CheckRunNormalizer,
    rules: MessageRules,
    frontend_marker: String,
    backend_marker: String,
}

impl<'a> RepositoryAnalyzer<'a> {
    pub fn new(client: &'a RemoteDataClient, config: &AnalysisConfig) -> AnalyzerResult<Self> {
        Ok(Self {
            client,
            normalizer: CheckRunNormalizer::new(config.ignored_check_runs.clone()),
            rules: MessageRules::from_config(config)?,
            frontend_marker: config.frontend_marker.clone(),
            backend_marker: config.backend_marker.clone(),
        })
    }

    pub async fn commits_to_examine(&self, owner: &str, repo: &str, count: usize, commit_ref: Option<&str>) -> AnalyzerResult<Vec<String>> {
        match commit_ref {
            Some(commit_ref) => Ok(vec![commit_ref.to_string()]),
            None => self.client.list_latest_commits(owner, repo, count).await,
        }
    }

    pub async fn analyze(&self, owner: &str, repo: &str, commits: &[String], phases: AnalysisPhases) -> RepositoryReport {
        log::info!("🔍 Examining {} commit(s) of {}/{}", commits.len(), owner, repo);

        let mut report = RepositoryReport::empty(owner, repo);
        report.commits_examined = commits.len();
        let mut aggregator = AnnotationAggregator::new(self.rules.clone());

        for commit_ref in commits {
            let raw = self.client.list_check_runs_for_commit(owner, repo, commit_ref).await;
            let check_runs = self.normalizer.normalize(raw);
            if check_runs.is_empty() {
                log::debug!("No usable check runs for {}/{}@{}", owner, repo, commit_ref);
                continue;
            }

            if phases.annotations {
                self.collect_annotations(owner, repo, &check_runs, &mut aggregator).await;
            }

            if phases.timing {
                if let Some(analysis) = CommitAnalysis::from_check_runs(commit_ref, check_runs, &self.frontend_marker, &self.backend_marker) {
                    report.commit_analyses.push(analysis);
                }
            }
        }

        if phases.annotations {
            if aggregator.skipped() > 0 {
                log::warn!("⚠️ Skipped {} annotation(s) without a message in {}/{}", aggregator.skipped(), owner, repo);
            }
            report.issues = aggregator.into_issues();
        }

        if phases.timing {
            report.timing = Some(DurationStatistics::summarize(&report.full_name(), &report.commit_analyses));
        }

        report
    }

    async fn collect_annotations(&self, owner: &str, repo: &str, check_runs: &[CheckRun], aggregator: &mut AnnotationAggregator) {
        for check_run in check_runs.iter().filter(|cr| cr.has_annotations()) {
            match self.client.list_check_run_annotations(owner, repo, check_run.id).await {
                Ok(annotations) => aggregator.add(check_run, annotations),
                Err(e) => {
                    log::error!("❌ Failed to get annotations for check run '{}' ({}): {}", check_run.name, check_run.id, e);
                }
            }
        }
    }
}
