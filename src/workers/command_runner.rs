use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::AnalyzerResult;
use crate::logger::console_reporter::ConsoleReporter;
use crate::logger::csv_reporter::CsvReporter;
use crate::services::data_client::RemoteDataClient;
use crate::services::disk_cache::DiskCache;
use crate::services::github_client::GithubHttpClient;
use crate::services::repository_analyzer::{AnalysisPhases, RepositoryAnalyzer};
use crate::services::retry::RetryPolicy;
use crate::structs::config::config::Config;
use crate::structs::repository_report::RepositoryReport;
use crate::structs::target_args::TargetArgs;
use crate::traits::github_api::GithubApi;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> AnalyzerResult<()> {
        self.start_time = Some(Instant::now());

        let phases = AnalysisPhases {
            annotations: command.wants_annotations(),
            timing: command.wants_timing(),
        };
        let target = command.target();

        let config = Self::load_config(target)?;

        let token = ConfigManager::github_token(&config)?;
        let api = GithubHttpClient::new(token, &config.github)?;
        let client = Self::build_data_client(Arc::new(api), &config);

        let result = Self::run_analysis(&client, &config, target, phases).await.map(|_| ());

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    pub fn load_config(target: &TargetArgs) -> AnalyzerResult<Config> {
        let mut config = ConfigManager::load(target.config.as_deref())?;
        ConfigManager::apply_overrides(&mut config, target);
        ConfigManager::validate_config(&config)?;
        Ok(config)
    }

    pub fn build_data_client(api: Arc<dyn GithubApi>, config: &Config) -> RemoteDataClient {
        let cache = if config.cache.refresh {
            log::info!("🔄 Ignoring cached responses under {}", config.cache.dir);
            DiskCache::write_only(&config.cache.dir)
        } else {
            DiskCache::new(&config.cache.dir)
        };
        RemoteDataClient::new(api, cache, RetryPolicy::from(&config.retry))
    }

    /// Analyzes every selected repository, prints the reports and writes the CSV.
    /// A failing repository is logged and skipped.
    pub async fn run_analysis(client: &RemoteDataClient, config: &Config, target: &TargetArgs, phases: AnalysisPhases) -> AnalyzerResult<Vec<RepositoryReport>> {
        let analyzer = RepositoryAnalyzer::new(client, &config.analysis)?;
        let reporter = ConsoleReporter::new(target.verbose);
        let repos = Self::repositories(client, target).await?;

        log::info!("🌍 Analyzing {} repository(ies) of {}", repos.len(), target.org);

        let mut reports = Vec::new();
        for repo in repos {
            match Self::analyze_repository(&analyzer, &reporter, target, &repo, phases).await {
                Ok(report) => reports.push(report),
                Err(e) => {
                    log::error!("❌ Failed to analyze repository '{}/{}': {}", target.org, repo, e);
                    log::error!("   Continuing with next repository...");
                }
            }
        }

        if let Some(path) = &target.csv {
            if phases.annotations {
                CsvReporter::save(path, &reports)?;
            } else {
                log::warn!("⚠️ --csv only applies to annotation analysis, nothing written");
            }
        }

        Ok(reports)
    }

    async fn repositories(client: &RemoteDataClient, target: &TargetArgs) -> AnalyzerResult<Vec<String>> {
        if let Some(repo) = &target.repo {
            return Ok(vec![repo.clone()]);
        }

        let mut names: Vec<String> = client
            .list_repositories_for_org(&target.org)
            .await?
            .into_iter()
            .map(|r| r.name)
            .collect();
        names.sort_by_key(|name| name.to_lowercase());
        Ok(names)
    }

    async fn analyze_repository(analyzer: &RepositoryAnalyzer<'_>, reporter: &ConsoleReporter, target: &TargetArgs, repo: &str, phases: AnalysisPhases) -> AnalyzerResult<RepositoryReport> {
        let owner = target.org.as_str();
        if phases.timing {
            reporter.print_repository_header(owner, repo);
        }

        let commits = analyzer
            .commits_to_examine(owner, repo, target.commits, target.commit.as_deref())
            .await?;
        log::info!("Examining {} commit(s)", commits.len());

        let report = analyzer.analyze(owner, repo, &commits, phases).await;

        if phases.annotations {
            reporter.print_issues(owner, repo, &report.issues);
        }
        reporter.print_report(&report);
        if let Some(Err(e)) = &report.timing {
            log::error!("{} {}", e.severity().emoji(), e.user_message());
        }

        Ok(report)
    }
}
