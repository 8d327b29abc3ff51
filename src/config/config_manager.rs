use std::path::{Path, PathBuf};
use std::fs;
use crate::config::constants::CONFIG_FILE_PATH;
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::structs::config::config::Config;
use crate::structs::target_args::TargetArgs;

pub struct ConfigManager;

impl ConfigManager {

    /// Loads the configuration file, falling back to defaults when no file exists.
    ///
    /// An explicitly requested path must exist.
    pub fn load(explicit_path: Option<&Path>) -> AnalyzerResult<Config> {
        let path = match explicit_path {
            Some(path) => {
                if !path.exists() {
                    return Err(AnalyzerError::ConfigurationFileError {
                        path: path.display().to_string(),
                        reason: "file does not exist".to_string(),
                    });
                }
                path.to_path_buf()
            }
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    log::debug!("No configuration file found, using defaults");
                    return Ok(Config::default());
                }
            },
        };

        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(&path).map_err(|e| AnalyzerError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> AnalyzerResult<Config> {
        let config: Config = toml::from_str(content)?;
        Self::validate_config(&config)?;
        Ok(config)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_FILE_PATH))
    }

    /// Command-line flags win over file values.
    pub fn apply_overrides(config: &mut Config, target: &TargetArgs) {
        if let Some(dir) = &target.cache_dir {
            config.cache.dir = dir.display().to_string();
        }
        if target.refresh {
            config.cache.refresh = true;
        }
        if target.links_only {
            config.analysis.links_only = true;
        }
    }

    pub fn validate_config(config: &Config) -> AnalyzerResult<()> {
        if config.github.per_page == 0 || config.github.per_page > 100 {
            return Err(AnalyzerError::config_error(
                "per_page must be between 1 and 100",
                Some("github.per_page"),
                Some("GitHub caps page sizes at 100"),
            ));
        }

        if config.retry.max_attempts == 0 {
            return Err(AnalyzerError::config_error(
                "max_attempts must be at least 1",
                Some("retry.max_attempts"),
                None,
            ));
        }

        if config.cache.dir.trim().is_empty() {
            return Err(AnalyzerError::config_error(
                "cache directory cannot be empty",
                Some("cache.dir"),
                None,
            ));
        }

        Ok(())
    }

    pub fn github_token(config: &Config) -> AnalyzerResult<String> {
        match std::env::var(&config.github.token_env) {
            Ok(token) if !token.trim().is_empty() => Ok(token),
            _ => Err(AnalyzerError::MissingCredential {
                env_var: config.github.token_env.clone(),
            }),
        }
    }
}
