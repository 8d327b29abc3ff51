use std::fmt;
use std::error::Error as StdError;
use crate::enums::api_error::ApiError;

#[derive(Debug)]
pub enum AnalyzerError {
    // Configuration errors
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    ConfigurationFileError {
        path: String,
        reason: String,
    },
    MissingCredential {
        env_var: String,
    },

    // Remote API errors
    NetworkError {
        operation: String,
        url: Option<String>,
        status_code: Option<u16>,
        reason: String,
    },
    RateLimited {
        operation: String,
        retry_after_secs: u64,
    },

    // Local state errors
    CacheError {
        path: String,
        reason: String,
    },
    ParseError {
        content_type: String,
        line_number: Option<usize>,
        reason: String,
    },

    // Analysis errors
    NoTimingData {
        repository: String,
    },
    ReportError {
        destination: String,
        reason: String,
    },
}

impl AnalyzerError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn cache_error(path: &str, reason: &str) -> Self {
        Self::CacheError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn report_error(destination: &str, reason: &str) -> Self {
        Self::ReportError {
            destination: destination.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::NetworkError { .. } => true,
            Self::RateLimited { .. } => true,
            Self::CacheError { .. } => true,
            Self::NoTimingData { .. } => true,
            Self::ConfigurationError { .. } => false,
            Self::ConfigurationFileError { .. } => false,
            Self::MissingCredential { .. } => false,
            Self::ParseError { .. } => false,
            Self::ReportError { .. } => false,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingCredential { .. } => ErrorSeverity::Critical,
            Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::ReportError { .. } => ErrorSeverity::High,
            Self::ConfigurationError { .. } => ErrorSeverity::High,
            Self::NetworkError { .. } => ErrorSeverity::Medium,
            Self::RateLimited { .. } => ErrorSeverity::Medium,
            Self::ParseError { .. } => ErrorSeverity::Medium,
            Self::CacheError { .. } => ErrorSeverity::Low,
            Self::NoTimingData { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{}': {}\n💡 Check file permissions and syntax", path, reason)
            }
            Self::MissingCredential { env_var } => {
                format!("Please define a {}.\n💡 Export a GitHub access token before running", env_var)
            }
            Self::NetworkError { operation, url, status_code, reason } => {
                let mut msg = format!("Network error during {}: {}", operation, reason);
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {})", url));
                }
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {})", code));
                }
                msg.push_str("\n💡 Check your internet connection and try again");
                msg
            }
            Self::RateLimited { operation, retry_after_secs } => {
                format!("Rate limit exhausted during {} (server asked to wait {}s)\n💡 Wait for the quota to reset and run again; cached results are kept", operation, retry_after_secs)
            }
            Self::CacheError { path, reason } => {
                format!("Cache error at '{}': {}", path, reason)
            }
            Self::ParseError { content_type, line_number, reason } => {
                let mut msg = format!("Parse error in {}: {}", content_type, reason);
                if let Some(line) = line_number {
                    msg.push_str(&format!(" (line {})", line));
                }
                msg
            }
            Self::NoTimingData { repository } => {
                format!("Failed to get a longest check run for '{}': no commit produced usable check-run timing", repository)
            }
            Self::ReportError { destination, reason } => {
                format!("Failed to write report to '{}': {}", destination, reason)
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

impl fmt::Display for AnalyzerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for AnalyzerError {}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for analyzer operations
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;

pub struct ErrorHandler;

impl ErrorHandler {
    /// Handle error with appropriate logging and user feedback
    pub fn handle_error(error: &AnalyzerError) {
        let severity = error.severity();

        log::debug!("[{}] {}", severity.name(), error.technical_details());

        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 This error is recoverable - you can retry the operation");
        }
    }
}

impl From<std::io::Error> for AnalyzerError {
    fn from(error: std::io::Error) -> Self {
        AnalyzerError::CacheError {
            path: "<io>".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for AnalyzerError {
    fn from(error: serde_json::Error) -> Self {
        AnalyzerError::ParseError {
            content_type: "JSON".to_string(),
            line_number: Some(error.line()),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for AnalyzerError {
    fn from(error: toml::de::Error) -> Self {
        AnalyzerError::ParseError {
            content_type: "TOML".to_string(),
            line_number: None,
            reason: error.message().to_string(),
        }
    }
}

impl From<regex::Error> for AnalyzerError {
    fn from(error: regex::Error) -> Self {
        AnalyzerError::ConfigurationError {
            message: format!("invalid pattern: {}", error),
            field: None,
            suggestion: Some("Check the regular expressions in the [analysis] section".to_string()),
        }
    }
}

impl From<csv::Error> for AnalyzerError {
    fn from(error: csv::Error) -> Self {
        AnalyzerError::ReportError {
            destination: "CSV".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<ApiError> for AnalyzerError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::RateLimited { url, retry_after_secs } => AnalyzerError::RateLimited {
                operation: url,
                retry_after_secs,
            },
            ApiError::Status { url, status, body } => AnalyzerError::NetworkError {
                operation: "GitHub API request".to_string(),
                url: Some(url),
                status_code: Some(status),
                reason: body,
            },
            other => AnalyzerError::NetworkError {
                operation: "GitHub API request".to_string(),
                url: None,
                status_code: other.status_code(),
                reason: other.to_string(),
            },
        }
    }
}
