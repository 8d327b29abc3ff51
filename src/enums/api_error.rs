use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network Error: {0}")]
    Network(String),

    #[error("HTTP {status} from {url}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Conflict from {url}")]
    Conflict { url: String },

    #[error("Rate limit exceeded for {url}, retry after {retry_after_secs}s")]
    RateLimited {
        url: String,
        retry_after_secs: u64,
    },

    #[error("Authentication Error: {0}")]
    Authentication(String),

    #[error("Failed to decode response from {url}: {reason}")]
    Decode { url: String, reason: String },
}

impl ApiError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Conflict { .. } => Some(409),
            ApiError::RateLimited { .. } => Some(429),
            ApiError::Authentication(_) => Some(401),
            ApiError::Network(_) | ApiError::Decode { .. } => None,
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, ApiError::Conflict { .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        ApiError::Network(error.to_string())
    }
}
