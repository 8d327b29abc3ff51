use serde::{Deserialize, Serialize};

/// A completed check run with parsed timestamps.
///
/// Timestamps are epoch milliseconds. They are `None` when the API string was
/// missing or malformed, and `duration` is only known when both are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckRun {
    pub id: u64,
    pub name: String,
    pub status: String,
    pub conclusion: Option<String>,
    pub started_at: Option<i64>,
    pub completed_at: Option<i64>,
    pub started_at_string: Option<String>,
    pub completed_at_string: Option<String>,
    pub duration: Option<i64>,
    pub annotations_count: u64,
    pub html_url: Option<String>,
}

impl CheckRun {
    pub fn has_annotations(&self) -> bool {
        self.annotations_count > 0
    }

    pub fn html_url_or_empty(&self) -> &str {
        self.html_url.as_deref().unwrap_or("")
    }
}
