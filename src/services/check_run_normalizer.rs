use chrono::DateTime;
use crate::config::constants::COMPLETED_STATUS;
use crate::structs::check_run::CheckRun;
use crate::structs::raw_check_run::RawCheckRun;

/// Drops infrastructure jobs and unfinished runs, and parses run timestamps.
pub struct CheckRunNormalizer {
    ignored_names: Vec<String>,
}

impl CheckRunNormalizer {
    pub fn new(ignored_names: Vec<String>) -> Self {
        Self { ignored_names }
    }

    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignored_names.iter().any(|n| n == name)
    }

    /// Keeps input order for the surviving runs.
    pub fn normalize(&self, raw_check_runs: Vec<RawCheckRun>) -> Vec<CheckRun> {
        raw_check_runs
            .into_iter()
            .filter(|cr| !self.is_ignored(&cr.name))
            .filter(|cr| cr.status == COMPLETED_STATUS)
            .map(Self::to_check_run)
            .collect()
    }

    fn to_check_run(raw: RawCheckRun) -> CheckRun {
        let started_at = raw.started_at.as_deref().and_then(parse_timestamp);
        let completed_at = raw.completed_at.as_deref().and_then(parse_timestamp);

        if raw.started_at.is_some() && started_at.is_none() {
            log::warn!("⚠️ Malformed started_at for check run '{}': {:?}", raw.name, raw.started_at);
        }

        let duration = match (started_at, completed_at) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        };

        CheckRun {
            id: raw.id,
            name: raw.name,
            status: raw.status,
            conclusion: raw.conclusion,
            started_at,
            completed_at,
            started_at_string: raw.started_at,
            completed_at_string: raw.completed_at,
            duration,
            annotations_count: raw.output.annotations_count,
            html_url: raw.html_url,
        }
    }
}

/// RFC 3339 timestamp to epoch milliseconds.
pub fn parse_timestamp(value: &str) -> Option<i64> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.timestamp_millis())
}
