use crate::enums::job_group::JobGroup;
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::structs::commit_analysis::CommitAnalysis;
use crate::structs::group_stats::GroupStats;
use crate::structs::timing_summary::TimingSummary;

pub struct DurationStatistics;

impl DurationStatistics {

    /// Longest commit plus per-group statistics.
    pub fn summarize(repository: &str, analyses: &[CommitAnalysis]) -> AnalyzerResult<TimingSummary> {
        let longest = Self::longest(analyses).ok_or_else(|| AnalyzerError::NoTimingData {
            repository: repository.to_string(),
        })?;

        Ok(TimingSummary {
            longest: longest.clone(),
            groups: Self::group_stats(analyses),
        })
    }

    /// The first commit with the greatest duration.
    pub fn longest(analyses: &[CommitAnalysis]) -> Option<&CommitAnalysis> {
        analyses.iter().fold(None, |longest: Option<&CommitAnalysis>, analysis| match longest {
            Some(current) if current.duration >= analysis.duration => Some(current),
            _ => Some(analysis),
        })
    }

    /// Groups appear in the order they are first seen.
    pub fn group_stats(analyses: &[CommitAnalysis]) -> Vec<GroupStats> {
        let mut groups: Vec<(JobGroup, Vec<i64>)> = Vec::new();
        for analysis in analyses {
            match groups.iter_mut().find(|(group, _)| *group == analysis.group) {
                Some((_, durations)) => durations.push(analysis.duration),
                None => groups.push((analysis.group, vec![analysis.duration])),
            }
        }

        groups
            .into_iter()
            .map(|(group, durations)| Self::compute(group, durations))
            .collect()
    }

    pub fn compute(group: JobGroup, mut durations: Vec<i64>) -> GroupStats {
        durations.sort_unstable();
        let total_duration: i64 = durations.iter().sum();
        let check_runs_count = durations.len();
        let mean_duration = if check_runs_count == 0 {
            f64::NAN
        } else {
            total_duration as f64 / check_runs_count as f64
        };

        GroupStats {
            group,
            total_duration,
            check_runs_count,
            mean_duration,
            median_duration: median(&durations),
            q75: quantile(&durations, 0.75),
            q90: quantile(&durations, 0.90),
            durations,
        }
    }
}

/// Median of an ascending slice; NaN when empty.
pub fn median(sorted: &[i64]) -> f64 {
    let len = sorted.len();
    if len == 0 {
        return f64::NAN;
    }
    let mid = len / 2;
    if len % 2 == 0 {
        (sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0
    } else {
        sorted[mid] as f64
    }
}

/// Linear-interpolation quantile of an ascending slice at position `(n - 1) * q`.
pub fn quantile(sorted: &[i64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let pos = (sorted.len() - 1) as f64 * q;
    let base = pos.floor() as usize;
    let rest = pos - base as f64;

    match sorted.get(base + 1) {
        Some(&next) => sorted[base] as f64 + rest * (next - sorted[base]) as f64,
        None => sorted[base] as f64,
    }
}
