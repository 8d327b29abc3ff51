use std::io::Write;
use std::path::Path;
use serde::Serialize;
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::structs::repository_report::RepositoryReport;

#[derive(Debug, Serialize, PartialEq)]
pub struct IssueRow {
    #[serde(rename = "Owner")]
    pub org: String,
    #[serde(rename = "Repo")]
    pub repo: String,
    #[serde(rename = "Issue Count")]
    pub count: usize,
    #[serde(rename = "Issue Link / Description")]
    pub links: String,
    #[serde(rename = "Affected Actions")]
    pub actions: String,
    #[serde(rename = "Example runs")]
    pub example_runs: String,
}

pub struct CsvReporter;

impl CsvReporter {
    /// One row per issue; a repository without issues gets a single zero-count row.
    pub fn rows(reports: &[RepositoryReport]) -> Vec<IssueRow> {
        let mut rows = Vec::new();
        for report in reports {
            if report.issues.is_empty() {
                rows.push(IssueRow {
                    org: report.owner.clone(),
                    repo: report.repo.clone(),
                    count: 0,
                    links: String::new(),
                    actions: String::new(),
                    example_runs: String::new(),
                });
                continue;
            }

            for issue in &report.issues {
                rows.push(IssueRow {
                    org: report.owner.clone(),
                    repo: report.repo.clone(),
                    count: issue.count(),
                    links: issue.id.clone(),
                    actions: issue.actions.join("\n"),
                    example_runs: issue
                        .affected_check_runs()
                        .map(|cr| cr.html_url_or_empty())
                        .collect::<Vec<_>>()
                        .join("\n"),
                });
            }
        }
        rows
    }

    pub fn write_to<W: Write>(writer: W, reports: &[RepositoryReport]) -> AnalyzerResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for row in Self::rows(reports) {
            csv_writer.serialize(row)?;
        }
        csv_writer.flush().map_err(|e| AnalyzerError::report_error("CSV", &e.to_string()))?;
        Ok(())
    }

    pub fn save(path: &Path, reports: &[RepositoryReport]) -> AnalyzerResult<()> {
        let file = std::fs::File::create(path)
            .map_err(|e| AnalyzerError::report_error(&path.display().to_string(), &e.to_string()))?;
        Self::write_to(file, reports)?;
        println!("CSV file written: {}", path.display());
        Ok(())
    }
}
