use crate::config::constants::GITHUB_WEB_URL;
use crate::helpers::duration_format::duration_string;
use crate::structs::check_run::CheckRun;
use crate::structs::group_stats::GroupStats;
use crate::structs::issue::Issue;
use crate::structs::repository_report::RepositoryReport;
use crate::structs::timing_summary::TimingSummary;

pub struct ConsoleReporter {
    verbose: bool,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn print_repository_header(&self, owner: &str, repo: &str) {
        println!("----------------------------------");
        println!("        {}/{}", owner, repo);
        println!("----------------------------------");
    }

    pub fn print_report(&self, report: &RepositoryReport) {
        if self.verbose {
            for analysis in &report.commit_analyses {
                self.print_check_runs(&report.owner, &report.repo, &analysis.commit_ref, &analysis.check_runs);
            }
        }
        if let Some(Ok(timing)) = &report.timing {
            self.print_timing(&report.owner, &report.repo, timing);
        }
    }

    pub fn print_issues(&self, owner: &str, repo: &str, issues: &[Issue]) {
        print!("{}", self.render_issues(owner, repo, issues));
    }

    pub fn render_issues(&self, owner: &str, repo: &str, issues: &[Issue]) -> String {
        let mut out = String::new();

        if issues.is_empty() {
            if self.verbose {
                out.push_str(&format!("✅ {}/{}\n\n", owner, repo));
            }
            return out;
        }

        out.push_str(&format!("❌ {}/{}\n", owner, repo));

        if self.verbose {
            for issue in issues {
                out.push_str(&format!("    ({}) {}\n", issue.count(), issue.id));
                out.push_str("        Affected Check Runs:\n");
                for cr in issue.affected_check_runs() {
                    out.push_str(&format!("            {}: {}\n", cr.name, cr.html_url_or_empty()));
                }
                if !issue.actions.is_empty() {
                    out.push_str("        Affected Actions:\n");
                    for action in &issue.actions {
                        out.push_str(&format!("            {}\n", action));
                    }
                }
                out.push('\n');
            }
        }

        for issue in issues {
            out.push_str(&format!("    🟡 ({}) {}\n", issue.count(), issue.id));
        }
        out.push('\n');
        out
    }

    pub fn print_check_runs(&self, owner: &str, repo: &str, commit_ref: &str, check_runs: &[CheckRun]) {
        println!("All check runs for {}/{} @ {}", owner, repo, commit_ref);
        let mut sorted: Vec<&CheckRun> = check_runs.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        for cr in sorted {
            let duration = cr.duration.map_or_else(|| "n/a".to_string(), |d| duration_string(d as f64));
            println!("  - {} -> {}", cr.name, duration);
        }
        println!();
    }

    pub fn print_timing(&self, owner: &str, repo: &str, timing: &TimingSummary) {
        print!("{}", self.render_longest(owner, repo, timing));
        for group in &timing.groups {
            print!("{}", self.render_group(group));
        }
    }

    pub fn render_longest(&self, owner: &str, repo: &str, timing: &TimingSummary) -> String {
        let longest = &timing.longest;
        let mut out = String::new();
        out.push_str("Longest Check Runs for all commit(s)\n");
        out.push_str(&format!("    Commit:      {}/{}/{}/commit/{}\n", GITHUB_WEB_URL, owner, repo, longest.commit_ref));
        out.push_str(&format!("    Duration:    {}\n", duration_string(longest.duration as f64)));
        out.push_str(&format!("    Check Runs:  {}\n", longest.check_runs.len()));
        out.push_str(&format!(
            "    First Check: {} -> {}\n",
            longest.first.started_at_string.as_deref().unwrap_or(""),
            longest.first.name
        ));
        out.push_str(&format!(
            "    Last Check:  {} -> {}\n",
            longest.last.completed_at_string.as_deref().unwrap_or(""),
            longest.last.name
        ));
        out.push('\n');
        out
    }

    pub fn render_group(&self, group: &GroupStats) -> String {
        format!(
            "Averages for {}...........\n    Mean:   {}\n    Median: {}\n    Q75:    {}\n    Q90:    {}\n\n",
            group.group,
            duration_string(group.mean_duration),
            duration_string(group.median_duration),
            duration_string(group.q75),
            duration_string(group.q90),
        )
    }
}
