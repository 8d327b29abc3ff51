use std::fmt;
use serde::{Deserialize, Serialize};
use crate::structs::check_run::CheckRun;

/// Coarse job category of a commit, derived from the names of its check runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobGroup {
    Frontend,
    Backend,
    FrontendAndBackend,
    Unknown,
}

impl JobGroup {
    pub fn from_check_runs(check_runs: &[CheckRun], frontend_marker: &str, backend_marker: &str) -> Self {
        let frontend = check_runs.iter().any(|cr| cr.name.contains(frontend_marker));
        let backend = check_runs.iter().any(|cr| cr.name.contains(backend_marker));

        match (frontend, backend) {
            (true, true) => JobGroup::FrontendAndBackend,
            (true, false) => JobGroup::Frontend,
            (false, true) => JobGroup::Backend,
            (false, false) => JobGroup::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JobGroup::Frontend => "frontend",
            JobGroup::Backend => "backend",
            JobGroup::FrontendAndBackend => "frontend and backend",
            JobGroup::Unknown => "unknown",
        }
    }
}

impl fmt::Display for JobGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
