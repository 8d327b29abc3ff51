use serde::Serialize;
use crate::structs::annotation::Annotation;
use crate::structs::check_run::CheckRun;

/// A recurring annotation, deduplicated across check runs by its derived key.
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    pub id: String,
    /// First message seen for this key.
    pub message: String,
    pub annotations: Vec<Annotation>,
    /// Affected check runs keyed by name. A later run with the same name replaces
    /// the earlier one but keeps its position.
    pub check_runs: Vec<(String, CheckRun)>,
    pub actions: Vec<String>,
}

impl Issue {
    pub fn new(id: String, message: String) -> Self {
        Self {
            id,
            message,
            annotations: Vec::new(),
            check_runs: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn count(&self) -> usize {
        self.annotations.len()
    }

    pub fn record(&mut self, annotation: Annotation, check_run: &CheckRun, actions: Vec<String>) {
        self.annotations.push(annotation);
        self.upsert_check_run(check_run);
        for action in actions {
            self.add_action(action);
        }
    }

    pub fn upsert_check_run(&mut self, check_run: &CheckRun) {
        match self.check_runs.iter_mut().find(|(name, _)| *name == check_run.name) {
            Some(entry) => entry.1 = check_run.clone(),
            None => self.check_runs.push((check_run.name.clone(), check_run.clone())),
        }
    }

    pub fn add_action(&mut self, action: String) {
        if !self.actions.contains(&action) {
            self.actions.push(action);
        }
    }

    pub fn affected_check_runs(&self) -> impl Iterator<Item = &CheckRun> {
        self.check_runs.iter().map(|(_, cr)| cr)
    }
}
