use serde::{Deserialize, Serialize};

/// A regular expression plus the capture group holding the extracted value.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PatternRule {
    pub pattern: String,

    #[serde(default)]
    pub group: usize,
}

impl PatternRule {
    pub fn new(pattern: &str, group: usize) -> Self {
        Self {
            pattern: pattern.to_string(),
            group,
        }
    }
}
