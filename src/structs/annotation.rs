use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub path: Option<String>,

    #[serde(default)]
    pub start_line: Option<u64>,

    #[serde(default)]
    pub end_line: Option<u64>,

    #[serde(default)]
    pub annotation_level: Option<String>,

    #[serde(default)]
    pub title: Option<String>,
}

impl Annotation {
    pub fn with_message(message: &str) -> Self {
        Self {
            message: Some(message.to_string()),
            ..Self::default()
        }
    }
}
