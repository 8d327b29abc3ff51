use std::collections::HashMap;
use regex::Regex;
use crate::errors::AnalyzerResult;
use crate::structs::annotation::Annotation;
use crate::structs::check_run::CheckRun;
use crate::structs::config::analysis_config::AnalysisConfig;
use crate::structs::config::pattern_rule::PatternRule;
use crate::structs::issue::Issue;

/// A compiled [`PatternRule`].
#[derive(Debug, Clone)]
pub struct CaptureRule {
    regex: Regex,
    group: usize,
}

impl CaptureRule {
    pub fn compile(rule: &PatternRule) -> AnalyzerResult<Self> {
        Ok(Self {
            regex: Regex::new(&rule.pattern)?,
            group: rule.group,
        })
    }

    /// The capture group of the first match, if it participated.
    pub fn capture<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.regex
            .captures(text)
            .and_then(|caps| caps.get(self.group))
            .map(|m| m.as_str())
    }
}

/// Pattern set used to classify annotation messages.
#[derive(Debug, Clone)]
pub struct MessageRules {
    benign: Vec<Regex>,
    issue_key: CaptureRule,
    actions: CaptureRule,
    links_only: bool,
}

impl MessageRules {
    pub fn from_config(config: &AnalysisConfig) -> AnalyzerResult<Self> {
        let benign = config
            .benign_patterns
            .iter()
            .map(|p| Regex::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            benign,
            issue_key: CaptureRule::compile(&config.issue_key_rule)?,
            actions: CaptureRule::compile(&config.actions_rule)?,
            links_only: config.links_only,
        })
    }

    pub fn is_benign(&self, message: &str) -> bool {
        self.benign.iter().any(|re| re.is_match(message))
    }

    /// The linked changelog entry when present, otherwise the whole message.
    /// `None` when only linked messages are wanted and there is no link.
    pub fn issue_key(&self, message: &str) -> Option<String> {
        match self.issue_key.capture(message) {
            Some(link) => Some(link.to_string()),
            None if self.links_only => None,
            None => Some(message.to_string()),
        }
    }

    pub fn actions(&self, message: &str) -> Vec<String> {
        match self.actions.capture(message) {
            Some(list) => list
                .split(", ")
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Folds annotations from many check runs into deduplicated issues.
pub struct AnnotationAggregator {
    rules: MessageRules,
    issues: Vec<Issue>,
    index: HashMap<String, usize>,
    skipped: usize,
}

impl AnnotationAggregator {
    pub fn new(rules: MessageRules) -> Self {
        Self {
            rules,
            issues: Vec::new(),
            index: HashMap::new(),
            skipped: 0,
        }
    }

    pub fn add(&mut self, check_run: &CheckRun, annotations: Vec<Annotation>) {
        for annotation in annotations {
            self.add_annotation(check_run, annotation);
        }
    }

    pub fn add_annotation(&mut self, check_run: &CheckRun, annotation: Annotation) {
        let message = match annotation.message.as_deref() {
            Some(message) if !message.trim().is_empty() => message.to_string(),
            _ => {
                log::warn!("⚠️ Annotation without a message on check run '{}' ({})", check_run.name, check_run.html_url_or_empty());
                self.skipped += 1;
                return;
            }
        };

        if self.rules.is_benign(&message) {
            log::debug!("Ignoring benign annotation: {}", message);
            return;
        }

        let Some(key) = self.rules.issue_key(&message) else {
            return;
        };
        let actions = self.rules.actions(&message);

        let position = match self.index.get(&key) {
            Some(&position) => position,
            None => {
                self.issues.push(Issue::new(key.clone(), message));
                self.index.insert(key, self.issues.len() - 1);
                self.issues.len() - 1
            }
        };

        self.issues[position].record(annotation, check_run, actions);
    }

    /// Annotations dropped because their message was missing.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Issues by descending count; equal counts keep first-seen order.
    pub fn into_issues(self) -> Vec<Issue> {
        let mut issues = self.issues;
        issues.sort_by(|a, b| b.count().cmp(&a.count()));
        issues
    }
}
