//! Shared types for the fixed-checklist auditors.

use serde::{Deserialize, Serialize};

/// Outcome of one fixed-weight check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum CheckOutcome {
    /// Points awarded; the note, if any, goes to the passes list.
    Passed(Option<String>),
    /// No points; the message goes to the issues list.
    Failed(String),
    /// No points and nothing to report (e.g. no inputs to label).
    Skipped,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, Self::Passed(_))
    }

    pub(crate) fn pass() -> Self {
        Self::Passed(None)
    }

    pub(crate) fn pass_with(note: &str) -> Self {
        Self::Passed(Some(note.to_string()))
    }

    pub(crate) fn fail(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// A single named check suitable for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub key: &'static str,
    pub label: &'static str,
    pub outcome: CheckOutcome,
}

/// All checks of one auditor with the points each passed check is worth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scorecard {
    pub points_per_check: u32,
    pub checks: Vec<CheckResult>,
}

impl Scorecard {
    pub fn new(points_per_check: u32) -> Self {
        Self {
            points_per_check,
            checks: Vec::new(),
        }
    }

    pub fn record(&mut self, key: &'static str, label: &'static str, outcome: CheckOutcome) {
        self.checks.push(CheckResult {
            key,
            label,
            outcome,
        });
    }

    pub fn score(&self) -> u32 {
        self.checks.iter().filter(|c| c.outcome.passed()).count() as u32 * self.points_per_check
    }

    pub fn max_score(&self) -> u32 {
        self.checks.len() as u32 * self.points_per_check
    }

    pub fn issues(&self) -> Vec<String> {
        self.checks
            .iter()
            .filter_map(|c| match &c.outcome {
                CheckOutcome::Failed(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn passes(&self) -> Vec<String> {
        self.checks
            .iter()
            .filter_map(|c| match &c.outcome {
                CheckOutcome::Passed(Some(note)) => Some(note.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn get(&self, key: &str) -> Option<&CheckResult> {
        self.checks.iter().find(|c| c.key == key)
    }
}
