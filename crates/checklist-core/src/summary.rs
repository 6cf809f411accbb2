//! Confluence Summary
//!
//! Section totals rolled up into one overall figure and a label.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Overall confidence bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    Strong,
    Moderate,
    Weak,
    None,
}

impl Confidence {
    /// >= 100 strong, 60..100 moderate, 1..60 weak, otherwise none
    pub fn from_overall(overall: i64) -> Self {
        if overall >= 100 {
            Confidence::Strong
        } else if overall >= 60 {
            Confidence::Moderate
        } else if overall > 0 {
            Confidence::Weak
        } else {
            Confidence::None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Confidence::Strong => "Strong Confluence",
            Confidence::Moderate => "Moderate Confluence",
            Confidence::Weak => "Weak Confluence",
            Confidence::None => "No confluence",
        }
    }

    /// CSS modifier for the summary badge
    pub fn css_class(&self) -> &'static str {
        match self {
            Confidence::Strong => "strong",
            Confidence::Moderate => "moderate",
            Confidence::Weak => "weak",
            Confidence::None => "none",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// (section key, total) for each summarized section, in display order
    pub sections: Vec<(String, i64)>,
    pub overall: i64,
    pub confidence: Confidence,
}

impl Summary {
    pub fn from_totals(sections: Vec<(String, i64)>) -> Self {
        let overall = sections
            .iter()
            .fold(0i64, |acc, (_, total)| acc.saturating_add(*total));
        Self {
            sections,
            overall,
            confidence: Confidence::from_overall(overall),
        }
    }

    pub fn total(&self, key: &str) -> i64 {
        self.sections
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, total)| *total)
            .unwrap_or(0)
    }
}
