//! Checklist Layout
//!
//! Static definition of sections and rows, the starting point every
//! page load is built from before persisted state is applied.

use serde::{Deserialize, Serialize};

use crate::row::{Row, Toggle, ValueCell};

/// One row as defined by the layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowSpec {
    pub label: String,
    pub cell: ValueCell,
    pub has_toggle: bool,
    pub checked: bool,
}

impl RowSpec {
    /// Row whose percentage is plain text, wrapped into a label on load
    pub fn raw(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            cell: ValueCell::Raw(text.into()),
            has_toggle: true,
            checked: false,
        }
    }

    /// Row with an already structured label
    pub fn labelled(label: impl Into<String>, value: i64) -> Self {
        Self {
            label: label.into(),
            cell: ValueCell::Label(value),
            has_toggle: true,
            checked: false,
        }
    }

    pub fn checked(mut self) -> Self {
        self.checked = true;
        self
    }

    pub fn without_toggle(mut self) -> Self {
        self.has_toggle = false;
        self
    }

    pub fn build(&self) -> Row {
        let toggle = self.has_toggle.then(|| Toggle {
            checked: self.checked,
            value: 0,
        });
        Row::new(self.label.clone(), self.cell.clone(), toggle)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSpec {
    /// Stable key, also used in element ids and the persisted record
    pub key: String,
    pub title: String,
    pub rows: Vec<RowSpec>,
}

impl SectionSpec {
    pub fn new(key: impl Into<String>, title: impl Into<String>, rows: Vec<RowSpec>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            rows,
        }
    }
}

/// Fixed value forced onto one row before persisted state is loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueOverride {
    pub section: String,
    pub label: String,
    pub value: i64,
}

impl ValueOverride {
    pub fn new(section: impl Into<String>, label: impl Into<String>, value: i64) -> Self {
        Self {
            section: section.into(),
            label: label.into(),
            value,
        }
    }

    /// Label comparison ignores surrounding whitespace and case.
    pub fn matches(&self, section_key: &str, row_label: &str) -> bool {
        self.section == section_key
            && row_label.trim().to_lowercase() == self.label.trim().to_lowercase()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub sections: Vec<SectionSpec>,
    pub overrides: Vec<ValueOverride>,
}

impl Layout {
    pub fn new(sections: Vec<SectionSpec>) -> Self {
        Self {
            sections,
            overrides: Vec::new(),
        }
    }

    pub fn with_override(mut self, value_override: ValueOverride) -> Self {
        self.overrides.push(value_override);
        self
    }
}
