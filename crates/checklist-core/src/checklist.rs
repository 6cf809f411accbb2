//! Checklist Model
//!
//! Ordered sections of rows. Rows are identified by (section index, row index).

use serde::{Deserialize, Serialize};

use crate::layout::{Layout, ValueOverride};
use crate::row::Row;
use crate::snapshot::{SavedRow, Snapshot};
use crate::summary::Summary;

/// Sections that feed the overall summary, in display order
pub const SUMMARY_SECTIONS: [&str; 5] = ["weekly", "daily", "4h", "lower-multiples", "lower-tf"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub key: String,
    pub title: String,
    pub rows: Vec<Row>,
}

impl Section {
    /// Sum of values over checked rows
    pub fn total(&self) -> i64 {
        self.rows
            .iter()
            .filter(|row| row.read_toggle())
            .fold(0i64, |acc, row| acc.saturating_add(row.read_value()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    sections: Vec<Section>,
}

impl Checklist {
    /// Fresh checklist holding the layout defaults, nothing applied yet
    pub fn from_layout(layout: &Layout) -> Self {
        let sections = layout
            .sections
            .iter()
            .map(|spec| Section {
                key: spec.key.clone(),
                title: spec.title.clone(),
                rows: spec.rows.iter().map(|row| row.build()).collect(),
            })
            .collect();
        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// First section with this key
    pub fn section_by_key(&self, key: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.key == key)
    }

    pub fn row(&self, section: usize, row: usize) -> Option<&Row> {
        self.sections.get(section)?.rows.get(row)
    }

    pub fn row_mut(&mut self, section: usize, row: usize) -> Option<&mut Row> {
        self.sections.get_mut(section)?.rows.get_mut(row)
    }

    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut Row> {
        self.sections.iter_mut().flat_map(|s| s.rows.iter_mut())
    }

    /// (key, total) for every section, in layout order
    pub fn totals(&self) -> Vec<(String, i64)> {
        self.sections
            .iter()
            .map(|s| (s.key.clone(), s.total()))
            .collect()
    }

    /// Overall summary over the known sections; a missing section counts as 0.
    pub fn summary(&self) -> Summary {
        let totals = SUMMARY_SECTIONS
            .iter()
            .map(|key| {
                let total = self.section_by_key(key).map(Section::total).unwrap_or(0);
                (key.to_string(), total)
            })
            .collect();
        Summary::from_totals(totals)
    }

    /// Structure raw percent text into labels
    pub fn wrap_raw_values(&mut self) {
        self.rows_mut().for_each(Row::wrap_raw);
    }

    /// Force each override onto the first matching row of the first section
    /// with its key.
    pub fn apply_overrides(&mut self, overrides: &[ValueOverride]) {
        for value_override in overrides {
            let Some(section) = self
                .sections
                .iter_mut()
                .find(|s| s.key == value_override.section)
            else {
                continue;
            };
            let key = section.key.clone();
            if let Some(row) = section
                .rows
                .iter_mut()
                .find(|row| value_override.matches(&key, &row.label))
            {
                row.write_value(value_override.value);
            }
        }
    }

    pub fn normalize_all(&mut self) {
        self.rows_mut().for_each(Row::normalize);
    }

    /// Current state as a snapshot; a repeated key keeps the later section.
    pub fn to_snapshot(&self, saved_at: u64) -> Snapshot {
        let mut snapshot = Snapshot::new(saved_at);
        for section in &self.sections {
            let rows = section
                .rows
                .iter()
                .map(|row| {
                    Some(SavedRow {
                        value: row.read_value(),
                        checked: row.read_toggle(),
                    })
                })
                .collect();
            snapshot.sections.insert(section.key.clone(), rows);
        }
        snapshot
    }

    /// Apply saved entries by position. Rows without a usable entry keep
    /// their current state. Returns how many rows were written.
    pub fn apply_snapshot(&mut self, snapshot: &Snapshot) -> usize {
        let mut applied = 0;
        for section in &mut self.sections {
            let saved = snapshot.rows(&section.key);
            for (row, entry) in section.rows.iter_mut().zip(saved) {
                if let Some(entry) = entry {
                    row.write_value(entry.value);
                    row.write_toggle(entry.checked);
                    applied += 1;
                }
            }
        }
        applied
    }

    /// Open an input on every labelled row; returns how many were opened.
    pub fn open_inputs(&mut self) -> usize {
        self.rows_mut().map(Row::open_input).filter(|opened| *opened).count()
    }

    pub fn close_inputs(&mut self) {
        self.rows_mut().for_each(Row::close_input);
    }

    pub fn reset_rows(&mut self) {
        self.rows_mut().for_each(Row::reset);
    }
}
