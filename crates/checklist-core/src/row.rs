//! Checklist Row
//!
//! A single toggleable line with a signed percentage weight.

use serde::{Deserialize, Serialize};

use crate::coerce::{format_signed_percent, to_int};

/// How a row currently displays its value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueCell {
    /// Editable text field (edit mode); holds whatever the user typed
    Input(String),
    /// Structured label carrying its numeric value
    Label(i64),
    /// Unstructured percent text from the layout, e.g. "+5%"
    Raw(String),
    /// Nothing to read from
    Empty,
}

/// Checkable control plus the value mirrored onto it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Toggle {
    pub checked: bool,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub label: String,
    pub cell: ValueCell,
    pub toggle: Option<Toggle>,
}

impl Row {
    pub fn new(label: impl Into<String>, cell: ValueCell, toggle: Option<Toggle>) -> Self {
        Self {
            label: label.into(),
            cell,
            toggle,
        }
    }

    /// Current value: input text first, then the label, then raw text, else 0.
    pub fn read_value(&self) -> i64 {
        match &self.cell {
            ValueCell::Input(text) => to_int(text),
            ValueCell::Label(n) => *n,
            ValueCell::Raw(text) => to_int(text),
            ValueCell::Empty => 0,
        }
    }

    /// Write `n` into whichever display the row has, creating a label when
    /// there is neither an input nor a label. Always mirrors onto the toggle.
    pub fn write_value(&mut self, n: i64) {
        self.cell = match self.cell {
            ValueCell::Input(_) => ValueCell::Input(n.to_string()),
            _ => ValueCell::Label(n),
        };
        if let Some(toggle) = self.toggle.as_mut() {
            toggle.value = n;
        }
    }

    pub fn read_toggle(&self) -> bool {
        self.toggle.map(|t| t.checked).unwrap_or(false)
    }

    /// No-op for rows without a toggle.
    pub fn write_toggle(&mut self, checked: bool) {
        if let Some(toggle) = self.toggle.as_mut() {
            toggle.checked = checked;
        }
    }

    /// Copy the row's current value onto its toggle
    pub fn sync_toggle_value(&mut self) {
        let value = self.read_value();
        if let Some(toggle) = self.toggle.as_mut() {
            toggle.value = value;
        }
    }

    /// Turn raw percent text into a structured label.
    pub fn wrap_raw(&mut self) {
        if let ValueCell::Raw(text) = &self.cell {
            self.cell = ValueCell::Label(to_int(text));
        }
        if matches!(self.cell, ValueCell::Label(_)) {
            self.sync_toggle_value();
        }
    }

    /// Canonical integer text in an open input, and a fresh toggle mirror.
    pub fn normalize(&mut self) {
        if let ValueCell::Input(text) = &self.cell {
            self.cell = ValueCell::Input(to_int(text).to_string());
        }
        self.sync_toggle_value();
    }

    /// Replace the label with an input seeded from it. Returns false when
    /// the row has no label to edit.
    pub fn open_input(&mut self) -> bool {
        match self.cell {
            ValueCell::Label(n) => {
                self.cell = ValueCell::Input(n.to_string());
                true
            }
            _ => false,
        }
    }

    /// Commit an open input back into a label and sync the toggle.
    pub fn close_input(&mut self) {
        if let ValueCell::Input(text) = &self.cell {
            self.cell = ValueCell::Label(to_int(text));
        }
        if matches!(self.cell, ValueCell::Label(_)) {
            self.sync_toggle_value();
        }
    }

    /// Value 0 shown as a label, toggle off.
    pub fn reset(&mut self) {
        self.cell = ValueCell::Label(0);
        if let Some(toggle) = self.toggle.as_mut() {
            toggle.checked = false;
            toggle.value = 0;
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.cell, ValueCell::Input(_))
    }

    /// Text for the static display, `None` while an input is open.
    pub fn display_text(&self) -> Option<String> {
        match &self.cell {
            ValueCell::Label(n) => Some(format_signed_percent(*n)),
            ValueCell::Raw(text) => Some(text.clone()),
            ValueCell::Input(_) | ValueCell::Empty => None,
        }
    }
}
