//! Checklist Core
//!
//! Platform-free model behind the confluence checklist:
//! - coerce: total integer parsing and percent formatting
//! - row / checklist: rows, sections and their accessors
//! - snapshot / store: persisted record and the storage seam
//! - summary: per-section totals rolled up into a confidence label
//! - controller: the single owner of the model, driving every mutation

mod coerce;
mod error;
mod row;
mod layout;
mod checklist;
mod snapshot;
mod store;
mod summary;
mod controller;

pub use coerce::{to_int, format_percent, format_signed_percent};
pub use error::{ChecklistError, ChecklistResult};
pub use row::{Row, Toggle, ValueCell};
pub use layout::{Layout, SectionSpec, RowSpec, ValueOverride};
pub use checklist::{Checklist, Section, SUMMARY_SECTIONS};
pub use snapshot::{Snapshot, SnapshotMeta, SavedRow};
pub use store::{SnapshotStore, MemoryStore, STORAGE_KEY};
pub use summary::{Confidence, Summary};
pub use controller::{ChecklistController, EditMode, ChecklistEvent, SubscriptionId};
