//! Checklist Controller
//!
//! Single owner of the checklist model, its edit mode and its store.
//! Every mutation recomputes the summary first and then saves, so the
//! persisted record always matches what was last displayed.

use std::fmt;

use crate::checklist::Checklist;
use crate::error::{ChecklistError, ChecklistResult};
use crate::layout::Layout;
use crate::row::{Row, ValueCell};
use crate::snapshot::Snapshot;
use crate::store::{SnapshotStore, STORAGE_KEY};
use crate::summary::Summary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Viewing,
    Editing,
}

/// Notification sent to subscribers after the controller changes state
#[derive(Debug, Clone, PartialEq)]
pub enum ChecklistEvent {
    /// Persisted state applied on startup; `rows` entries were written
    Loaded { rows: usize },
    Recomputed(Summary),
    Saved,
    ModeChanged(EditMode),
    Cleared,
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&ChecklistEvent) + Send + Sync>;

pub struct ChecklistController<S: SnapshotStore> {
    layout: Layout,
    checklist: Checklist,
    mode: EditMode,
    store: S,
    /// Milliseconds since the Unix epoch, stamped into each snapshot
    clock: fn() -> u64,
    /// Section totals as of the last recompute, in layout order
    totals: Vec<(String, i64)>,
    /// Summary as of the last recompute; draft input text does not reach it
    summary: Summary,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<S: SnapshotStore> fmt::Debug for ChecklistController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChecklistController")
            .field("checklist", &self.checklist)
            .field("mode", &self.mode)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<S: SnapshotStore> ChecklistController<S> {
    /// Controller holding the bare layout; call `initialize` before use.
    pub fn new(layout: Layout, store: S, clock: fn() -> u64) -> Self {
        let checklist = Checklist::from_layout(&layout);
        let totals = checklist.totals();
        let summary = checklist.summary();
        Self {
            layout,
            checklist,
            mode: EditMode::Viewing,
            store,
            clock,
            totals,
            summary,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn checklist(&self) -> &Checklist {
        &self.checklist
    }

    pub fn row(&self, section: usize, row: usize) -> Option<&Row> {
        self.checklist.row(section, row)
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Summary as last recomputed (what the page displays)
    pub fn summary(&self) -> Summary {
        self.summary.clone()
    }

    /// Section totals as last recomputed
    pub fn totals(&self) -> &[(String, i64)] {
        &self.totals
    }

    /// Displayed total of the section at `index`, 0 when out of range
    pub fn total(&self, index: usize) -> i64 {
        self.totals.get(index).map(|(_, total)| *total).unwrap_or(0)
    }

    /// First row holding an open input, the one to focus on entering edit mode
    pub fn first_open_input(&self) -> Option<(usize, usize)> {
        if self.mode != EditMode::Editing {
            return None;
        }
        self.checklist
            .sections()
            .iter()
            .enumerate()
            .find_map(|(si, section)| {
                section
                    .rows
                    .iter()
                    .position(Row::is_editing)
                    .map(|ri| (si, ri))
            })
    }

    // ========================
    // Subscriptions
    // ========================

    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&ChecklistEvent) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false when `id` was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, event: ChecklistEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }

    // ========================
    // Lifecycle
    // ========================

    /// Page-load sequence: structure raw values, apply fixed overrides,
    /// load the saved snapshot, normalize, recompute.
    ///
    /// Overrides run before the load, so a saved value for an overridden
    /// row still wins.
    pub fn initialize(&mut self) {
        self.checklist = Checklist::from_layout(&self.layout);
        self.mode = EditMode::Viewing;
        self.checklist.wrap_raw_values();
        self.checklist.apply_overrides(&self.layout.overrides);
        self.load();
        self.checklist.normalize_all();
        self.recompute();
    }

    /// Apply the persisted snapshot, if any. Missing or unreadable records
    /// leave the rows untouched.
    pub fn load(&mut self) -> bool {
        let raw = match self.store.read(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return false,
            Err(e) => {
                log::warn!("Could not read saved settings: {}", e);
                return false;
            }
        };

        match Snapshot::decode(&raw) {
            Ok(snapshot) => {
                let rows = self.checklist.apply_snapshot(&snapshot);
                log::debug!("Loaded {} saved rows", rows);
                self.notify(ChecklistEvent::Loaded { rows });
                true
            }
            Err(e) => {
                log::warn!("Could not parse/load saved settings: {}", e);
                false
            }
        }
    }

    /// Overwrite the stored snapshot with the current state.
    /// Failures are logged and swallowed.
    pub fn save(&mut self) -> bool {
        let snapshot = self.checklist.to_snapshot((self.clock)());
        let result = snapshot
            .encode()
            .and_then(|text| self.store.write(STORAGE_KEY, &text));
        match result {
            Ok(()) => {
                self.notify(ChecklistEvent::Saved);
                true
            }
            Err(e) => {
                log::warn!("Could not save settings: {}", e);
                false
            }
        }
    }

    /// Recompute totals and the summary, keep them for display and tell
    /// subscribers.
    pub fn recompute(&mut self) -> Summary {
        self.totals = self.checklist.totals();
        self.summary = self.checklist.summary();
        let summary = self.summary.clone();
        self.notify(ChecklistEvent::Recomputed(summary.clone()));
        summary
    }

    fn recompute_and_save(&mut self) {
        self.recompute();
        self.save();
    }

    // ========================
    // User actions
    // ========================

    /// Toggle flip on one row
    pub fn set_checked(&mut self, section: usize, row: usize, checked: bool) -> ChecklistResult<()> {
        let target = self
            .checklist
            .row_mut(section, row)
            .ok_or(ChecklistError::UnknownRow { section, row })?;
        target.write_toggle(checked);
        target.sync_toggle_value();
        self.recompute_and_save();
        Ok(())
    }

    /// Switch every label to an input. No-op when already editing.
    pub fn begin_editing(&mut self) {
        if self.mode == EditMode::Editing {
            return;
        }
        let opened = self.checklist.open_inputs();
        log::debug!("Edit mode: {} inputs opened", opened);
        self.mode = EditMode::Editing;
        self.notify(ChecklistEvent::ModeChanged(EditMode::Editing));
    }

    /// Coerce every input back into a label, then recompute and save.
    /// No-op when not editing.
    pub fn commit_editing(&mut self) {
        if self.mode == EditMode::Viewing {
            return;
        }
        self.checklist.close_inputs();
        self.mode = EditMode::Viewing;
        self.notify(ChecklistEvent::ModeChanged(EditMode::Viewing));
        self.recompute_and_save();
    }

    /// "Edit percentages" / "Done editing"; returns the new mode
    pub fn toggle_edit_mode(&mut self) -> EditMode {
        match self.mode {
            EditMode::Viewing => self.begin_editing(),
            EditMode::Editing => self.commit_editing(),
        }
        self.mode
    }

    /// Update the text of an open input. Rows without one are left alone.
    pub fn edit_input(&mut self, section: usize, row: usize, text: &str) -> ChecklistResult<()> {
        let target = self
            .checklist
            .row_mut(section, row)
            .ok_or(ChecklistError::UnknownRow { section, row })?;
        if target.is_editing() {
            target.cell = ValueCell::Input(text.to_string());
        }
        Ok(())
    }

    /// Field lost focus: normalize its text and sync the toggle value.
    /// Totals are not recomputed until the edit is committed.
    pub fn blur_input(&mut self, section: usize, row: usize) -> ChecklistResult<()> {
        let target = self
            .checklist
            .row_mut(section, row)
            .ok_or(ChecklistError::UnknownRow { section, row })?;
        if target.is_editing() {
            target.normalize();
        }
        Ok(())
    }

    /// Delete the persisted snapshot. The caller reloads the page, which
    /// brings back the layout defaults.
    pub fn clear(&mut self) {
        if let Err(e) = self.store.remove(STORAGE_KEY) {
            log::warn!("Could not clear saved settings: {}", e);
        }
        self.notify(ChecklistEvent::Cleared);
    }

    /// Every row to +0% and unchecked, snapshot removed.
    ///
    /// The per-row toggle changes recompute and save as usual; the snapshot
    /// is deleted afterwards and a final recompute runs on the cleared model.
    pub fn reset_all(&mut self) {
        self.checklist.reset_rows();
        if self.mode == EditMode::Editing {
            self.mode = EditMode::Viewing;
            self.notify(ChecklistEvent::ModeChanged(EditMode::Viewing));
        }
        self.recompute_and_save();

        if let Err(e) = self.store.remove(STORAGE_KEY) {
            log::warn!("Could not clear saved settings: {}", e);
        }
        self.recompute();
        self.notify(ChecklistEvent::Reset);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::layout::{RowSpec, SectionSpec};
    use crate::store::MemoryStore;

    fn layout() -> Layout {
        Layout::new(vec![SectionSpec::new("daily", "Daily", vec![
            RowSpec::raw("Trend", "+10%"),
            RowSpec::raw("Volume", "+5%"),
        ])])
    }

    fn controller() -> ChecklistController<MemoryStore> {
        let mut c = ChecklistController::new(layout(), MemoryStore::new(), || 7);
        c.initialize();
        c
    }

    #[test]
    fn test_unknown_row_is_an_error() {
        let mut c = controller();
        assert_eq!(
            c.set_checked(0, 9, true),
            Err(ChecklistError::UnknownRow { section: 0, row: 9 })
        );
        assert!(c.edit_input(3, 0, "1").is_err());
        assert!(c.blur_input(3, 0).is_err());
    }

    #[test]
    fn test_events_in_order() {
        let mut c = controller();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        c.subscribe(move |event| sink.lock().unwrap().push(event.clone()));

        c.set_checked(0, 0, true).unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(matches!(&seen[0], ChecklistEvent::Recomputed(s) if s.overall == 10));
        assert_eq!(seen[1], ChecklistEvent::Saved);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let mut c = controller();
        let count = Arc::new(Mutex::new(0));
        let sink = count.clone();
        let id = c.subscribe(move |_| *sink.lock().unwrap() += 1);

        c.toggle_edit_mode();
        c.toggle_edit_mode();
        let after_modes = *count.lock().unwrap();
        assert!(after_modes > 0);

        assert!(c.unsubscribe(id));
        assert!(!c.unsubscribe(id));
        c.set_checked(0, 1, true).unwrap();
        assert_eq!(*count.lock().unwrap(), after_modes);
    }

    #[test]
    fn test_repeated_mode_toggles_notify_once_per_change() {
        let mut c = controller();
        let modes = Arc::new(Mutex::new(Vec::new()));
        let sink = modes.clone();
        c.subscribe(move |event| {
            if let ChecklistEvent::ModeChanged(mode) = event {
                sink.lock().unwrap().push(*mode);
            }
        });

        for _ in 0..3 {
            c.toggle_edit_mode();
            c.toggle_edit_mode();
        }
        c.begin_editing();
        c.begin_editing();

        let modes = modes.lock().unwrap();
        assert_eq!(modes.len(), 7);
        assert_eq!(modes.last(), Some(&EditMode::Editing));
    }

    #[test]
    fn test_blur_normalizes_without_saving() {
        let mut c = controller();
        c.begin_editing();
        c.edit_input(0, 0, "  25 %").unwrap();
        c.blur_input(0, 0).unwrap();

        let row = c.row(0, 0).unwrap();
        assert_eq!(row.cell, ValueCell::Input("25".into()));
        assert_eq!(row.toggle.unwrap().value, 25);
        assert_eq!(c.store().get(STORAGE_KEY), None);
    }

    #[test]
    fn test_summary_holds_until_commit() {
        let mut c = controller();
        c.set_checked(0, 0, true).unwrap();
        let shown = c.summary();
        assert_eq!(c.total(0), 10);

        c.begin_editing();
        c.edit_input(0, 0, "50").unwrap();
        c.blur_input(0, 0).unwrap();

        assert_eq!(c.summary(), shown);
        assert_eq!(c.total(0), 10);
        let saved = Snapshot::decode(c.store().get(STORAGE_KEY).unwrap()).unwrap();
        assert_eq!(saved.rows("daily")[0].unwrap().value, 10);

        c.commit_editing();
        assert_eq!(c.summary().overall, 50);
        assert_eq!(c.total(0), 50);
        let saved = Snapshot::decode(c.store().get(STORAGE_KEY).unwrap()).unwrap();
        assert_eq!(saved.rows("daily")[0].unwrap().value, 50);
    }

    #[test]
    fn test_first_open_input_only_while_editing() {
        let mut c = controller();
        assert_eq!(c.first_open_input(), None);
        c.begin_editing();
        assert_eq!(c.first_open_input(), Some((0, 0)));
        c.commit_editing();
        assert_eq!(c.first_open_input(), None);
    }

    #[test]
    fn test_edit_input_ignored_outside_edit_mode() {
        let mut c = controller();
        c.edit_input(0, 0, "99").unwrap();
        assert_eq!(c.row(0, 0).unwrap().read_value(), 10);
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        let mut store = MemoryStore::new();
        store.set_fail_writes(true);
        let mut c = ChecklistController::new(layout(), store, || 0);
        c.initialize();
        c.set_checked(0, 0, true).unwrap();
        assert!(c.row(0, 0).unwrap().read_toggle());
        assert_eq!(c.summary().overall, 10);
        assert!(!c.save());
    }

    #[test]
    fn test_unavailable_storage_is_a_no_op() {
        let mut store = MemoryStore::with_entry(STORAGE_KEY, r#"{"sections":{"daily":[{"value":40,"checked":true}]}}"#);
        store.set_unavailable(true);
        let mut c = ChecklistController::new(layout(), store, || 0);
        c.initialize();

        // nothing loaded, defaults kept
        assert_eq!(c.row(0, 0).unwrap().read_value(), 10);
        assert!(!c.row(0, 0).unwrap().read_toggle());

        c.set_checked(0, 1, true).unwrap();
        assert_eq!(c.summary().overall, 5);
        assert!(!c.save());
        c.clear();
        c.reset_all();
        assert_eq!(c.summary().overall, 0);
    }

    #[test]
    fn test_saved_at_comes_from_clock() {
        let mut c = controller();
        c.set_checked(0, 0, true).unwrap();
        let snapshot = Snapshot::decode(c.store().get(STORAGE_KEY).unwrap()).unwrap();
        assert_eq!(snapshot.meta.saved_at, 7);
    }
}
