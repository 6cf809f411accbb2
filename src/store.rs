//! Global Application State Store
//!
//! Uses Leptos reactive_stores; the store owns the one checklist controller.

use checklist_core::{ChecklistController, EditMode};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::storage::BrowserStore;

#[derive(Store)]
pub struct AppState {
    /// Checklist model, edit mode and persistence
    pub controller: ChecklistController<BrowserStore>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Flip one row's toggle
pub fn store_set_checked(store: &AppStore, section: usize, row: usize, checked: bool) {
    if let Err(e) = store.controller().write().set_checked(section, row, checked) {
        log::warn!("Toggle ignored: {}", e);
    }
}

/// "Edit percentages" / "Done editing"
pub fn store_toggle_edit_mode(store: &AppStore) -> EditMode {
    store.controller().write().toggle_edit_mode()
}

/// Keep the model in step with what is typed into a value field
pub fn store_edit_input(store: &AppStore, section: usize, row: usize, text: &str) {
    if let Err(e) = store.controller().write().edit_input(section, row, text) {
        log::warn!("Edit ignored: {}", e);
    }
}

/// Value field lost focus
pub fn store_blur_input(store: &AppStore, section: usize, row: usize) {
    if let Err(e) = store.controller().write().blur_input(section, row) {
        log::warn!("Blur ignored: {}", e);
    }
}

/// Drop the saved snapshot (the caller reloads the page)
pub fn store_clear(store: &AppStore) {
    store.controller().write().clear();
}

pub fn store_reset_all(store: &AppStore) {
    store.controller().write().reset_all();
}
