//! Browser Storage
//!
//! `SnapshotStore` backed by `window.localStorage`.

use checklist_core::{ChecklistError, ChecklistResult, SnapshotStore};

/// Zero-sized handle; every call goes straight to `localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

fn js_error(e: wasm_bindgen::JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// `window.localStorage`, which may be missing or throw (storage disabled,
/// SecurityError in sandboxed frames)
fn local_storage() -> ChecklistResult<web_sys::Storage> {
    let window = web_sys::window()
        .ok_or_else(|| ChecklistError::StorageUnavailable("no window".to_string()))?;
    window
        .local_storage()
        .map_err(|e| ChecklistError::StorageUnavailable(js_error(e)))?
        .ok_or_else(|| ChecklistError::StorageUnavailable("localStorage disabled".to_string()))
}

impl SnapshotStore for BrowserStore {
    fn read(&self, key: &str) -> ChecklistResult<Option<String>> {
        local_storage()?
            .get_item(key)
            .map_err(|e| ChecklistError::StorageUnavailable(js_error(e)))
    }

    fn write(&mut self, key: &str, value: &str) -> ChecklistResult<()> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| ChecklistError::StorageWrite(js_error(e)))
    }

    fn remove(&mut self, key: &str) -> ChecklistResult<()> {
        local_storage()?
            .remove_item(key)
            .map_err(|e| ChecklistError::StorageWrite(js_error(e)))
    }
}

/// Wall clock for snapshot timestamps
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Reload the page so the layout defaults reassert
pub fn reload_page() -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    window.location().reload().map_err(js_error)
}
