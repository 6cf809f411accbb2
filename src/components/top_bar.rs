//! Top Bar Component
//!
//! Edit-mode toggle plus the two destructive actions.

use checklist_core::EditMode;
use leptos::prelude::*;

use crate::components::ConfirmButton;
use crate::context::use_ui_context;
use crate::storage::reload_page;
use crate::store::{
    store_clear, store_reset_all, store_toggle_edit_mode, use_app_store, AppStateStoreFields,
};

#[component]
pub fn TopBar() -> impl IntoView {
    let store = use_app_store();
    let ui = use_ui_context();

    let mode = Memo::new(move |_| store.controller().read().mode());

    let toggle_edit = move |_| {
        let next = store_toggle_edit_mode(&store);
        log::info!("Edit mode now {:?}", next);
    };

    let clear = Callback::new(move |_| {
        store_clear(&store);
        if let Err(e) = reload_page() {
            log::warn!("Could not reload page: {}", e);
        }
    });

    let reset_all = Callback::new(move |_| {
        store_reset_all(&store);
        ui.flash_overall();
    });

    view! {
        <div class="topbar">
            <h1 class="topbar-title">"Confluence Checklist"</h1>
            <div class="topbar-actions">
                <button
                    id="editPctBtn"
                    class=move || if mode.get() == EditMode::Editing { "btn edit active" } else { "btn edit" }
                    on:click=toggle_edit
                >
                    {move || if mode.get() == EditMode::Editing { "Done editing" } else { "Edit percentages" }}
                </button>
                <ConfirmButton
                    label="Clear"
                    prompt="Clear saved settings (percentages and toggles)?"
                    button_class="btn clear"
                    on_confirm=clear
                />
                <ConfirmButton
                    label="Reset All"
                    prompt="Reset ALL percentages to +0% and turn all toggles OFF?"
                    button_class="btn reset"
                    on_confirm=reset_all
                />
            </div>
        </div>
    }
}
