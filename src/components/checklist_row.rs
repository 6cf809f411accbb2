//! Checklist Row Component
//!
//! One toggleable row: label, value (static label or edit field) and toggle.

use checklist_core::{Row, ValueCell};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::{
    store_blur_input, store_edit_input, store_set_checked, use_app_store, AppStateStoreFields,
};

#[component]
pub fn ChecklistRow(
    section: usize,
    row: usize,
    #[prop(into)] label: String,
) -> impl IntoView {
    let store = use_app_store();

    // Only this row's changes re-run the closures below
    let state = Memo::new(move |_| store.controller().read().row(section, row).cloned());

    let editing = Memo::new(move |_| state.get().map(|r| r.is_editing()).unwrap_or(false));
    let checked = move || state.get().map(|r| r.read_toggle()).unwrap_or(false);
    let value = move || state.get().map(|r| r.read_value()).unwrap_or(0);
    let has_toggle = state
        .get_untracked()
        .map(|r| r.toggle.is_some())
        .unwrap_or(false);

    let input_text = move || match state.get().map(|r| r.cell) {
        Some(ValueCell::Input(text)) => text,
        _ => String::new(),
    };
    let label_text = move || {
        state
            .get()
            .as_ref()
            .and_then(Row::display_text)
            .unwrap_or_default()
    };

    // Focus the first opened input once it is mounted. The store is read
    // untracked so typing elsewhere does not pull focus back.
    let input_ref: NodeRef<leptos::html::Input> = NodeRef::new();
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let first = store.controller().read_untracked().first_open_input();
            if first == Some((section, row)) {
                let _ = input.focus();
            }
        }
    });

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            // blur triggers the same sync as leaving the field
            if let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
            {
                let _ = input.blur();
            }
        }
    };

    view! {
        <div class=move || if checked() { "row checked" } else { "row" }>
            <span class="label">{label}</span>
            <div class="right">
                <span class="pct">
                    {move || if editing.get() {
                        view! {
                            <input
                                type="text"
                                class="pct-input"
                                node_ref=input_ref
                                title="Enter whole number (e.g. 5 or 10)"
                                prop:value=input_text
                                on:input=move |ev| store_edit_input(&store, section, row, &event_target_value(&ev))
                                on:keydown=on_keydown
                                on:blur=move |_| store_blur_input(&store, section, row)
                            />
                        }.into_any()
                    } else {
                        view! {
                            <span class="pct-label" data-value=move || value().to_string()>
                                {label_text}
                            </span>
                        }.into_any()
                    }}
                </span>
                {has_toggle.then(|| view! {
                    <input
                        type="checkbox"
                        class="toggle"
                        data-value=move || state.get().and_then(|r| r.toggle).map(|t| t.value.to_string()).unwrap_or_default()
                        prop:checked=checked
                        on:change=move |ev| store_set_checked(&store, section, row, event_target_checked(&ev))
                    />
                })}
            </div>
        </div>
    }
}
