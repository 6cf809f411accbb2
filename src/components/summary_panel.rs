//! Summary Panel Component
//!
//! Per-section totals, the overall figure and the confluence label.

use checklist_core::{format_percent, Confidence, SUMMARY_SECTIONS};
use leptos::prelude::*;

use crate::context::use_ui_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SummaryPanel() -> impl IntoView {
    let store = use_app_store();
    let ui = use_ui_context();

    let summary = Memo::new(move |_| store.controller().read().summary());

    let overall_class = move || {
        if ui.pulse.get() { "summary-overall pulse" } else { "summary-overall" }
    };
    let label_class = move || format!("summary-label {}", summary.get().confidence.css_class());

    view! {
        <aside class="summary">
            <div class="summary-sections">
                {SUMMARY_SECTIONS.iter().map(|key| {
                    let key = key.to_string();
                    let id = format!("summary-{}", key);
                    let lookup = key.clone();
                    view! {
                        <div class="summary-card">
                            <span class="summary-key">{key}</span>
                            <span class="summary-value" id=id>
                                {move || format_percent(summary.get().total(&lookup))}
                            </span>
                        </div>
                    }
                }).collect_view()}
            </div>
            <div class=overall_class id="summary-overall">
                {move || format_percent(summary.get().overall)}
            </div>
            <div class=label_class id="summary-label">
                {move || {
                    let confidence = summary.get().confidence;
                    if confidence == Confidence::Strong {
                        format!("{} ✓", confidence.label())
                    } else {
                        confidence.label().to_string()
                    }
                }}
            </div>
        </aside>
    }
}
