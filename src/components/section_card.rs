//! Section Card Component
//!
//! One timeframe section with its rows and running total.

use checklist_core::format_percent;
use leptos::prelude::*;

use crate::components::ChecklistRow;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SectionCard(
    index: usize,
    #[prop(into)] section_key: String,
    #[prop(into)] title: String,
    /// Row labels in layout order
    rows: Vec<String>,
) -> impl IntoView {
    let store = use_app_store();

    // Last recomputed total, not the live rows: drafts stay out until commit
    let total = Memo::new(move |_| store.controller().read().total(index));

    view! {
        <section class="card" data-section=section_key.clone()>
            <header class="card-header">
                <h2>{title}</h2>
                <span class="total" id=format!("total-{}", section_key)>
                    {move || format_percent(total.get())}
                </span>
            </header>
            <div class="card-body">
                {rows.into_iter().enumerate().map(|(row, label)| view! {
                    <ChecklistRow section=index row=row label=label />
                }).collect_view()}
            </div>
        </section>
    }
}
