//! Confluence Checklist App
//!
//! Builds the controller, restores saved state and lays out the page.

use checklist_core::{ChecklistController, ChecklistEvent};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{SectionCard, SummaryPanel, TopBar};
use crate::context::UiContext;
use crate::markup::confluence_layout;
use crate::storage::{now_ms, BrowserStore};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let layout = confluence_layout();

    let mut controller = ChecklistController::new(layout.clone(), BrowserStore, now_ms);
    controller.subscribe(|event| match event {
        ChecklistEvent::Loaded { rows } => log::info!("Restored {} saved rows", rows),
        ChecklistEvent::Recomputed(summary) => {
            log::debug!("Overall {}% ({})", summary.overall, summary.confidence)
        }
        ChecklistEvent::Saved => log::debug!("Saved settings"),
        ChecklistEvent::ModeChanged(mode) => log::debug!("Mode {:?}", mode),
        ChecklistEvent::Cleared => log::info!("Cleared saved settings"),
        ChecklistEvent::Reset => log::info!("Reset all rows"),
    });
    controller.initialize();

    // Provide context to all children
    provide_context(Store::new(AppState { controller }));
    provide_context(UiContext::new(signal(false)));

    view! {
        <div class="app-layout">
            <TopBar />
            <main class="sections">
                {layout.sections.into_iter().enumerate().map(|(index, section)| {
                    let rows = section.rows.into_iter().map(|r| r.label).collect::<Vec<_>>();
                    view! {
                        <SectionCard index=index section_key=section.key title=section.title rows=rows />
                    }
                }).collect_view()}
            </main>
            <SummaryPanel />
        </div>
    }
}
