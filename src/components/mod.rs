//! UI Components
//!
//! Reusable Leptos components.

mod confirm_button;
mod checklist_row;
mod section_card;
mod summary_panel;
mod top_bar;

pub use confirm_button::ConfirmButton;
pub use checklist_row::ChecklistRow;
pub use section_card::SectionCard;
pub use summary_panel::SummaryPanel;
pub use top_bar::TopBar;
