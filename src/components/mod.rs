//! UI Components
//!
//! Reusable Leptos components.

mod modal;
mod type_selector;
mod item_fields;
mod item_selector;
mod username_modal;
mod project_sidebar;
mod project_view;
mod notice_bar;
mod create_project_modal;
mod create_item_modal;
mod edit_item_modal;
mod remove_item_modal;

pub use modal::{submit_dialog, FormError, FormField, Modal};
pub use type_selector::TypeSelector;
pub use item_fields::ItemFields;
pub use item_selector::ItemSelector;
pub use username_modal::{UserBadge, UsernameModal};
pub use project_sidebar::ProjectSidebar;
pub use project_view::{ContentArea, Overview, ProjectView};
pub use notice_bar::NoticeBar;
pub use create_project_modal::CreateProjectModal;
pub use create_item_modal::CreateItemModal;
pub use edit_item_modal::EditItemModal;
pub use remove_item_modal::RemoveItemModal;
