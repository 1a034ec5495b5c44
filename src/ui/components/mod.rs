//! Reusable UI components

// Component architecture
pub mod dialog_component;
pub mod dialogs;
pub mod filter_bar_component;
pub mod header_component;
pub mod notification_component;
pub mod status_bar;
pub mod task_list_component;
pub mod task_list_item_component;

// Component exports
pub use dialog_component::DialogComponent;
pub use filter_bar_component::FilterBarComponent;
pub use header_component::HeaderComponent;
pub use notification_component::NotificationComponent;
pub use status_bar::{StatusBar, StatusContext};
pub use task_list_component::TaskListComponent;
