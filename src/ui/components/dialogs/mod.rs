//! Dialog rendering helpers used by [`DialogComponent`](super::DialogComponent)

pub mod common;
pub mod scroll_behavior;
pub mod system_dialogs;
pub mod task_dialogs;
pub mod tutorial_dialog;

pub use scroll_behavior::ScrollState;
