//! Core UI functionality for typetodo.
//!
//! # Module Components
//!
//! - [`actions`] - Intents produced by components and results of background calls
//! - [`component`] - Base component trait
//! - [`event_handler`] - Terminal input polling and ticks
//! - [`task_manager`] - Background API calls reporting back over a channel
//!
//! Components turn keys into [`Action`]s, the app component routes them to the
//! store, and network results come back as actions on the next tick.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, DialogType, FocusArea};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
