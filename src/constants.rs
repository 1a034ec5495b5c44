//! Constants used throughout the application
//!
//! This module centralizes user-facing strings and default values so the
//! store, the UI and the binary report things the same way.

// Error Messages
pub const ERROR_LOAD_FAILED: &str = "Failed to load to-dos";
pub const ERROR_ADD_FAILED: &str = "Failed to add to-do";
pub const ERROR_EDIT_FAILED: &str = "Failed to edit to-do";
pub const ERROR_DELETE_FAILED: &str = "Failed to delete to-do";
pub const ERROR_REORDER_FAILED: &str = "Failed to reorder to-dos";
pub const ERROR_SETTINGS_SAVE_FAILED: &str = "Failed to save settings";

// Success Messages
pub const SUCCESS_TASK_ADDED: &str = "Task added. Press 'u' to undo";
pub const SUCCESS_TASK_DELETED: &str = "Task deleted";
pub const SUCCESS_ALL_COMPLETE: &str = "All tasks complete!";

// UI Messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
pub const EMPTY_LIST_MESSAGE: &str = "Your task list is empty. Press 'a' to add a task to get started!";
pub const EMPTY_FILTER_MESSAGE: &str = "No tasks match the current filter. Press 'c' to clear it.";
pub const LOADING_MESSAGE: &str = "Loading...";
pub const UNTAGGED_GROUP_TITLE: &str = "No tags";
pub const NO_TAGS_FILTER_LABEL: &str = "No tags";
pub const APP_TITLE: &str = "TypeToDo";
pub const DIALOG_TITLE_LOGS: &str = "Logs - Press 'Esc', 'G' or 'q' to close";

// Authentication gate
pub const SIGN_IN_REQUIRED: &str = "Sign in required: no API token available";

// API defaults
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5001/api";
pub const DEFAULT_TOKEN_ENV: &str = "TYPETODO_TOKEN";
pub const API_URL_ENV: &str = "TYPETODO_API_URL";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// Prefix of client-generated ids for tasks not yet confirmed by the server
pub const TEMP_ID_PREFIX: &str = "tmp-";

// Notification defaults
pub const DEFAULT_NOTIFICATION_SECS: u64 = 4;
pub const MAX_NOTIFICATION_SECS: u64 = 60;
pub const DEFAULT_MAX_VISIBLE_NOTIFICATIONS: usize = 3;
pub const MAX_VISIBLE_NOTIFICATIONS_LIMIT: usize = 10;

/// Maximum number of entries kept by the in-memory logger
pub const MAX_LOG_ENTRIES: usize = 1000;

// UI Layout Constants
/// Width of the notification stack in columns
pub const NOTIFICATION_WIDTH: u16 = 44;
/// Height of the progress header in lines
pub const HEADER_HEIGHT: u16 = 3;
/// Height of the tag filter bar in lines
pub const FILTER_BAR_HEIGHT: u16 = 3;
