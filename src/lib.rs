//! typetodo - a terminal client for a hashtag-organised task list
//!
//! Tasks live on a REST backend. The client keeps the list in memory,
//! applies every change locally first and reconciles with the server's
//! answer when it arrives.
//!
//! # Modules
//!
//! * [`api`] - REST client and bearer token sources
//! * [`config`] - Application configuration management
//! * [`store`] - Task list state, tag counts, filters and optimistic updates
//! * [`tags`] - Hashtag extraction
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Tag colors and other helpers

/// REST API client for the task backend
pub mod api;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Task data model and request payloads
pub mod entities;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Transient on-screen notifications
pub mod notifications;

/// Persisted user preferences
pub mod settings;

/// In-memory task list with optimistic mutations
pub mod store;

/// Hashtag extraction from task text
pub mod tags;

/// First-run walkthrough
pub mod tutorial;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions and helpers
pub mod utils;

pub use entities::Todo;
