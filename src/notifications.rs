//! Transient notifications.
//!
//! Each notification expires after a fixed interval. Only the newest
//! `max_visible` are shown; the rest are summarized as "+N more".

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::config::NotificationsConfig;

/// Notification severity, drives coloring and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
    Celebration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub level: NotificationLevel,
    pub message: String,
    pub expires_at: Instant,
}

#[derive(Debug, Clone)]
pub struct NotificationCenter {
    // newest last
    items: VecDeque<Notification>,
    dismiss_after: Duration,
    max_visible: usize,
    next_id: u64,
}

impl NotificationCenter {
    pub fn new(dismiss_after: Duration, max_visible: usize) -> Self {
        Self {
            items: VecDeque::new(),
            dismiss_after,
            max_visible: max_visible.max(1),
            next_id: 0,
        }
    }

    pub fn from_config(config: &NotificationsConfig) -> Self {
        Self::new(Duration::from_secs(config.dismiss_after_secs), config.max_visible)
    }

    pub fn push(&mut self, level: NotificationLevel, message: impl Into<String>) -> u64 {
        self.push_at(level, message, Instant::now())
    }

    pub fn push_at(&mut self, level: NotificationLevel, message: impl Into<String>, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push_back(Notification {
            id,
            level,
            message: message.into(),
            expires_at: now + self.dismiss_after,
        });
        id
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.push(NotificationLevel::Info, message)
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(NotificationLevel::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(NotificationLevel::Error, message)
    }

    /// Drop expired notifications. Returns true if anything was removed.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.expires_at > now);
        before != self.items.len()
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    /// Dismiss the most recent notification, if any.
    pub fn dismiss_latest(&mut self) -> bool {
        self.items.pop_back().is_some()
    }

    /// Notifications to display, newest first.
    pub fn visible(&self) -> Vec<&Notification> {
        self.items.iter().rev().take(self.max_visible).collect()
    }

    /// Number of live notifications not displayed.
    #[must_use]
    pub fn overflow(&self) -> usize {
        self.items.len().saturating_sub(self.max_visible)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
