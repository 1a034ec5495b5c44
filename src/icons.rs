//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Task status icons
#[derive(Debug, Clone)]
pub struct TaskStatusIcons {
    pub pending: &'static str,
    pub completed: &'static str,
    pub pending_sync: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub tasks_title: &'static str,
    pub error: &'static str,
    pub info: &'static str,
    pub warning: &'static str,
    pub success: &'static str,
    pub celebration: &'static str,
}

/// Tag filter indicators
#[derive(Debug, Clone)]
pub struct FilterIcons {
    pub include: &'static str,
    pub exclude: &'static str,
    pub neutral: &'static str,
}

/// List manipulation icons
#[derive(Debug, Clone)]
pub struct ListIcons {
    pub grip: &'static str,
    pub tag_group: &'static str,
    pub untagged_group: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub task_status: TaskStatusIcons,
    pub ui: UiIcons,
    pub filter: FilterIcons,
    pub list: ListIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone)]
pub struct IconService {
    current_theme: IconTheme,
}

impl Default for IconService {
    fn default() -> Self {
        Self::new(IconTheme::default())
    }
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            task_status: TaskStatusIcons {
                pending: "🔳",
                completed: "✅",
                pending_sync: "⏳",
            },
            ui: UiIcons {
                tasks_title: "📝",
                error: "❌",
                info: "💡",
                warning: "⚠️",
                success: "✅",
                celebration: "🎉",
            },
            filter: FilterIcons {
                include: "✅",
                exclude: "🚫",
                neutral: "🏷️",
            },
            list: ListIcons {
                grip: "↕️",
                tag_group: "🏷️",
                untagged_group: "📄",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            task_status: TaskStatusIcons {
                pending: "□",
                completed: "✓",
                pending_sync: "⟳",
            },
            ui: UiIcons {
                tasks_title: "▶",
                error: "✗",
                info: "ⓘ",
                warning: "⚠",
                success: "✓",
                celebration: "★",
            },
            filter: FilterIcons {
                include: "+",
                exclude: "−",
                neutral: "·",
            },
            list: ListIcons {
                grip: "⇅",
                tag_group: "◆",
                untagged_group: "◇",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            task_status: TaskStatusIcons {
                pending: "[ ]",
                completed: "[X]",
                pending_sync: "...",
            },
            ui: UiIcons {
                tasks_title: ">",
                error: "X",
                info: "i",
                warning: "!",
                success: "+",
                celebration: "*",
            },
            filter: FilterIcons {
                include: "+",
                exclude: "-",
                neutral: " ",
            },
            list: ListIcons {
                grip: "=",
                tag_group: "#",
                untagged_group: "-",
            },
        }
    }

    /// Convenience methods for commonly used icons
    #[must_use]
    pub fn task_pending(&self) -> &'static str {
        self.icons().task_status.pending
    }

    #[must_use]
    pub fn task_completed(&self) -> &'static str {
        self.icons().task_status.completed
    }

    /// Marker for tasks not yet confirmed by the server
    #[must_use]
    pub fn task_pending_sync(&self) -> &'static str {
        self.icons().task_status.pending_sync
    }

    #[must_use]
    pub fn tasks_title(&self) -> &'static str {
        self.icons().ui.tasks_title
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().ui.error
    }

    #[must_use]
    pub fn info(&self) -> &'static str {
        self.icons().ui.info
    }

    #[must_use]
    pub fn warning(&self) -> &'static str {
        self.icons().ui.warning
    }

    #[must_use]
    pub fn success(&self) -> &'static str {
        self.icons().ui.success
    }

    #[must_use]
    pub fn celebration(&self) -> &'static str {
        self.icons().ui.celebration
    }

    #[must_use]
    pub fn filter_include(&self) -> &'static str {
        self.icons().filter.include
    }

    #[must_use]
    pub fn filter_exclude(&self) -> &'static str {
        self.icons().filter.exclude
    }

    #[must_use]
    pub fn filter_neutral(&self) -> &'static str {
        self.icons().filter.neutral
    }

    #[must_use]
    pub fn grip(&self) -> &'static str {
        self.icons().list.grip
    }

    #[must_use]
    pub fn tag_group(&self) -> &'static str {
        self.icons().list.tag_group
    }

    #[must_use]
    pub fn untagged_group(&self) -> &'static str {
        self.icons().list.untagged_group
    }
}
