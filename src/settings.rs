//! Persisted cosmetic state.
//!
//! Kept in `<data_dir>/typetodo/settings.toml`, separate from task data.
//! Loaded once at startup; every change is written through immediately.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub dark_mode: bool,
    pub has_seen_tutorial: bool,
}

/// Owner of [`Settings`] and their file.
#[derive(Debug, Clone)]
pub struct SettingsService {
    path: PathBuf,
    settings: Settings,
}

impl SettingsService {
    /// Read settings from `path`. A missing or unreadable file yields defaults.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let settings = match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
                log::warn!("Ignoring malformed settings file {}: {}", path.display(), e);
                Settings::default()
            }),
            Err(_) => Settings::default(),
        };
        Self { path, settings }
    }

    /// `<data_dir>/typetodo/settings.toml`
    pub fn default_path() -> Result<PathBuf> {
        dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("typetodo").join("settings.toml"))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn dark_mode(&self) -> bool {
        self.settings.dark_mode
    }

    #[must_use]
    pub fn has_seen_tutorial(&self) -> bool {
        self.settings.has_seen_tutorial
    }

    pub fn set_dark_mode(&mut self, dark_mode: bool) -> Result<()> {
        self.settings.dark_mode = dark_mode;
        self.save()
    }

    /// Flip the theme and persist it. Returns the new value.
    pub fn toggle_dark_mode(&mut self) -> Result<bool> {
        let dark_mode = !self.settings.dark_mode;
        self.set_dark_mode(dark_mode)?;
        Ok(dark_mode)
    }

    pub fn mark_tutorial_seen(&mut self) -> Result<()> {
        if self.settings.has_seen_tutorial {
            return Ok(());
        }
        self.settings.has_seen_tutorial = true;
        self.save()
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create settings directory: {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(&self.settings).context("Failed to serialize settings")?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write settings file: {}", self.path.display()))?;
        log::debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}
