//! File-backed store for the core's tunables.
//!
//! The host app owns where the file lives; the store owns (re)loading and
//! atomic updates. Missing or unparsable files fall back to defaults so a
//! corrupt settings file can never block startup.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, sync::RwLock};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CoreSettings {
    /// Base URL of the backend API, e.g. "https://api.example.com/v1".
    pub backend_base_url: String,
    /// Fixed per-request timeout for the backend client.
    pub request_timeout_ms: u64,
    /// Minimum time the splash screen stays up even on a fast network.
    pub splash_min_display_ms: u64,
    /// Cadence at which the splash screen samples preload progress.
    pub preload_poll_ms: u64,
}

impl Default for CoreSettings {
    fn default() -> Self {
        Self {
            backend_base_url: "http://localhost:8000/api".into(),
            request_timeout_ms: 10_000,
            splash_min_display_ms: 1_500,
            preload_poll_ms: 250,
        }
    }
}

pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<CoreSettings>,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_default()
        } else {
            CoreSettings::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn current(&self) -> CoreSettings {
        self.data.read().unwrap().clone()
    }

    pub fn update(&self, settings: CoreSettings) -> Result<()> {
        {
            let mut guard = self.data.write().unwrap();
            *guard = settings;
            self.persist(&guard)?;
        }
        Ok(())
    }

    pub fn reload(&self) -> Result<()> {
        let contents = fs::read_to_string(&self.path)?;
        let data: CoreSettings = serde_json::from_str(&contents)?;
        let mut guard = self.data.write().unwrap();
        *guard = data;
        Ok(())
    }

    fn persist(&self, data: &CoreSettings) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}
