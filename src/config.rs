// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::models::PageSize;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("org.saoke", "Saoke", "saoke"));

pub const BASE_URL_ENV: &str = "SAOKE_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub base_url: String,
    pub page_size: PageSize,
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            page_size: PageSize::Twenty,
            timeout_secs: 15,
        }
    }
}

impl Settings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Flag beats environment beats file.
    pub fn with_overrides(mut self, flag_base_url: Option<&str>, env_base_url: Option<&str>) -> Self {
        if let Some(url) = flag_base_url.or(env_base_url).filter(|s| !s.trim().is_empty()) {
            self.base_url = url.trim().to_string();
        }
        self
    }
}

pub fn config_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    Ok(proj.config_dir().join("config.json"))
}

/// A missing file yields defaults; a present but unreadable one is an error.
pub fn load_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Read config at {}", path.display()))?;
    let settings = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid config at {}", path.display()))?;
    Ok(settings)
}

pub fn save_to(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).context("Failed to create config dir")?;
    }
    fs::write(path, serde_json::to_string_pretty(settings)?)
        .with_context(|| format!("Write config at {}", path.display()))?;
    Ok(())
}
