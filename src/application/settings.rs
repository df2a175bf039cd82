//! Startup configuration read from a JSON file.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::domain::GridSize;

/// Environment variable that overrides the settings file location
pub const SETTINGS_ENV: &str = "LIFE_CANVAS_SETTINGS";
pub const DEFAULT_SETTINGS_FILE: &str = "life_canvas.json";

pub const DEFAULT_TICK_INTERVAL_MS: u32 = 200;
pub const MIN_TICK_INTERVAL_MS: u32 = 10;
pub const MAX_TICK_INTERVAL_MS: u32 = 1000;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub grid_size: usize,
    pub tick_interval_ms: u32,
    /// Preset stamped in the middle of the board at startup
    pub initial_pattern: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_size: GridSize::DEFAULT.get(),
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            initial_pattern: None,
        }
    }
}

impl Settings {
    /// Location from `LIFE_CANVAS_SETTINGS`, or `life_canvas.json` in the working directory
    pub fn default_path() -> PathBuf {
        std::env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE))
    }

    pub fn load_from_disk(path: &Path) -> anyhow::Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        let settings = serde_json::from_str(&data)
            .with_context(|| format!("parsing settings in {}", path.display()))?;
        Ok(settings)
    }

    /// Read settings, falling back to defaults when the file is absent or broken
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("no settings file at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load_from_disk(path) {
            Ok(settings) => {
                log::info!("loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("ignoring settings file: {err:#}");
                Self::default()
            }
        }
    }

    /// Configured size, or the default when the file holds an out-of-range value
    pub fn grid_size(&self) -> GridSize {
        GridSize::new(self.grid_size).unwrap_or_else(|| {
            log::warn!(
                "grid_size {} outside {}..={}, using {}",
                self.grid_size,
                GridSize::MIN,
                GridSize::MAX,
                GridSize::DEFAULT.get()
            );
            GridSize::DEFAULT
        })
    }

    pub fn tick_interval_ms(&self) -> u32 {
        self.tick_interval_ms.clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS)
    }
}
