//! Presentation config
//!
//! Optional JSON file controlling how the HUD is shown: window scale, frame
//! rate, preferred font and which CRT effects run. The character data on
//! screen is not configurable.
//!
//! Lookup order:
//! 1. `$PIPBOY_HUD_CONFIG`
//! 2. `<config dir>/pipboy_hud/config.json` (e.g. `~/.config/pipboy_hud/config.json`)
//!
//! A missing file means defaults. A present but malformed file is logged and
//! also falls back to defaults; the HUD always starts.
//!
//! # Example file
//!
//! ```json
//! { "window_scale": 1, "fps": 30, "font_path": "/usr/share/fonts/TTF/monofonto.ttf", "glitch": false }
//! ```

use crate::error::HudError;
use crate::hud::Effects;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV_VAR: &str = "PIPBOY_HUD_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    /// Integer window scale over the 1200x800 logical size
    pub window_scale: u32,
    /// Target frame rate of the main loop
    pub fps: u32,
    /// Preferred TTF font; the bitmap face is used when unset or unloadable
    pub font_path: Option<PathBuf>,
    pub scanlines: bool,
    pub flicker: bool,
    pub glitch: bool,
    /// Glow halo behind the header title
    pub glow: bool,
    /// Date/time readout in the header, off unless asked for
    pub show_clock: bool,
    pub vsync: bool,
}

impl Default for HudConfig {
    fn default() -> Self {
        HudConfig {
            window_scale: 1,
            fps: 30,
            font_path: None,
            scanlines: true,
            flicker: true,
            glitch: true,
            glow: false,
            show_clock: false,
            vsync: false,
        }
    }
}

impl HudConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, HudError> {
        let content = std::fs::read_to_string(path)?;
        let config: HudConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Where to look for the config file, if anywhere
    pub fn default_path() -> Option<PathBuf> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Some(PathBuf::from(path)),
            None => dirs::config_dir().map(|dir| dir.join("pipboy_hud").join("config.json")),
        }
    }

    /// Loads `path` if it exists, otherwise defaults. Never fails.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return HudConfig::default();
        };
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return HudConfig::default();
        }

        match HudConfig::load_from_file(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring config {}: {}", path.display(), e);
                HudConfig::default()
            }
        }
    }

    pub fn effects(&self) -> Effects {
        Effects {
            scanlines: self.scanlines,
            flicker: self.flicker,
            glitch: self.glitch,
            glow: self.glow,
        }
    }

    /// Sleep between frames, with a zero or absurd fps treated as 1
    pub fn frame_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / self.fps.max(1) as f64)
    }

    /// Window scale clamped to a sane 1..=4
    pub fn scale(&self) -> u32 {
        self.window_scale.clamp(1, 4)
    }
}
