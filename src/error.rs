//! Error type for the HUD
//!
//! SDL2 reports every failure as a bare `String`, so `HudError` wraps those and
//! adds the config-loading failures. Font loading never shows up here: a missing
//! font is recovered by the bitmap fallback in `font.rs`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HudError {
    /// Any failure reported by SDL2 (init, window, canvas, texture, ttf)
    #[error("SDL2 error: {0}")]
    Sdl(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file exists but is not valid JSON for `HudConfig`
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<String> for HudError {
    fn from(error: String) -> Self {
        HudError::Sdl(error)
    }
}

impl From<sdl2::video::WindowBuildError> for HudError {
    fn from(error: sdl2::video::WindowBuildError) -> Self {
        HudError::Sdl(error.to_string())
    }
}

impl From<sdl2::IntegerOrSdlError> for HudError {
    fn from(error: sdl2::IntegerOrSdlError) -> Self {
        HudError::Sdl(error.to_string())
    }
}
