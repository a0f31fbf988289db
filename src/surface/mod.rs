//! Drawing surface abstraction
//!
//! Panels never touch SDL2 directly. They draw through the [`Surface`] trait,
//! which has two implementations:
//!
//! - [`SdlSurface`]: the real window canvas (primitives rasterized with
//!   `crate::raster`, text through the loaded `FontSet`)
//! - `Recorder` (tests only): records every call as a `DrawCommand` so panel
//!   layout and colors can be asserted without a video device
//!
//! Colors with alpha below 255 are blended over what is already drawn; opaque
//! colors overwrite.

pub mod sdl;

#[cfg(test)]
pub mod recorder;

pub use sdl::SdlSurface;

use crate::error::HudError;
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};

/// Logical surface width in pixels
pub const SCREEN_WIDTH: u32 = 1200;

/// Logical surface height in pixels
pub const SCREEN_HEIGHT: u32 = 800;

/// The four text sizes the HUD uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontSize {
    Large,
    Medium,
    Small,
    Tiny,
}

impl FontSize {
    pub const ALL: [FontSize; 4] = [FontSize::Large, FontSize::Medium, FontSize::Small, FontSize::Tiny];

    /// Nominal point size requested from the font service
    pub fn points(self) -> u16 {
        match self {
            FontSize::Large => 48,
            FontSize::Medium => 36,
            FontSize::Small => 24,
            FontSize::Tiny => 18,
        }
    }
}

/// Immediate-mode drawing target for one frame
pub trait Surface {
    /// Logical (width, height)
    fn size(&self) -> (u32, u32);

    /// Overwrites the whole surface
    fn clear(&mut self, color: Color) -> Result<(), HudError>;

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), HudError>;

    /// Rectangle outline whose border grows inward from `rect`
    fn stroke_rect(&mut self, rect: Rect, width: u32, color: Color) -> Result<(), HudError>;

    fn line(&mut self, from: Point, to: Point, width: u32, color: Color) -> Result<(), HudError>;

    /// Circle outline; the ring grows inward from `radius`
    fn circle(&mut self, center: Point, radius: i32, width: u32, color: Color) -> Result<(), HudError>;

    /// Elliptical arc inscribed in `bounds`, angles in radians counter-clockwise
    /// from 3 o'clock (screen y pointing down)
    fn arc(&mut self, bounds: Rect, start: f32, stop: f32, width: u32, color: Color)
        -> Result<(), HudError>;

    /// Draws `text` with its top-left corner at `pos`, returning the rendered width
    fn blit_text(&mut self, text: &str, pos: Point, size: FontSize, color: Color)
        -> Result<u32, HudError>;

    /// (width, height) `text` would occupy at `size`
    fn text_size(&self, text: &str, size: FontSize) -> Result<(u32, u32), HudError>;
}
