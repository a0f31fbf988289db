//! Limb health bar component
//!
//! A small horizontal gauge drawn next to each limb of the figure diagram:
//! dark track, colored border, proportional fill. Bars are stateless and
//! reused for every limb, only the style is stored.
//!
//! # Example
//!
//! ```rust
//! let bar = HealthBar::new();
//! bar.render(&mut surface, Point::new(560, 120), snapshot.body_parts.head)?;
//! ```

use crate::error::HudError;
use crate::palette::{health_color, PIP_GREEN_DARK};
use crate::surface::Surface;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::rect::Point;

/// Configuration for health bar appearance
#[derive(Debug, Clone)]
pub struct HealthBarStyle {
    /// Bar width in pixels
    pub width: u32,

    /// Bar height in pixels
    pub height: u32,

    /// Track color (shown where health is missing)
    pub background_color: Color,

    /// Border thickness in pixels (0 = no border)
    pub border_thickness: u32,
}

impl Default for HealthBarStyle {
    fn default() -> Self {
        HealthBarStyle {
            width: 80,
            height: 12,
            background_color: PIP_GREEN_DARK,
            border_thickness: 2,
        }
    }
}

pub struct HealthBar {
    style: HealthBarStyle,
}

impl HealthBar {
    /// Creates a health bar with the default 80x12 style
    pub fn new() -> Self {
        HealthBar {
            style: HealthBarStyle::default(),
        }
    }

    #[cfg(test)]
    pub fn with_style(style: HealthBarStyle) -> Self {
        HealthBar { style }
    }

    pub fn style(&self) -> &HealthBarStyle {
        &self.style
    }

    /// Draws the bar with its top-left corner at `origin` for a 0-100 `value`.
    ///
    /// Border and fill take the limb's health color. Values outside 0-100 are
    /// not clamped: a negative value draws no fill, a value above 100 overflows
    /// the track.
    pub fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        origin: Point,
        value: i32,
    ) -> Result<(), HudError> {
        let color = health_color(value);
        let track = Rect::new(origin.x(), origin.y(), self.style.width, self.style.height);

        surface.fill_rect(track, self.style.background_color)?;

        if self.style.border_thickness > 0 {
            surface.stroke_rect(track, self.style.border_thickness, color)?;
        }

        let fill = fill_width(value, self.style.width);
        if fill > 0 {
            let fill_rect = Rect::new(origin.x(), origin.y(), fill as u32, self.style.height);
            surface.fill_rect(fill_rect, color)?;
        }

        Ok(())
    }
}

impl Default for HealthBar {
    fn default() -> Self {
        Self::new()
    }
}

/// Filled width for `value` percent of a `bar_width` bar, rounded to the
/// nearest pixel
pub fn fill_width(value: i32, bar_width: u32) -> i32 {
    (value as f32 / 100.0 * bar_width as f32).round() as i32
}
