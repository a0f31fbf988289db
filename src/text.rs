//! HUD labels with optional glow
//!
//! Glow is a cheap bloom: the label is stamped in the dark green at every
//! offset of a 5x5 neighbourhood (24 blits, skipping the center), then drawn
//! once on top in its real color.

use crate::error::HudError;
use crate::palette::PIP_GREEN_DARK;
use crate::surface::{FontSize, Surface};
use sdl2::pixels::Color;
use sdl2::rect::Point;

/// Halo reaches this many pixels in each direction
const GLOW_RADIUS: i32 = 2;

/// Draws a label at `pos` (top-left), returning its rendered width.
///
/// # Example
///
/// ```rust
/// let width = draw_text(&mut surface, "STATS", Point::new(60, 25), FontSize::Medium, PIP_GREEN_BRIGHT, false)?;
/// ```
pub fn draw_text<S: Surface + ?Sized>(
    surface: &mut S,
    text: &str,
    pos: Point,
    size: FontSize,
    color: Color,
    glow: bool,
) -> Result<u32, HudError> {
    if glow {
        for dx in -GLOW_RADIUS..=GLOW_RADIUS {
            for dy in -GLOW_RADIUS..=GLOW_RADIUS {
                if dx != 0 || dy != 0 {
                    surface.blit_text(text, pos.offset(dx, dy), size, PIP_GREEN_DARK)?;
                }
            }
        }
    }

    surface.blit_text(text, pos, size, color)
}

/// Draws a label centered on `center`
pub fn draw_text_centered<S: Surface + ?Sized>(
    surface: &mut S,
    text: &str,
    center: Point,
    size: FontSize,
    color: Color,
) -> Result<u32, HudError> {
    let (w, h) = surface.text_size(text, size)?;
    let pos = center.offset(-(w as i32 / 2), -(h as i32 / 2));
    surface.blit_text(text, pos, size, color)
}
