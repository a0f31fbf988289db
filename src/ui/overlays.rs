//! CRT post-process overlays
//!
//! Drawn after every panel, in this order: scanline mask, flicker wash,
//! glitch lines. All three read the animation state but never change it.

use crate::animation::AnimationState;
use crate::error::HudError;
use crate::palette::{PIP_GREEN_BRIGHT, SCANLINE};
use crate::surface::Surface;
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};

/// Rows between the tops of consecutive scanlines
pub const SCANLINE_STRIDE: usize = 4;
const SCANLINE_THICKNESS: u32 = 2;

/// Flicker intensity (max 0.5) maps to alpha by this factor
const FLICKER_ALPHA_SCALE: f32 = 10.0;

const GLITCH_LINES: usize = 3;

pub fn draw_scanlines<S: Surface + ?Sized>(surface: &mut S) -> Result<(), HudError> {
    let (w, h) = surface.size();
    for y in (0..h as i32).step_by(SCANLINE_STRIDE) {
        surface.fill_rect(Rect::new(0, y, w, SCANLINE_THICKNESS), SCANLINE)?;
    }
    Ok(())
}

/// Alpha of the white flicker wash for a given intensity
pub fn flicker_alpha(intensity: f32) -> u8 {
    (intensity * FLICKER_ALPHA_SCALE) as u8
}

/// Full-surface translucent white wash; skipped while intensity is zero
pub fn draw_flicker<S: Surface + ?Sized>(surface: &mut S, intensity: f32) -> Result<(), HudError> {
    if intensity <= 0.0 {
        return Ok(());
    }
    let (w, h) = surface.size();
    let wash = Color::RGBA(255, 255, 255, flicker_alpha(intensity));
    surface.fill_rect(Rect::new(0, 0, w, h), wash)
}

/// Rows hit by the glitch on `ticks_ms`, all on the same tick-derived row.
/// Empty on a zero-height surface.
pub fn glitch_rows(ticks_ms: u32, height: u32) -> Vec<i32> {
    if height == 0 {
        return Vec::new();
    }
    vec![(ticks_ms % height) as i32; GLITCH_LINES]
}

/// Bright full-width lines, only while the glitch gate is open
pub fn draw_glitch<S: Surface + ?Sized>(
    surface: &mut S,
    animation: &AnimationState,
    ticks_ms: u32,
) -> Result<(), HudError> {
    if !animation.glitch_active(ticks_ms) {
        return Ok(());
    }

    let (w, h) = surface.size();
    for y in glitch_rows(ticks_ms, h) {
        surface.line(Point::new(0, y), Point::new(w as i32, y), 2, PIP_GREEN_BRIGHT)?;
    }
    Ok(())
}
