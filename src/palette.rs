//! Green monochrome CRT palette
//!
//! Every panel draws from these constants. Limb and condition colors go through
//! [`health_color`] so the warning threshold lives in exactly one place.

use sdl2::pixels::Color;

pub const PIP_GREEN: Color = Color::RGB(51, 255, 51);
pub const PIP_GREEN_DARK: Color = Color::RGB(20, 100, 20);
pub const PIP_GREEN_BRIGHT: Color = Color::RGB(102, 255, 102);
pub const PIP_GREEN_DIM: Color = Color::RGB(30, 180, 30);
pub const BACKGROUND: Color = Color::RGB(10, 20, 10);
pub const WARNING: Color = Color::RGB(255, 255, 51);
pub const SCANLINE: Color = Color::RGBA(0, 0, 0, 30);

/// Health at or below this value switches an element to [`WARNING`]
pub const WARNING_THRESHOLD: i32 = 50;

/// Picks the draw color for a 0-100 health value.
///
/// No gradient: anything above the threshold is the primary green, anything at
/// or below it is the warning yellow. Out-of-range values are not clamped.
pub fn health_color(value: i32) -> Color {
    if value > WARNING_THRESHOLD {
        PIP_GREEN
    } else {
        WARNING
    }
}
