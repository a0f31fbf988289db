use crate::error::HudError;
use crate::model::CharacterStats;
use crate::palette::{health_color, PIP_GREEN};
use crate::surface::{FontSize, Surface};
use crate::text::draw_text;
use sdl2::rect::{Point, Rect};

const ORIGIN_X: i32 = 60;
const ORIGIN_Y: i32 = 110;

/// CND, RAD and EFF captions down the left edge.
///
/// Only the captions are shown; the values behind them are not printed. The
/// CND box follows the condition through `health_color`.
pub fn draw_left_labels<S: Surface + ?Sized>(
    surface: &mut S,
    stats: &CharacterStats,
) -> Result<(), HudError> {
    let (x, y) = (ORIGIN_X, ORIGIN_Y);

    surface.stroke_rect(Rect::new(x, y, 80, 40), 2, health_color(stats.condition))?;
    draw_text(surface, "CND", Point::new(x + 15, y + 10), FontSize::Small, PIP_GREEN, false)?;
    draw_text(surface, "RAD", Point::new(x + 5, y + 70), FontSize::Medium, PIP_GREEN, false)?;
    draw_text(surface, "EFF", Point::new(x + 5, y + 130), FontSize::Medium, PIP_GREEN, false)?;
    Ok(())
}
