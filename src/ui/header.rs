//! Top header: title, four stat boxes and the separator line
//!
//! When the host passes a wall-clock reading, a date/time readout is drawn
//! right-aligned against the border, the way the in-game device shows it.

use crate::error::HudError;
use crate::model::CharacterStats;
use crate::palette::{PIP_GREEN, PIP_GREEN_BRIGHT, PIP_GREEN_DIM};
use crate::surface::{FontSize, Surface};
use crate::text::draw_text;
use chrono::NaiveDateTime;
use sdl2::rect::{Point, Rect};

const BOX_Y: i32 = 20;
const BOX_HEIGHT: u32 = 40;
const SEPARATOR_Y: i32 = 75;
const CLOCK_FORMAT: &str = "%d.%m.%Y  %H:%M";

/// A labeled box in the header row
#[derive(Debug, Clone, PartialEq)]
pub struct StatBox {
    pub x: i32,
    pub width: u32,
    pub text: String,
}

/// The LVL, HP, AP and XP boxes, left to right
pub fn stat_boxes(stats: &CharacterStats) -> [StatBox; 4] {
    [
        StatBox { x: 220, width: 120, text: format!("LVL  {}", stats.level) },
        StatBox { x: 360, width: 180, text: format!("HP  {}/{}", stats.hp, stats.max_hp) },
        StatBox { x: 560, width: 150, text: format!("AP  {}/{}", stats.ap, stats.max_ap) },
        StatBox { x: 730, width: 180, text: format!("XP  {}/{}", stats.xp, stats.next_level) },
    ]
}

pub fn draw_header<S: Surface + ?Sized>(
    surface: &mut S,
    stats: &CharacterStats,
    clock: Option<&NaiveDateTime>,
    glow_title: bool,
) -> Result<(), HudError> {
    let (w, _) = surface.size();

    draw_text(surface, "STATS", Point::new(60, 25), FontSize::Medium, PIP_GREEN_BRIGHT, glow_title)?;

    for stat_box in stat_boxes(stats) {
        surface.stroke_rect(Rect::new(stat_box.x, BOX_Y, stat_box.width, BOX_HEIGHT), 2, PIP_GREEN)?;
        draw_text(
            surface,
            &stat_box.text,
            Point::new(stat_box.x + 10, BOX_Y + 10),
            FontSize::Small,
            PIP_GREEN,
            false,
        )?;
    }

    if let Some(now) = clock {
        let reading = now.format(CLOCK_FORMAT).to_string();
        let (text_w, _) = surface.text_size(&reading, FontSize::Tiny)?;
        let x = w as i32 - 40 - text_w as i32;
        draw_text(surface, &reading, Point::new(x, 32), FontSize::Tiny, PIP_GREEN_DIM, false)?;
    }

    surface.line(
        Point::new(30, SEPARATOR_Y),
        Point::new(w as i32 - 30, SEPARATOR_Y),
        2,
        PIP_GREEN,
    )?;

    Ok(())
}
