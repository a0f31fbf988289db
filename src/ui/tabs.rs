use crate::error::HudError;
use crate::palette::{PIP_GREEN, PIP_GREEN_BRIGHT, PIP_GREEN_DARK};
use crate::surface::{FontSize, Surface};
use crate::text::draw_text_centered;
use sdl2::rect::{Point, Rect};

pub const TAB_CAPTIONS: [&str; 5] = ["Status", "Special", "Skills", "Perks", "General"];

/// The highlighted tab. Fixed: nothing switches tabs.
pub const SELECTED_TAB: usize = 0;

const TAB_PITCH: i32 = 160;
const TAB_GAP: u32 = 10;
const TAB_HEIGHT: u32 = 40;
const FIRST_TAB_X: i32 = 120;

/// Bounds of tab `index` on a surface `height` pixels tall
pub fn tab_rect(index: usize, height: u32) -> Rect {
    Rect::new(
        FIRST_TAB_X + index as i32 * TAB_PITCH,
        height as i32 - 80,
        TAB_PITCH as u32 - TAB_GAP,
        TAB_HEIGHT,
    )
}

/// Navigation tab strip along the bottom edge
pub fn draw_tabs<S: Surface + ?Sized>(surface: &mut S) -> Result<(), HudError> {
    let (_, h) = surface.size();

    for (i, caption) in TAB_CAPTIONS.iter().enumerate() {
        let rect = tab_rect(i, h);
        let selected = i == SELECTED_TAB;

        if selected {
            surface.fill_rect(rect, PIP_GREEN_DARK)?;
        }
        surface.stroke_rect(rect, 2, PIP_GREEN)?;

        let color = if selected { PIP_GREEN_BRIGHT } else { PIP_GREEN };
        draw_text_centered(surface, caption, rect.center(), FontSize::Small, color)?;
    }
    Ok(())
}
