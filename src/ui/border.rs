use crate::error::HudError;
use crate::palette::{PIP_GREEN, PIP_GREEN_DARK};
use crate::surface::Surface;
use sdl2::rect::Rect;

/// Two nested frames inset from the surface edge: bright outer, dark inner
pub fn draw_border<S: Surface + ?Sized>(surface: &mut S) -> Result<(), HudError> {
    let (w, h) = surface.size();
    surface.stroke_rect(Rect::new(10, 10, w.saturating_sub(20), h.saturating_sub(20)), 3, PIP_GREEN)?;
    surface.stroke_rect(Rect::new(15, 15, w.saturating_sub(30), h.saturating_sub(30)), 2, PIP_GREEN_DARK)?;
    Ok(())
}
