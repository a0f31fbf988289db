//! Frame compositor
//!
//! `render_frame` is the single entry point the main loop calls each tick. It
//! fully overwrites the surface: background, the static panels back to front,
//! then the CRT overlays.

use crate::animation::AnimationState;
use crate::error::HudError;
use crate::model::HudSnapshot;
use crate::palette::BACKGROUND;
use crate::surface::Surface;
use crate::ui;
use chrono::NaiveDateTime;

/// Which CRT overlays are switched on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Effects {
    pub scanlines: bool,
    pub flicker: bool,
    pub glitch: bool,
    /// Bloom halo behind the header title
    pub glow: bool,
}

impl Default for Effects {
    fn default() -> Self {
        Effects {
            scanlines: true,
            flicker: true,
            glitch: true,
            glow: false,
        }
    }
}

/// Everything one frame is drawn from
#[derive(Debug, Clone)]
pub struct FrameInput<'a> {
    pub snapshot: &'a HudSnapshot,
    pub animation: AnimationState,
    /// Milliseconds since startup, drives the glitch window
    pub ticks_ms: u32,
    pub effects: Effects,
    /// Local wall-clock time for the header readout; `None` hides it
    pub clock: Option<NaiveDateTime>,
}

pub fn render_frame<S: Surface + ?Sized>(surface: &mut S, frame: &FrameInput) -> Result<(), HudError> {
    let snapshot = frame.snapshot;

    surface.clear(BACKGROUND)?;

    ui::draw_border(surface)?;
    ui::draw_header(surface, &snapshot.stats, frame.clock.as_ref(), frame.effects.glow)?;
    ui::draw_figure(surface, &snapshot.body_parts, snapshot.stats.level)?;
    ui::draw_left_labels(surface, &snapshot.stats)?;
    ui::draw_equipment(surface, &snapshot.inventory)?;
    ui::draw_tabs(surface)?;

    if frame.effects.scanlines {
        ui::draw_scanlines(surface)?;
    }
    if frame.effects.flicker {
        ui::draw_flicker(surface, frame.animation.flicker_intensity())?;
    }
    if frame.effects.glitch {
        ui::draw_glitch(surface, &frame.animation, frame.ticks_ms)?;
    }

    Ok(())
}
