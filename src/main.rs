use std::time::Instant;

mod animation;
mod config;
mod error;
mod font;
mod hud;
mod input_system;
mod model;
mod palette;
mod raster;
mod surface;
mod text;
mod ui;

use animation::AnimationState;
use config::HudConfig;
use error::HudError;
use font::FontSet;
use hud::{render_frame, FrameInput};
use input_system::{HudAction, InputSystem};
use model::{BodyPart, HudSnapshot};
use surface::{SdlSurface, SCREEN_HEIGHT, SCREEN_WIDTH};

const WINDOW_TITLE: &str = "Pip-Boy 3000 Mark IV";

fn log_snapshot(snapshot: &HudSnapshot) {
    let stats = &snapshot.stats;
    log::info!("{} - level {}, HP {}/{}", stats.name, stats.level, stats.hp, stats.max_hp);

    let special: Vec<String> = snapshot
        .special
        .iter()
        .map(|(letter, value)| format!("{}{}", letter, value))
        .collect();
    log::debug!("S.P.E.C.I.A.L.: {}", special.join(" "));

    for part in BodyPart::ALL {
        log::debug!("  {:<9} {:>3}%", part.name(), snapshot.body_parts.get(part));
    }
}

fn main() -> Result<(), HudError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = HudConfig::default_path();
    let config = HudConfig::load_or_default(config_path.as_deref());

    let snapshot = HudSnapshot::vault_dweller();
    log_snapshot(&snapshot);

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let timer = sdl_context.timer()?;

    // Fonts borrow the ttf context, so it has to outlive the surface
    let ttf_context = match sdl2::ttf::init() {
        Ok(ctx) => Some(ctx),
        Err(e) => {
            log::debug!("SDL2_ttf unavailable ({}), text uses the bitmap face", e);
            None
        }
    };
    let fonts = FontSet::load(ttf_context.as_ref(), config.font_path.as_deref());
    log::debug!("Fonts: {}", if fonts.is_monospace() { "built-in monospace" } else { "ttf" });

    let scale = config.scale();
    let window_width = SCREEN_WIDTH * scale;
    let window_height = SCREEN_HEIGHT * scale;
    log::info!("Window: {}x{} ({}x scale)", window_width, window_height, scale);

    let window = video_subsystem
        .window(WINDOW_TITLE, window_width, window_height)
        .position_centered()
        .build()?;

    let mut canvas_builder = window.into_canvas();
    if config.vsync {
        canvas_builder = canvas_builder.present_vsync();
    }
    let mut canvas = canvas_builder.build()?;

    // Panels are laid out in 1200x800 logical pixels regardless of window scale
    canvas.set_logical_size(SCREEN_WIDTH, SCREEN_HEIGHT)?;

    let mut surface = SdlSurface::new(canvas, fonts);
    let mut event_pump = sdl_context.event_pump()?;
    let input = InputSystem::new();
    let effects = config.effects();
    let frame_duration = config.frame_duration();
    let mut animation = AnimationState::default();

    log::info!("Running at {} fps, ESC to quit", config.fps.max(1));

    'running: loop {
        let frame_start = Instant::now();

        for action in input.poll_events(&mut event_pump) {
            match action {
                HudAction::Quit => break 'running,
            }
        }

        animation = animation.advance();

        let frame = FrameInput {
            snapshot: &snapshot,
            animation,
            ticks_ms: timer.ticks(),
            effects,
            clock: config.show_clock.then(|| chrono::Local::now().naive_local()),
        };
        render_frame(&mut surface, &frame)?;
        surface.present();

        log::trace!("frame {:?} flicker {:.2}", frame_start.elapsed(), animation.flicker_intensity());

        // Cap to the target frame rate
        if let Some(remaining) = frame_duration.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    log::info!("Shutting down");
    Ok(())
}
