use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::EventPump;

/// What the HUD does in response to input
///
/// The display is static, so the only action is leaving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudAction {
    Quit,
}

/// Translates SDL2 events into [`HudAction`]s
///
/// Window close and Escape quit; every other event is dropped.
pub struct InputSystem;

impl InputSystem {
    pub fn new() -> Self {
        InputSystem
    }

    /// Drains all pending events and returns the actions they map to
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<HudAction> {
        event_pump.poll_iter().filter_map(|event| self.translate(&event)).collect()
    }

    pub fn translate(&self, event: &Event) -> Option<HudAction> {
        match event {
            Event::Quit { .. } => Some(HudAction::Quit),
            Event::KeyDown { keycode: Some(key), .. } => action_for_key(*key),
            _ => None,
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

fn action_for_key(key: Keycode) -> Option<HudAction> {
    match key {
        Keycode::Escape => Some(HudAction::Quit),
        _ => None,
    }
}
