//! CRT animation phases
//!
//! The HUD has exactly one piece of mutable state: the phase counters that
//! drive the flicker and glitch overlays. They live in [`AnimationState`], a
//! small `Copy` value that the main loop threads through [`AnimationState::advance`]
//! once per tick instead of keeping process-wide globals.
//!
//! # Example
//!
//! ```rust
//! let mut animation = AnimationState::default();
//! loop {
//!     animation = animation.advance();
//!     let frame = FrameInput { animation, ..frame };
//!     render_frame(&mut surface, &frame)?;
//! }
//! ```

use std::f32::consts::TAU;

/// Per-tick flicker phase increment (radians)
pub const FLICKER_STEP: f32 = 0.1;

/// Per-tick glitch phase increment (radians)
pub const GLITCH_STEP: f32 = 0.05;

/// Scale applied to `|sin|` for the flicker wash
pub const FLICKER_AMPLITUDE: f32 = 0.5;

/// Glitch lines only appear when the glitch sample exceeds this
pub const GLITCH_THRESHOLD: f32 = 0.8;

/// The glitch window recurs every this many milliseconds...
pub const GLITCH_PERIOD_MS: u32 = 3000;

/// ...and stays open for this many
pub const GLITCH_WINDOW_MS: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationState {
    /// Cycles 0..4. Nothing reads it when drawing; scanlines use a fixed stride.
    pub scanline_offset: u8,
    /// Radians in [0, 2π)
    pub flicker_phase: f32,
    /// Radians in [0, 2π)
    pub glitch_phase: f32,
}

impl AnimationState {
    /// Returns the state for the next tick
    pub fn advance(self) -> AnimationState {
        AnimationState {
            scanline_offset: (self.scanline_offset + 1) % 4,
            flicker_phase: (self.flicker_phase + FLICKER_STEP) % TAU,
            glitch_phase: (self.glitch_phase + GLITCH_STEP) % TAU,
        }
    }

    /// Flicker strength in [0, 0.5]
    pub fn flicker_intensity(&self) -> f32 {
        flicker_intensity(self.flicker_phase)
    }

    /// Glitch sample in [0, 1]
    pub fn glitch_intensity(&self) -> f32 {
        self.glitch_phase.sin().abs()
    }

    /// True when the glitch overlay should be drawn on this tick
    pub fn glitch_active(&self, ticks_ms: u32) -> bool {
        in_glitch_window(ticks_ms) && self.glitch_intensity() > GLITCH_THRESHOLD
    }
}

pub fn flicker_intensity(phase: f32) -> f32 {
    phase.sin().abs() * FLICKER_AMPLITUDE
}

/// True for the first 50 ms of every 3 s period
pub fn in_glitch_window(ticks_ms: u32) -> bool {
    ticks_ms % GLITCH_PERIOD_MS < GLITCH_WINDOW_MS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_advance_steps_each_counter() {
        let next = AnimationState::default().advance();
        assert_eq!(next.scanline_offset, 1);
        assert!((next.flicker_phase - 0.1).abs() < 1e-6);
        assert!((next.glitch_phase - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_scanline_offset_wraps_at_four() {
        let mut state = AnimationState::default();
        for _ in 0..4 {
            state = state.advance();
        }
        assert_eq!(state.scanline_offset, 0);
    }

    #[test]
    fn test_phases_stay_below_tau() {
        let mut state = AnimationState::default();
        for _ in 0..1000 {
            state = state.advance();
            assert!(state.flicker_phase >= 0.0 && state.flicker_phase < TAU);
            assert!(state.glitch_phase >= 0.0 && state.glitch_phase < TAU);
        }
    }

    #[test]
    fn test_flicker_intensity_bounds() {
        let mut phase = -10.0_f32;
        while phase < 10.0 {
            let intensity = flicker_intensity(phase);
            assert!((0.0..=0.5).contains(&intensity), "phase {phase} gave {intensity}");
            phase += 0.01;
        }
        assert_eq!(flicker_intensity(0.0), 0.0);
        assert!((flicker_intensity(FRAC_PI_2) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_glitch_window() {
        assert!(in_glitch_window(0));
        assert!(in_glitch_window(49));
        assert!(!in_glitch_window(50));
        assert!(!in_glitch_window(2999));
        assert!(in_glitch_window(3000));
        assert!(in_glitch_window(6020));
    }

    #[test]
    fn test_glitch_gate_needs_both_conditions() {
        let hot = AnimationState { glitch_phase: FRAC_PI_2, ..Default::default() };
        let cold = AnimationState { glitch_phase: 0.3, ..Default::default() };

        assert!(hot.glitch_active(3010));
        assert!(!hot.glitch_active(3100));
        assert!(!cold.glitch_active(3010));
        assert!(!cold.glitch_active(3100));
    }
}
