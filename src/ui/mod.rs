//! HUD panels and overlays
//!
//! Each panel is a free function of the surface and the data it shows. None of
//! them read another panel's output or any module-level state; `hud::render_frame`
//! decides the order.
//!
//! # Panels (back to front)
//!
//! - [`border`]: nested frame
//! - [`header`]: title, LVL/HP/AP/XP boxes, clock
//! - [`figure`]: Vault Boy diagram with limb [`health_bar`]s
//! - [`labels`]: CND/RAD/EFF captions
//! - [`equipment`]: inventory list
//! - [`tabs`]: bottom navigation strip
//! - [`overlays`]: scanlines, flicker, glitch

pub mod border;
pub mod equipment;
pub mod figure;
pub mod header;
pub mod health_bar;
pub mod labels;
pub mod overlays;
pub mod tabs;

pub use border::draw_border;
pub use equipment::draw_equipment;
pub use figure::draw_figure;
pub use header::draw_header;
pub use labels::draw_left_labels;
pub use overlays::{draw_flicker, draw_glitch, draw_scanlines};
pub use tabs::draw_tabs;
