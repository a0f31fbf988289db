//! In-memory surface that records draw calls
//!
//! Tests render panels into a `Recorder` and then look at the command list:
//! which colors were used, where text landed, how many blits a label took.
//! Text is measured with the bitmap face, the same metrics the real window
//! falls back to.

use super::{FontSize, Surface, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::HudError;
use crate::font::{bitmap_text_size, FontFace};
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, width: u32, color: Color },
    Line { from: Point, to: Point, width: u32, color: Color },
    Circle { center: Point, radius: i32, width: u32, color: Color },
    Arc { bounds: Rect, start: f32, stop: f32, width: u32, color: Color },
    Text { text: String, pos: Point, size: FontSize, color: Color },
}

impl DrawCommand {
    pub fn color(&self) -> Color {
        match self {
            DrawCommand::Clear(color) => *color,
            DrawCommand::FillRect { color, .. }
            | DrawCommand::StrokeRect { color, .. }
            | DrawCommand::Line { color, .. }
            | DrawCommand::Circle { color, .. }
            | DrawCommand::Arc { color, .. }
            | DrawCommand::Text { color, .. } => *color,
        }
    }
}

pub struct Recorder {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new() -> Self {
        Recorder::with_size(SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    pub fn with_size(width: u32, height: u32) -> Self {
        Recorder {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// All recorded text blits as (text, pos, color)
    pub fn texts(&self) -> Vec<(&str, Point, Color)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, pos, color, .. } => Some((text.as_str(), *pos, *color)),
                _ => None,
            })
            .collect()
    }

    fn scale(size: FontSize) -> u32 {
        match FontFace::monospace_for(size.points()) {
            FontFace::Monospace { scale } => scale,
            FontFace::Ttf(_) => 1,
        }
    }
}

impl Surface for Recorder {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Color) -> Result<(), HudError> {
        self.commands.push(DrawCommand::Clear(color));
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), HudError> {
        self.commands.push(DrawCommand::FillRect { rect, color });
        Ok(())
    }

    fn stroke_rect(&mut self, rect: Rect, width: u32, color: Color) -> Result<(), HudError> {
        self.commands.push(DrawCommand::StrokeRect { rect, width, color });
        Ok(())
    }

    fn line(&mut self, from: Point, to: Point, width: u32, color: Color) -> Result<(), HudError> {
        self.commands.push(DrawCommand::Line { from, to, width, color });
        Ok(())
    }

    fn circle(&mut self, center: Point, radius: i32, width: u32, color: Color) -> Result<(), HudError> {
        self.commands.push(DrawCommand::Circle { center, radius, width, color });
        Ok(())
    }

    fn arc(
        &mut self,
        bounds: Rect,
        start: f32,
        stop: f32,
        width: u32,
        color: Color,
    ) -> Result<(), HudError> {
        self.commands.push(DrawCommand::Arc { bounds, start, stop, width, color });
        Ok(())
    }

    fn blit_text(
        &mut self,
        text: &str,
        pos: Point,
        size: FontSize,
        color: Color,
    ) -> Result<u32, HudError> {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            size,
            color,
        });
        Ok(bitmap_text_size(text, Self::scale(size)).0)
    }

    fn text_size(&self, text: &str, size: FontSize) -> Result<(u32, u32), HudError> {
        Ok(bitmap_text_size(text, Self::scale(size)))
    }
}
