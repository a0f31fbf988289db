//! SDL2 canvas backend

use super::{FontSize, Surface};
use crate::error::HudError;
use crate::font::{bitmap_glyph_rects, bitmap_text_size, FontFace, FontSet};
use crate::raster;
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::{BlendMode, Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};

/// The window canvas plus the fonts text is rendered with
pub struct SdlSurface<'ttf> {
    canvas: Canvas<Window>,
    texture_creator: TextureCreator<WindowContext>,
    fonts: FontSet<'ttf>,
}

impl<'ttf> SdlSurface<'ttf> {
    pub fn new(canvas: Canvas<Window>, fonts: FontSet<'ttf>) -> Self {
        let texture_creator = canvas.texture_creator();
        SdlSurface {
            canvas,
            texture_creator,
            fonts,
        }
    }

    /// Flips the finished frame to the window
    pub fn present(&mut self) {
        self.canvas.present();
    }

    /// Sets draw color, blending only when the color is translucent
    fn apply_color(canvas: &mut Canvas<Window>, color: Color) {
        let mode = if color.a < 255 { BlendMode::Blend } else { BlendMode::None };
        canvas.set_blend_mode(mode);
        canvas.set_draw_color(color);
    }
}

impl Surface for SdlSurface<'_> {
    fn size(&self) -> (u32, u32) {
        match self.canvas.logical_size() {
            (0, 0) => self.canvas.window().size(),
            size => size,
        }
    }

    fn clear(&mut self, color: Color) -> Result<(), HudError> {
        Self::apply_color(&mut self.canvas, color);
        self.canvas.clear();
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), HudError> {
        Self::apply_color(&mut self.canvas, color);
        self.canvas.fill_rect(rect)?;
        Ok(())
    }

    fn stroke_rect(&mut self, rect: Rect, width: u32, color: Color) -> Result<(), HudError> {
        Self::apply_color(&mut self.canvas, color);
        self.canvas.fill_rects(&raster::border_rects(rect, width))?;
        Ok(())
    }

    fn line(&mut self, from: Point, to: Point, width: u32, color: Color) -> Result<(), HudError> {
        Self::apply_color(&mut self.canvas, color);
        for (a, b) in raster::line_strokes(from, to, width) {
            self.canvas.draw_line(a, b)?;
        }
        Ok(())
    }

    fn circle(&mut self, center: Point, radius: i32, width: u32, color: Color) -> Result<(), HudError> {
        let points = raster::ring_points(center, radius, width);
        Self::apply_color(&mut self.canvas, color);
        self.canvas.draw_points(&points[..])?;
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
        let points = raster::arc_points(bounds, start, stop, width);
        Self::apply_color(&mut self.canvas, color);
        self.canvas.draw_points(&points[..])?;
        Ok(())
    }

    fn blit_text(
        &mut self,
        text: &str,
        pos: Point,
        size: FontSize,
        color: Color,
    ) -> Result<u32, HudError> {
        // SDL2_ttf refuses to render an empty string
        if text.is_empty() {
            return Ok(0);
        }

        match self.fonts.face(size) {
            FontFace::Ttf(font) => {
                let rendered = font
                    .render(text)
                    .blended(color)
                    .map_err(|e| HudError::Sdl(e.to_string()))?;
                let texture = self
                    .texture_creator
                    .create_texture_from_surface(&rendered)
                    .map_err(|e| HudError::Sdl(e.to_string()))?;
                let (w, h) = (rendered.width(), rendered.height());
                self.canvas.set_blend_mode(BlendMode::Blend);
                self.canvas.copy(&texture, None, Rect::new(pos.x(), pos.y(), w, h))?;
                Ok(w)
            }
            FontFace::Monospace { scale } => {
                let scale = *scale;
                let rects = bitmap_glyph_rects(text, pos.x(), pos.y(), scale);
                Self::apply_color(&mut self.canvas, color);
                self.canvas.fill_rects(&rects)?;
                Ok(bitmap_text_size(text, scale).0)
            }
        }
    }

    fn text_size(&self, text: &str, size: FontSize) -> Result<(u32, u32), HudError> {
        self.fonts.text_size(text, size)
    }
}
