//! Font service
//!
//! The HUD asks for text at four sizes (see [`FontSize`]). At startup
//! [`FontSet::load`] tries to open the preferred TTF file through SDL2_ttf at
//! each size. Any size that cannot be loaded (no ttf context, no configured
//! path, missing or broken file) falls back to the built-in 5x7 bitmap
//! monospace face, scaled up by an integer factor. The fallback is silent and
//! lasts for the rest of the process.
//!
//! The bitmap face renders procedurally: each lit pixel of a glyph becomes a
//! `scale x scale` rectangle.

use crate::error::HudError;
use crate::surface::FontSize;
use sdl2::rect::Rect;
use sdl2::ttf::{Font, Sdl2TtfContext};
use std::path::Path;

/// Glyph cell width including one column of spacing
const GLYPH_ADVANCE: u32 = 6;
const GLYPH_HEIGHT: u32 = 7;

/// One loaded face for one size
pub enum FontFace<'ttf> {
    Ttf(Font<'ttf, 'static>),
    /// Built-in bitmap monospace at an integer pixel scale
    Monospace { scale: u32 },
}

impl<'ttf> FontFace<'ttf> {
    /// Bitmap face standing in for a TTF of `points` size
    pub fn monospace_for(points: u16) -> FontFace<'ttf> {
        FontFace::Monospace {
            scale: (points as u32 / 12).max(1),
        }
    }

    pub fn text_size(&self, text: &str) -> Result<(u32, u32), HudError> {
        match self {
            FontFace::Ttf(font) => font.size_of(text).map_err(|e| HudError::Sdl(e.to_string())),
            FontFace::Monospace { scale } => Ok(bitmap_text_size(text, *scale)),
        }
    }
}

/// Faces for all four sizes
pub struct FontSet<'ttf> {
    faces: [FontFace<'ttf>; 4],
}

impl<'ttf> FontSet<'ttf> {
    /// Loads `path` at every size, substituting the bitmap face per size on failure
    pub fn load(ttf: Option<&'ttf Sdl2TtfContext>, path: Option<&Path>) -> FontSet<'ttf> {
        let faces = FontSize::ALL.map(|size| match (ttf, path) {
            (Some(ctx), Some(path)) => match ctx.load_font(path, size.points()) {
                Ok(font) => FontFace::Ttf(font),
                Err(e) => {
                    log::debug!("font {} at {}pt unavailable ({}), using monospace", path.display(), size.points(), e);
                    FontFace::monospace_for(size.points())
                }
            },
            _ => FontFace::monospace_for(size.points()),
        });
        FontSet { faces }
    }

    pub fn face(&self, size: FontSize) -> &FontFace<'ttf> {
        &self.faces[size as usize]
    }

    /// True when every size is on the bitmap fallback
    pub fn is_monospace(&self) -> bool {
        self.faces.iter().all(|face| matches!(face, FontFace::Monospace { .. }))
    }

    pub fn text_size(&self, text: &str, size: FontSize) -> Result<(u32, u32), HudError> {
        self.face(size).text_size(text)
    }
}

pub fn bitmap_text_size(text: &str, scale: u32) -> (u32, u32) {
    let chars = text.chars().count() as u32;
    (chars * GLYPH_ADVANCE * scale, GLYPH_HEIGHT * scale)
}

/// Rectangles for every lit pixel of `text` drawn at (x, y)
pub fn bitmap_glyph_rects(text: &str, x: i32, y: i32, scale: u32) -> Vec<Rect> {
    let char_width = (GLYPH_ADVANCE * scale) as i32;
    let pixel_size = scale as i32;
    let mut rects = Vec::new();

    for (i, c) in text.chars().enumerate() {
        let char_x = x + i as i32 * char_width;
        for (row, pattern_row) in glyph(c).iter().enumerate() {
            for col in 0..5 {
                if (pattern_row >> (4 - col)) & 1 == 1 {
                    rects.push(Rect::new(
                        char_x + col * pixel_size,
                        y + row as i32 * pixel_size,
                        scale,
                        scale,
                    ));
                }
            }
        }
    }
    rects
}

/// 5x7 pattern for `c` (1 = pixel on). Case-insensitive; unknown characters
/// render as a full block.
fn glyph(c: char) -> [u8; 7] {
    match c.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10001, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10101, 0b11011, 0b10001],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ':' => [0b00000, 0b00000, 0b00100, 0b00000, 0b00100, 0b00000, 0b00000],
        '/' => [0b00001, 0b00010, 0b00010, 0b00100, 0b01000, 0b01000, 0b10000],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '+' => [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        ',' => [0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100, 0b01000],
        '\'' => [0b00100, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '%' => [0b11001, 0b11010, 0b00010, 0b00100, 0b01000, 0b01011, 0b10011],
        '(' => [0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => [0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        ' ' => [0b00000; 7],
        _ => [0b11111; 7],
    }
}
