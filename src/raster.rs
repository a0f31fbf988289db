//! Pixel geometry for the primitives SDL2 lacks
//!
//! SDL2's canvas only draws 1px lines and outlines. The HUD needs thick borders,
//! thick limbs, ring circles and the smile arc, so these helpers break each shape
//! down into rects, line pairs or points the canvas can draw directly.
//!
//! Everything here is pure so it can be unit tested without a window.

use sdl2::rect::{Point, Rect};
use std::f32::consts::TAU;

/// Splits a `width`-thick outline of `rect` into four filled edge rects.
///
/// The border grows inward. If the border would meet in the middle the whole
/// rect is returned as a single fill.
pub fn border_rects(rect: Rect, width: u32) -> Vec<Rect> {
    let (x, y, w, h) = (rect.x(), rect.y(), rect.width(), rect.height());
    if width == 0 || width * 2 >= w || width * 2 >= h {
        return vec![rect];
    }

    let inner_h = h - width * 2;
    vec![
        Rect::new(x, y, w, width),
        Rect::new(x, y + (h - width) as i32, w, width),
        Rect::new(x, y + width as i32, width, inner_h),
        Rect::new(x + (w - width) as i32, y + width as i32, width, inner_h),
    ]
}

/// Expands a thick line into `width` parallel 1px lines.
///
/// Mostly-horizontal lines are stacked vertically, mostly-vertical ones side by
/// side, centered on the requested segment.
pub fn line_strokes(from: Point, to: Point, width: u32) -> Vec<(Point, Point)> {
    if width <= 1 {
        return vec![(from, to)];
    }

    let horizontal = (to.x() - from.x()).abs() >= (to.y() - from.y()).abs();
    let first = -(width as i32 / 2);

    (0..width as i32)
        .map(|i| {
            let offset = first + i;
            if horizontal {
                (from.offset(0, offset), to.offset(0, offset))
            } else {
                (from.offset(offset, 0), to.offset(offset, 0))
            }
        })
        .collect()
}

/// Points of a circle outline `width` pixels thick, measured inward from `radius`
pub fn ring_points(center: Point, radius: i32, width: u32) -> Vec<Point> {
    if radius <= 0 {
        return Vec::new();
    }

    let outer = radius * radius;
    let inner_radius = radius - width as i32;
    let inner = if inner_radius > 0 { inner_radius * inner_radius } else { -1 };

    let mut points = Vec::new();
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let d2 = dx * dx + dy * dy;
            if d2 <= outer && d2 > inner {
                points.push(center.offset(dx, dy));
            }
        }
    }
    points
}

/// Points along an elliptical arc inscribed in `bounds`.
///
/// Angles are radians counter-clockwise from 3 o'clock as seen on screen. A
/// `stop` smaller than `start` wraps once around the circle, so `(π, 0)` is the
/// lower half.
pub fn arc_points(bounds: Rect, start: f32, stop: f32, width: u32) -> Vec<Point> {
    let stop = if stop < start { stop + TAU } else { stop };
    let rx = bounds.width() as f32 / 2.0;
    let ry = bounds.height() as f32 / 2.0;
    let cx = bounds.x() as f32 + rx;
    let cy = bounds.y() as f32 + ry;

    let mut points = Vec::new();
    for layer in 0..width.max(1) {
        let lrx = rx - layer as f32;
        let lry = ry - layer as f32;
        if lrx <= 0.0 || lry <= 0.0 {
            break;
        }

        // Two samples per pixel of arc length keeps the curve gap-free
        let steps = ((stop - start) * lrx.max(lry) * 2.0).ceil().max(1.0) as u32;
        for i in 0..=steps {
            let angle = start + (stop - start) * i as f32 / steps as f32;
            let px = cx + lrx * angle.cos();
            let py = cy - lry * angle.sin();
            points.push(Point::new(px.round() as i32, py.round() as i32));
        }
    }
    points.dedup();
    points
}
