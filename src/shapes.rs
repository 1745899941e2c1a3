//! Rasterizers for the primitive shapes and the round brush shared with freehand strokes.
//!
//! Geometry is given in buffer pixel space. Endpoints are rounded to whole
//! pixels, so a one pixel wide line from (1, 1) to (3, 1) covers exactly the
//! pixels (1, 1), (2, 1) and (3, 1). Anything falling outside the buffer is
//! clipped.

use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::color::Color;

/// The shapes that are previewed while dragging and committed on release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Line,
    Rectangle,
    Circle,
}

/// Color and line width used for every painting operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: u32,
}

impl StrokeStyle {
    pub fn new(color: Color, width: u32) -> Self {
        Self {
            color,
            width: width.max(1),
        }
    }

    fn radius(&self) -> f32 {
        self.width.max(1) as f32 / 2.0
    }
}

pub fn distance(a: Pos2, b: Pos2) -> f32 {
    a.distance(b)
}

/// Draws `kind` between the gesture anchor and the current pointer position.
pub fn rasterize(buffer: &mut PixelBuffer, kind: ShapeKind, anchor: Pos2, current: Pos2, style: &StrokeStyle) {
    match kind {
        ShapeKind::Line => draw_line(buffer, anchor, current, style),
        ShapeKind::Rectangle => draw_rectangle(buffer, anchor, current, style),
        ShapeKind::Circle => draw_circle(buffer, anchor, current, style),
    }
}

/// Round-capped line segment.
pub fn draw_line(buffer: &mut PixelBuffer, from: Pos2, to: Pos2, style: &StrokeStyle) {
    let brush = Brush::new(style);

    // Nothing beyond the brush radius can reach the buffer
    let margin = brush.reach as f32 + 1.0;
    let min = Pos2::new(-margin, -margin);
    let max = Pos2::new(buffer.width() as f32 + margin, buffer.height() as f32 + margin);
    let Some((from, to)) = clip_segment(from, to, min, max) else {
        return;
    };

    let (mut x, mut y) = (from.x.round() as i64, from.y.round() as i64);
    let (x1, y1) = (to.x.round() as i64, to.y.round() as i64);

    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        brush.stamp(buffer, x, y);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Outline of the axis-aligned rectangle spanned by two opposite corners.
pub fn draw_rectangle(buffer: &mut PixelBuffer, a: Pos2, b: Pos2, style: &StrokeStyle) {
    if !(a.is_finite() && b.is_finite()) {
        return;
    }

    let min = Pos2::new(a.x.min(b.x), a.y.min(b.y));
    let max = Pos2::new(a.x.max(b.x), a.y.max(b.y));

    let top_right = Pos2::new(max.x, min.y);
    let bottom_left = Pos2::new(min.x, max.y);

    draw_line(buffer, min, top_right, style);
    draw_line(buffer, top_right, max, style);
    draw_line(buffer, max, bottom_left, style);
    draw_line(buffer, bottom_left, min, style);
}

/// Outline of the circle centred on `center` passing through `edge`.
pub fn draw_circle(buffer: &mut PixelBuffer, center: Pos2, edge: Pos2, style: &StrokeStyle) {
    let radius = distance(center, edge);
    if !(center.is_finite() && radius.is_finite()) {
        return;
    }

    let cx = center.x.round();
    let cy = center.y.round();
    let half = style.radius();

    if radius <= half {
        Brush::new(style).stamp(buffer, cx as i64, cy as i64);
        return;
    }

    // Scan only the part of the bounding box that lies on the buffer
    let reach = radius + half;
    let x0 = (cx - reach).floor().max(0.0) as i64;
    let y0 = (cy - reach).floor().max(0.0) as i64;
    let x1 = (cx + reach).ceil().min(buffer.width() as f32 - 1.0) as i64;
    let y1 = (cy + reach).ceil().min(buffer.height() as f32 - 1.0) as i64;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let d = (x as f32 - cx).hypot(y as f32 - cy);
            if (d - radius).abs() <= half {
                buffer.put(x, y, style.color);
            }
        }
    }
}

/// Precomputed pixel offsets of a round brush tip.
pub(crate) struct Brush {
    offsets: Vec<(i64, i64)>,
    reach: i64,
    color: Color,
}

impl Brush {
    pub(crate) fn new(style: &StrokeStyle) -> Self {
        let r = style.radius();
        let reach = r.floor() as i64;
        let r2 = r * r;

        let mut offsets = Vec::new();
        for dy in -reach..=reach {
            for dx in -reach..=reach {
                if ((dx * dx + dy * dy) as f32) <= r2 {
                    offsets.push((dx, dy));
                }
            }
        }

        Self {
            offsets,
            reach,
            color: style.color,
        }
    }

    pub(crate) fn stamp(&self, buffer: &mut PixelBuffer, x: i64, y: i64) {
        for &(dx, dy) in &self.offsets {
            buffer.put(x.saturating_add(dx), y.saturating_add(dy), self.color);
        }
    }
}

/// Liang–Barsky clip of a segment against an axis-aligned box.
fn clip_segment(a: Pos2, b: Pos2, min: Pos2, max: Pos2) -> Option<(Pos2, Pos2)> {
    if !(a.x.is_finite() && a.y.is_finite() && b.x.is_finite() && b.y.is_finite()) {
        return None;
    }

    let d = b - a;
    let mut t0 = 0.0_f32;
    let mut t1 = 1.0_f32;

    for (p, q) in [
        (-d.x, a.x - min.x),
        (d.x, max.x - a.x),
        (-d.y, a.y - min.y),
        (d.y, max.y - a.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            t0 = t0.max(t);
        } else {
            t1 = t1.min(t);
        }
        if t0 > t1 {
            return None;
        }
    }

    Some((a + d * t0, a + d * t1))
}
