use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::shapes::{self, StrokeStyle};

/// What a freehand stroke writes into the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrokeMode {
    /// Paints the active color at full opacity
    Brush,
    /// Resets pixels to fully transparent, whatever was there before
    Eraser,
}

// Finished freehand stroke, kept for inspection once the gesture ends
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    mode: StrokeMode,
    points: Vec<Pos2>,
    color: Color,
    thickness: u32,
}

impl Stroke {
    pub fn mode(&self) -> StrokeMode {
        self.mode
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn thickness(&self) -> u32 {
        self.thickness
    }
}

/// Turns the pointer positions of one gesture into a continuous stroke.
///
/// Segments are painted straight onto the live buffer as they arrive, there is
/// no preview copy for freehand drawing.
#[derive(Debug, Clone)]
pub struct StrokeTracker {
    mode: StrokeMode,
    points: Vec<Pos2>,
    style: StrokeStyle,
}

impl StrokeTracker {
    /// Starts a stroke and paints a dot under the first point.
    pub fn begin(buffer: &mut PixelBuffer, mode: StrokeMode, start: Pos2, color: Color, width: u32) -> Self {
        let paint = match mode {
            StrokeMode::Brush => color.opaque(),
            StrokeMode::Eraser => Color::TRANSPARENT,
        };
        let tracker = Self {
            mode,
            points: vec![start],
            style: StrokeStyle::new(paint, width),
        };
        shapes::draw_line(buffer, start, start, &tracker.style);
        tracker
    }

    /// Paints a segment from the last recorded point to `point`.
    ///
    /// Non-finite points are dropped. After a non-finite start the stroke
    /// picks up again at the next usable point.
    pub fn extend(&mut self, buffer: &mut PixelBuffer, point: Pos2) {
        if !point.is_finite() {
            log::debug!("Dropping stroke point {point:?}");
            return;
        }
        let last = self.last_point();
        let from = if last.is_finite() { last } else { point };
        shapes::draw_line(buffer, from, point, &self.style);
        self.points.push(point);
    }

    pub fn last_point(&self) -> Pos2 {
        // `begin` always records the starting point
        self.points[self.points.len() - 1]
    }

    pub fn mode(&self) -> StrokeMode {
        self.mode
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn finish(self) -> Stroke {
        Stroke {
            mode: self.mode,
            points: self.points,
            color: self.style.color,
            thickness: self.style.width,
        }
    }
}
