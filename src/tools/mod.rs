use serde::{Deserialize, Serialize};

use crate::shapes::ShapeKind;
use crate::stroke::StrokeMode;

/// The drawing tools offered on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Brush,
    Eraser,
    Fill,
    Rectangle,
    Circle,
    Line,
}

/// How a tool reacts to a pointer gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolBehavior {
    /// Paints incrementally while the pointer moves
    Freehand(StrokeMode),
    /// Redraws a shape from a clean copy on every move
    Shape(ShapeKind),
    /// Acts once on pointer down
    Fill,
}

impl Tool {
    pub const ALL: [Tool; 6] = [
        Tool::Brush,
        Tool::Eraser,
        Tool::Fill,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Line,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Tool::Brush => "Brush",
            Tool::Eraser => "Eraser",
            Tool::Fill => "Fill",
            Tool::Rectangle => "Rectangle",
            Tool::Circle => "Circle",
            Tool::Line => "Line",
        }
    }

    pub fn behavior(&self) -> ToolBehavior {
        match self {
            Tool::Brush => ToolBehavior::Freehand(StrokeMode::Brush),
            Tool::Eraser => ToolBehavior::Freehand(StrokeMode::Eraser),
            Tool::Fill => ToolBehavior::Fill,
            Tool::Rectangle => ToolBehavior::Shape(ShapeKind::Rectangle),
            Tool::Circle => ToolBehavior::Shape(ShapeKind::Circle),
            Tool::Line => ToolBehavior::Shape(ShapeKind::Line),
        }
    }
}
