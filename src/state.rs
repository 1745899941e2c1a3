use egui::Pos2;

use crate::buffer::Snapshot;
use crate::shapes::ShapeKind;
use crate::stroke::StrokeTracker;
use crate::tools::Tool;

/// Where the session is within a gesture
#[derive(Debug, Default)]
pub enum SessionState {
    #[default]
    Idle,
    /// A brush or eraser stroke is being painted
    ActiveStroke { tool: Tool, stroke: StrokeTracker },
    /// A shape is being dragged out; `base` is the buffer as it was on pointer down
    ActiveShapePreview {
        tool: Tool,
        shape: ShapeKind,
        anchor: Pos2,
        base: Snapshot,
    },
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::ActiveStroke { .. } => "ActiveStroke",
            Self::ActiveShapePreview { .. } => "ActiveShapePreview",
        }
    }

    pub fn active_tool(&self) -> Option<Tool> {
        match self {
            Self::Idle => None,
            Self::ActiveStroke { tool, .. } | Self::ActiveShapePreview { tool, .. } => Some(*tool),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
