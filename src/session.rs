//! The drawing session ties the buffer, the tools and the history together.
//!
//! Hosts feed it pointer events in buffer pixel space. Every completed gesture
//! and every fill is committed to the history, even when it left the pixels as
//! they were, so each undo steps back exactly one user action.

use egui::Pos2;
use image::RgbaImage;

use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::config::{BrushSettings, CanvasConfig};
use crate::error::Result;
use crate::export;
use crate::fill;
use crate::history::{HISTORY_CAPACITY, HistoryStore};
use crate::settings::ToolSettings;
use crate::shapes::{self, StrokeStyle};
use crate::state::SessionState;
use crate::stroke::StrokeTracker;
use crate::tools::{Tool, ToolBehavior};

#[derive(Debug)]
pub struct DrawingSession {
    buffer: PixelBuffer,
    background: Color,
    history: HistoryStore,
    state: SessionState,
    tool: Tool,
    color: Color,
    stroke_width: u32,
    brush: BrushSettings,
}

impl DrawingSession {
    /// Creates a session with a `width` x `height` canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self> {
        Self::with_history_capacity(width, height, background, HISTORY_CAPACITY)
    }

    pub fn from_config(config: &CanvasConfig) -> Result<Self> {
        Self::new(config.width, config.height, config.background)
    }

    pub fn with_history_capacity(width: u32, height: u32, background: Color, capacity: usize) -> Result<Self> {
        let buffer = PixelBuffer::new(width, height, background)?;
        let brush = BrushSettings::default();

        let mut history = HistoryStore::new(capacity);
        // Base entry: undo can always return to the blank canvas
        history.commit(&buffer);

        log::info!("Started {width}x{height} drawing session");

        Ok(Self {
            buffer,
            background,
            history,
            state: SessionState::Idle,
            tool: Tool::default(),
            color: brush.default_color,
            stroke_width: brush.default_size,
            brush,
        })
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Whether a gesture is in progress.
    pub fn is_drawing(&self) -> bool {
        !self.state.is_idle()
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Switches tool. A gesture still in progress is finished first.
    pub fn set_tool(&mut self, tool: Tool) {
        if tool == self.tool {
            return;
        }
        self.finish_gesture();
        log::info!("Tool changed: {} -> {}", self.tool.name(), tool.name());
        self.tool = tool;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Parses and applies a hex color. Malformed input leaves the color unchanged.
    pub fn set_color_hex(&mut self, hex: &str) -> Result<()> {
        match Color::from_hex(hex) {
            Ok(color) => {
                self.color = color;
                Ok(())
            }
            Err(err) => {
                log::warn!("Ignoring color: {err}");
                Err(err)
            }
        }
    }

    pub fn stroke_width(&self) -> u32 {
        self.stroke_width
    }

    /// Sets the line width shared by every tool, clamped to 1..=50.
    pub fn set_stroke_width(&mut self, width: u32) {
        self.stroke_width = self.brush.clamp_size(width);
    }

    pub fn settings(&self) -> ToolSettings {
        ToolSettings {
            tool: self.tool,
            color: self.color,
            stroke_width: self.stroke_width,
        }
    }

    pub fn apply_settings(&mut self, settings: &ToolSettings) {
        self.set_tool(settings.tool);
        self.set_color(settings.color);
        self.set_stroke_width(settings.stroke_width);
    }

    fn style(&self) -> StrokeStyle {
        StrokeStyle::new(self.color, self.stroke_width)
    }

    pub fn pointer_down(&mut self, pos: Pos2) {
        if !self.state.is_idle() {
            // Down without a matching up: close the old gesture first
            self.finish_gesture();
        }

        match self.tool.behavior() {
            ToolBehavior::Fill => {
                fill::flood_fill(&mut self.buffer, pos, self.color);
                self.commit();
            }
            ToolBehavior::Freehand(mode) => {
                let stroke = StrokeTracker::begin(&mut self.buffer, mode, pos, self.color, self.stroke_width);
                self.state = SessionState::ActiveStroke { tool: self.tool, stroke };
            }
            ToolBehavior::Shape(shape) => {
                self.state = SessionState::ActiveShapePreview {
                    tool: self.tool,
                    shape,
                    anchor: pos,
                    base: self.buffer.snapshot(),
                };
            }
        }
    }

    pub fn pointer_move(&mut self, pos: Pos2) {
        let style = self.style();
        match &mut self.state {
            SessionState::Idle => {}
            SessionState::ActiveStroke { stroke, .. } => stroke.extend(&mut self.buffer, pos),
            SessionState::ActiveShapePreview { shape, anchor, base, .. } => {
                // Redraw from the pointer-down state so earlier previews leave no trail
                if let Err(err) = self.buffer.restore(base) {
                    log::error!("Shape preview lost its base: {err}");
                    return;
                }
                shapes::rasterize(&mut self.buffer, *shape, *anchor, pos, &style);
            }
        }
    }

    pub fn pointer_up(&mut self, _pos: Pos2) {
        self.finish_gesture();
    }

    pub fn pointer_leave(&mut self, _pos: Pos2) {
        self.finish_gesture();
    }

    /// Ends the current gesture, keeping what is on the buffer.
    ///
    /// A shape keeps the outline from its last move; the release position is
    /// not drawn again.
    fn finish_gesture(&mut self) {
        match std::mem::take(&mut self.state) {
            SessionState::Idle => return,
            SessionState::ActiveStroke { tool, stroke } => {
                let stroke = stroke.finish();
                log::debug!("{} stroke finished with {} points", tool.name(), stroke.points().len());
            }
            SessionState::ActiveShapePreview { tool, .. } => {
                log::debug!("{} shape finished", tool.name());
            }
        }
        self.commit();
    }

    fn commit(&mut self) {
        self.history.commit(&self.buffer);
        log::debug!("Committed history entry {} of {}", self.history.cursor() + 1, self.history.len());
    }

    /// Reverts the last committed action. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.finish_gesture();

        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        match self.buffer.restore(snapshot) {
            Ok(()) => {
                log::info!("Undo, {} entries left", self.history.cursor());
                true
            }
            Err(err) => {
                log::error!("Undo failed: {err}");
                false
            }
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Resets the canvas to the background color and forgets the history.
    pub fn clear(&mut self) {
        self.state = SessionState::Idle;
        self.buffer.fill(self.background);
        self.history.clear();
        self.history.commit(&self.buffer);
        log::info!("Canvas cleared");
    }

    pub fn export_image(&self) -> Result<RgbaImage> {
        export::to_rgba_image(&self.buffer)
    }

    pub fn export_png(&self) -> Result<Vec<u8>> {
        export::encode_png(&self.buffer)
    }
}
