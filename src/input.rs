use egui::{Context, Pos2, Rect};

use crate::session::DrawingSession;

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position in buffer pixel coordinates
    pub position: Pos2,
    /// Whether the pointer was over the displayed canvas
    pub is_in_canvas: bool,
}

/// Pointer events the drawing session understands
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { location: InputLocation },
    PointerMove { location: InputLocation },
    PointerUp { location: InputLocation },
    /// Pointer left the canvas (or the window) while drawing
    PointerLeave { last_known_location: InputLocation },
}

impl InputEvent {
    pub fn location(&self) -> InputLocation {
        match self {
            InputEvent::PointerDown { location }
            | InputEvent::PointerMove { location }
            | InputEvent::PointerUp { location } => *location,
            InputEvent::PointerLeave { last_known_location } => *last_known_location,
        }
    }

    /// Feeds the event to `session`.
    pub fn apply(&self, session: &mut DrawingSession) {
        let pos = self.location().position;
        match self {
            InputEvent::PointerDown { .. } => session.pointer_down(pos),
            InputEvent::PointerMove { .. } => session.pointer_move(pos),
            InputEvent::PointerUp { .. } => session.pointer_up(pos),
            InputEvent::PointerLeave { .. } => session.pointer_leave(pos),
        }
    }
}

/// Maps a screen position over `canvas_rect` to buffer pixel coordinates.
///
/// The canvas may be displayed scaled, so the offset from the rect's corner is
/// stretched by the ratio between buffer size and displayed size.
pub fn canvas_coordinates(screen_pos: Pos2, canvas_rect: Rect, buffer_size: [usize; 2]) -> Pos2 {
    let offset = screen_pos - canvas_rect.min;
    if canvas_rect.width() <= 0.0 || canvas_rect.height() <= 0.0 {
        return offset.to_pos2();
    }
    let scale_x = buffer_size[0] as f32 / canvas_rect.width();
    let scale_y = buffer_size[1] as f32 / canvas_rect.height();
    Pos2::new(offset.x * scale_x, offset.y * scale_y)
}

/// Inclusive bounds check in buffer space.
pub fn is_point_in_canvas(pos: Pos2, buffer_size: [usize; 2]) -> bool {
    let [width, height] = buffer_size;
    pos.x >= 0.0 && pos.x <= width as f32 && pos.y >= 0.0 && pos.y <= height as f32
}

/// Handles converting raw egui input into our domain-specific InputEvents
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    drawing: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    fn make_location(pos: Pos2, canvas_rect: Rect, buffer_size: [usize; 2]) -> InputLocation {
        let position = canvas_coordinates(pos, canvas_rect, buffer_size);
        InputLocation {
            position,
            is_in_canvas: is_point_in_canvas(position, buffer_size),
        }
    }

    /// Reads this frame's pointer state and produces canvas events.
    ///
    /// A gesture starts with a primary press over the canvas and ends on
    /// release, or as soon as the pointer leaves the canvas.
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect, buffer_size: [usize; 2]) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let Some(pos) = input.pointer.latest_pos() else {
                // Pointer left the window
                if self.drawing {
                    if let Some(last) = self.last_pointer_pos {
                        events.push(InputEvent::PointerLeave {
                            last_known_location: Self::make_location(last, canvas_rect, buffer_size),
                        });
                    }
                    self.drawing = false;
                }
                self.last_pointer_pos = None;
                return;
            };

            let location = Self::make_location(pos, canvas_rect, buffer_size);

            if input.pointer.primary_pressed() && location.is_in_canvas {
                events.push(InputEvent::PointerDown { location });
                self.drawing = true;
            } else if self.drawing && Some(pos) != self.last_pointer_pos {
                if location.is_in_canvas {
                    events.push(InputEvent::PointerMove { location });
                } else {
                    events.push(InputEvent::PointerLeave {
                        last_known_location: location,
                    });
                    self.drawing = false;
                }
            }

            if self.drawing && input.pointer.primary_released() {
                events.push(InputEvent::PointerUp { location });
                self.drawing = false;
            }

            self.last_pointer_pos = Some(pos);
        });

        events
    }
}
