#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod buffer;
pub mod color;
pub mod config;
pub mod error;
pub mod export;
pub mod fill;
pub mod history;
pub mod input;
pub mod panels;
pub mod session;
pub mod settings;
pub mod shapes;
pub mod state;
pub mod stroke;
pub mod tools;

pub use app::DoodleApp;
pub use buffer::{PixelBuffer, Snapshot};
pub use color::Color;
pub use error::{RasterError, Result};
pub use fill::flood_fill;
pub use history::HistoryStore;
pub use input::{InputEvent, InputLocation};
pub use session::DrawingSession;
pub use shapes::{ShapeKind, StrokeStyle};
pub use state::SessionState;
pub use stroke::{StrokeMode, StrokeTracker};
pub use tools::Tool;
