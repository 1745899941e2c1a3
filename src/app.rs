use egui::{ColorImage, TextureHandle, TextureOptions};

use crate::config::{CanvasConfig, DEFAULT_EXPORT_NAME};
use crate::error::Result;
use crate::export;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::session::DrawingSession;
use crate::settings::{SETTINGS_KEY, ToolSettings};

/// The eframe host: panels around a canvas that forwards pointer input to the session.
pub struct DoodleApp {
    session: DrawingSession,
    input: InputHandler,
    texture: Option<TextureHandle>,
    // Set whenever the buffer may differ from the uploaded texture
    texture_dirty: bool,
    export_name: String,
    status: Option<String>,
}

impl DoodleApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self> {
        let mut app = Self::with_config(&CanvasConfig::default())?;

        if let Some(json) = cc.storage.and_then(|storage| storage.get_string(SETTINGS_KEY)) {
            match ToolSettings::from_json(&json) {
                Ok(settings) => app.session.apply_settings(&settings),
                Err(err) => log::warn!("Discarding stored tool settings: {err}"),
            }
        }

        Ok(app)
    }

    pub fn with_config(config: &CanvasConfig) -> Result<Self> {
        Ok(Self {
            session: DrawingSession::from_config(config)?,
            input: InputHandler::new(),
            texture: None,
            texture_dirty: true,
            export_name: DEFAULT_EXPORT_NAME.to_owned(),
            status: None,
        })
    }

    pub fn session(&self) -> &DrawingSession {
        &self.session
    }

    /// Mutable session access; the canvas texture is refreshed on the next frame.
    pub fn session_mut(&mut self) -> &mut DrawingSession {
        self.texture_dirty = true;
        &mut self.session
    }

    pub fn export_name_mut(&mut self) -> &mut String {
        &mut self.export_name
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn undo(&mut self) {
        if self.session_mut().undo() {
            self.status = Some("Action undone".to_owned());
        }
    }

    pub fn clear(&mut self) {
        self.session_mut().clear();
        self.status = Some("Canvas cleared".to_owned());
    }

    /// Encodes the canvas as PNG and saves it to the working directory.
    pub fn export(&mut self) {
        let file_name = export::export_file_name(&self.export_name);
        let bytes = match self.session.export_png() {
            Ok(bytes) => bytes,
            Err(err) => {
                log::error!("Export failed: {err}");
                self.status = Some(format!("Export failed: {err}"));
                return;
            }
        };

        #[cfg(not(target_arch = "wasm32"))]
        {
            match std::fs::write(&file_name, &bytes) {
                Ok(()) => {
                    log::info!("Saved {file_name}");
                    self.status = Some(format!("Saved {file_name}"));
                }
                Err(err) => {
                    log::error!("Failed to write {file_name}: {err}");
                    self.status = Some(format!("Could not save {file_name}"));
                }
            }
        }

        #[cfg(target_arch = "wasm32")]
        {
            log::warn!("Saving files is not supported on the web build ({} bytes encoded)", bytes.len());
            self.status = Some(format!("Cannot save {file_name} from the browser build"));
        }
    }

    /// Turns this frame's pointer input over `canvas_rect` into session events.
    pub(crate) fn handle_canvas_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        let buffer_size = self.session.buffer().size();
        let events = self.input.process_input(ctx, canvas_rect, buffer_size);
        if events.is_empty() {
            return;
        }
        for event in &events {
            event.apply(&mut self.session);
        }
        self.texture_dirty = true;
    }

    /// Texture mirroring the pixel buffer, re-uploaded when it may be stale.
    pub(crate) fn canvas_texture(&mut self, ctx: &egui::Context) -> Option<egui::TextureId> {
        if self.texture_dirty || self.texture.is_none() {
            let buffer = self.session.buffer();
            let image = ColorImage::from_rgba_unmultiplied(buffer.size(), buffer.as_raw());
            if let Some(texture) = &mut self.texture {
                texture.set(image, TextureOptions::NEAREST);
            } else {
                self.texture = Some(ctx.load_texture("canvas", image, TextureOptions::NEAREST));
            }
            self.texture_dirty = false;
        }

        self.texture.as_ref().map(TextureHandle::id)
    }
}

impl eframe::App for DoodleApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match self.session.settings().to_json() {
            Ok(json) => storage.set_string(SETTINGS_KEY, json),
            Err(err) => log::error!("Failed to save tool settings: {err}"),
        }
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
