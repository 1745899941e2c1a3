use egui::{Color32, Rect, pos2, vec2};

use crate::DoodleApp;

pub fn central_panel(app: &mut DoodleApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let [width, height] = app.session().buffer().size();
        let buffer_size = vec2(width as f32, height as f32);

        // Shrink the canvas to fit, never enlarge it
        let available = ui.available_size() - vec2(0.0, 24.0);
        let scale = (available.x / buffer_size.x).min(available.y / buffer_size.y).clamp(0.05, 1.0);

        let (response, painter) = ui.allocate_painter(buffer_size * scale, egui::Sense::drag());
        let canvas_rect = response.rect;

        app.handle_canvas_input(ctx, canvas_rect);

        // Erased pixels are transparent; show them against white
        painter.rect_filled(canvas_rect, 0.0, Color32::WHITE);
        if let Some(texture) = app.canvas_texture(ctx) {
            painter.image(
                texture,
                canvas_rect,
                Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }

        ui.label("Click and drag to paint. Pick a tool, color and size on the left.");
    });
}
