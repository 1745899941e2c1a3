use egui::{Color32, Sense, Stroke};

use crate::DoodleApp;
use crate::color::Color;
use crate::config::{self, BrushSettings};
use crate::tools::Tool;

pub fn tools_panel(app: &mut DoodleApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active_tool = app.session().tool();
            ui.horizontal_wrapped(|ui| {
                for tool in Tool::ALL {
                    if ui.selectable_label(active_tool == tool, tool.name()).clicked() {
                        log::info!("Tool selected from UI: {}", tool.name());
                        app.session_mut().set_tool(tool);
                    }
                }
            });
            ui.separator();

            ui.heading("Colors");
            let current = app.session().color();
            ui.horizontal_wrapped(|ui| {
                for color in config::palette() {
                    if swatch(ui, color, color == current).clicked() {
                        app.session_mut().set_color(color);
                    }
                }
            });
            ui.horizontal(|ui| {
                ui.label("Custom:");
                let mut picked: Color32 = current.into();
                if egui::color_picker::color_edit_button_srgba(ui, &mut picked, egui::color_picker::Alpha::Opaque)
                    .changed()
                {
                    app.session_mut().set_color(picked.into());
                }
            });
            ui.separator();

            ui.heading("Brush");
            let brush = BrushSettings::default();
            let mut width = app.session().stroke_width();
            if ui
                .add(egui::Slider::new(&mut width, brush.min_size..=brush.max_size).text("Size"))
                .changed()
            {
                app.session_mut().set_stroke_width(width);
            }
            ui.separator();

            ui.heading("Actions");
            ui.horizontal(|ui| {
                if ui.add_enabled(app.session().can_undo(), egui::Button::new("Undo")).clicked() {
                    app.undo();
                }
                if ui.button("Clear").clicked() {
                    app.clear();
                }
            });
            ui.horizontal(|ui| {
                ui.label("File:");
                ui.text_edit_singleline(app.export_name_mut());
            });
            if ui.button("Export PNG").clicked() {
                app.export();
            }
            if let Some(status) = app.status() {
                ui.label(status);
            }
            ui.separator();

            let history = app.session().history();
            ui.label(format!("History: {} / {}", history.len(), history.capacity()));
            ui.label(format!("State: {}", app.session().state().name()));
        });
}

fn swatch(ui: &mut egui::Ui, color: Color, selected: bool) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(22.0, 22.0), Sense::click());

    if ui.is_rect_visible(rect) {
        ui.painter().rect_filled(rect, 4.0, Color32::from(color));
        let outline = if selected {
            Stroke::new(2.0, Color32::from_rgb(33, 150, 243))
        } else {
            Stroke::new(1.0, Color32::from_gray(100))
        };
        ui.painter().rect_stroke(rect, 4.0, outline);
    }

    response.on_hover_text(color.to_hex())
}
