use eframe::egui;

use crate::editor::DiagramEditor;
use crate::shape::ShapeKind;

/// Opaque color strings offered by the fill/stroke swatches; these are the
/// values stored on the shape.
const PALETTE: &[&str] = &[
    "#ffffff", "#f94144", "#f8961e", "#f9c74f", "#90be6d", "#43aa8b", "#577590", "#222222",
];

const ALL_KINDS: [ShapeKind; 4] = [
    ShapeKind::Process,
    ShapeKind::Decision,
    ShapeKind::Terminator,
    ShapeKind::Line,
];

pub struct ToolsResponse {
    /// The user asked to edit the selected shape's text; the app opens the
    /// prompt window.
    pub edit_text_clicked: bool,
}

/// Shape-kind picker and style controls for the selected shape.
pub fn show(
    ui: &mut egui::Ui,
    editor: &mut DiagramEditor,
    active_kind: &mut ShapeKind,
) -> ToolsResponse {
    let mut response = ToolsResponse {
        edit_text_clicked: false,
    };

    ui.heading("Shapes");
    for kind in ALL_KINDS {
        if ui.selectable_label(*active_kind == kind, kind.label()).clicked() {
            *active_kind = kind;
        }
    }

    ui.separator();
    ui.heading("Style");
    let has_selection = editor.selected_shape().is_some();
    ui.add_enabled_ui(has_selection, |ui| {
        ui.label("Fill");
        if let Some(color) = swatch_row(ui, "fill_swatches") {
            editor.set_fill_color(color);
        }
        ui.label("Stroke");
        if let Some(color) = swatch_row(ui, "stroke_swatches") {
            editor.set_stroke_color(color);
        }

        let can_edit_text = editor
            .selected_shape()
            .is_some_and(|shape| shape.kind.supports_text());
        if ui
            .add_enabled(can_edit_text, egui::Button::new("Edit text…"))
            .clicked()
        {
            response.edit_text_clicked = true;
        }
    });

    response
}

fn swatch_row(ui: &mut egui::Ui, id_salt: &str) -> Option<&'static str> {
    let mut picked = None;
    ui.push_id(id_salt, |ui| {
        ui.horizontal_wrapped(|ui| {
            for &hex in PALETTE {
                let color = super::parse_color(hex).unwrap_or(egui::Color32::WHITE);
                let swatch = egui::Button::new("")
                    .fill(color)
                    .min_size(egui::vec2(18.0, 18.0));
                if ui.add(swatch).on_hover_text(hex).clicked() {
                    picked = Some(hex);
                }
            }
        });
    });
    picked
}
