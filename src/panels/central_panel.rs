use eframe::egui::{self, Align2, Color32, FontId, Rect, Stroke, Vec2};

use crate::editor::DiagramEditor;
use crate::shape::{Shape, ShapeKind};

const DEFAULT_FILL: Color32 = Color32::from_rgb(0xe8, 0xe8, 0xe8);
const DEFAULT_STROKE: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);
const NEW_SHAPE_SIZE: Vec2 = egui::vec2(140.0, 70.0);

/// Canvas: draws the current diagram and turns clicks into selection or
/// insertion intents.
pub fn show(ui: &mut egui::Ui, editor: &mut DiagramEditor, active_kind: ShapeKind) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::click());

    for shape in editor.diagram().shapes() {
        draw_shape(&painter, shape, editor.selection() == Some(shape.id));
    }

    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            // Topmost shape under the cursor wins; a click on empty canvas
            // inserts a new shape of the active kind.
            let hit = editor
                .diagram()
                .shapes()
                .iter()
                .rev()
                .find(|shape| shape.rect.contains(pos))
                .map(|shape| shape.id);
            match hit {
                Some(id) => editor.select(Some(id)),
                None => {
                    let rect = Rect::from_center_size(pos, NEW_SHAPE_SIZE);
                    editor.insert_shape(Shape::new(active_kind, rect));
                }
            }
        }
    }
}

fn draw_shape(painter: &egui::Painter, shape: &Shape, selected: bool) {
    let fill = color_or(shape.fill_color.as_deref(), DEFAULT_FILL);
    let stroke = Stroke::new(2.0, color_or(shape.stroke_color.as_deref(), DEFAULT_STROKE));
    let rect = shape.rect;

    match shape.kind {
        ShapeKind::Process => {
            painter.rect(rect, 2.0, fill, stroke);
        }
        ShapeKind::Terminator => {
            painter.rect(rect, rect.height() * 0.5, fill, stroke);
        }
        ShapeKind::Decision => {
            let points = vec![
                rect.center_top(),
                rect.right_center(),
                rect.center_bottom(),
                rect.left_center(),
            ];
            painter.add(egui::Shape::convex_polygon(points, fill, stroke));
        }
        ShapeKind::Line => {
            painter.line_segment([rect.left_top(), rect.right_bottom()], stroke);
        }
    }

    if let Some(text) = &shape.text {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(14.0),
            stroke.color,
        );
    }

    if selected {
        painter.rect_stroke(rect.expand(4.0), 2.0, Stroke::new(1.0, Color32::LIGHT_BLUE));
    }
}

fn color_or(value: Option<&str>, default: Color32) -> Color32 {
    value.and_then(super::parse_color).unwrap_or(default)
}
