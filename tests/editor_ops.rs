use egui::{Pos2, Rect, Vec2};
use flowsurfer::diagram::{DEFAULT_DIAGRAM_NAME, Diagram};
use flowsurfer::editor::DiagramEditor;
use flowsurfer::shape::{Shape, ShapeId, ShapeKind};

fn test_shape(kind: ShapeKind) -> Shape {
    let rect = Rect::from_min_size(Pos2::new(10.0, 10.0), Vec2::new(120.0, 60.0));
    Shape::new(kind, rect)
}

// If a selection is present, it must resolve to exactly one diagram entry
// with the same id and fields.
fn assert_selection_consistent(editor: &DiagramEditor) {
    if let Some(id) = editor.selection() {
        let matching: Vec<_> = editor
            .diagram()
            .shapes()
            .iter()
            .filter(|s| s.id == id)
            .collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(editor.selected_shape(), Some(matching[0]));
    }
}

#[test]
fn starts_with_default_empty_diagram() {
    let editor = DiagramEditor::new();
    assert_eq!(editor.diagram().name, DEFAULT_DIAGRAM_NAME);
    assert!(editor.diagram().shapes().is_empty());
    assert!(editor.selection().is_none());
}

#[test]
fn fill_color_updates_selection_and_diagram_together() {
    // The scenario from the editor's contract: select a fresh process shape,
    // set its fill, and observe the same value through both views.
    let mut editor = DiagramEditor::new();
    let shape = test_shape(ShapeKind::Process);
    let id = shape.id;
    editor.insert_shape(shape);

    editor.set_fill_color("red");

    let selected = editor.selected_shape().unwrap();
    assert_eq!(selected.fill_color.as_deref(), Some("red"));
    assert_eq!(selected.id, id);
    assert_eq!(editor.diagram().shapes().len(), 1);
    assert_eq!(
        editor.diagram().shapes()[0].fill_color.as_deref(),
        Some("red")
    );
    assert_selection_consistent(&editor);
}

#[test]
fn stroke_color_updates_only_matched_entry() {
    let mut editor = DiagramEditor::new();
    let a = test_shape(ShapeKind::Process);
    let b = test_shape(ShapeKind::Decision);
    let c = test_shape(ShapeKind::Terminator);
    let (id_a, id_b, id_c) = (a.id, b.id, c.id);
    editor.insert_shape(a);
    editor.insert_shape(b);
    editor.insert_shape(c);

    editor.select(Some(id_b));
    editor.set_stroke_color("#577590");

    // Length and order preserved, neighbors untouched.
    let shapes = editor.diagram().shapes();
    assert_eq!(shapes.len(), 3);
    assert_eq!(shapes[0].id, id_a);
    assert_eq!(shapes[1].id, id_b);
    assert_eq!(shapes[2].id, id_c);
    assert!(shapes[0].stroke_color.is_none());
    assert_eq!(shapes[1].stroke_color.as_deref(), Some("#577590"));
    assert!(shapes[2].stroke_color.is_none());
    assert_selection_consistent(&editor);
}

#[test]
fn style_changes_without_selection_are_noops() {
    let mut editor = DiagramEditor::new();
    editor.insert_shape(test_shape(ShapeKind::Process));
    editor.select(None);
    let before = editor.diagram().clone();

    editor.set_fill_color("red");
    editor.set_stroke_color("blue");

    assert_eq!(editor.diagram(), &before);
    assert!(editor.selection().is_none());
}

#[test]
fn selecting_unknown_id_clears_selection() {
    let mut editor = DiagramEditor::new();
    editor.insert_shape(test_shape(ShapeKind::Process));
    assert!(editor.selection().is_some());

    editor.select(Some(ShapeId::new()));

    assert!(editor.selection().is_none());
    assert!(editor.selected_shape().is_none());
}

#[test]
fn selection_from_previous_document_does_not_survive_open() {
    let mut editor = DiagramEditor::new();
    let shape = test_shape(ShapeKind::Process);
    let stale_id = shape.id;
    editor.insert_shape(shape);

    editor.open_diagram(Diagram::new("Other"));
    assert!(editor.selection().is_none());

    // Re-selecting the id from the old document must not take either.
    editor.select(Some(stale_id));
    assert!(editor.selection().is_none());
    assert_selection_consistent(&editor);
}

#[test]
fn new_diagram_resets_document_and_selection() {
    let mut editor = DiagramEditor::new();
    editor.insert_shape(test_shape(ShapeKind::Decision));
    editor.set_fill_color("#f94144");

    editor.new_diagram();

    assert_eq!(editor.diagram().name, DEFAULT_DIAGRAM_NAME);
    assert!(editor.diagram().shapes().is_empty());
    assert!(editor.selection().is_none());
}

#[test]
fn open_diagram_replaces_document_wholesale() {
    let mut editor = DiagramEditor::new();
    editor.insert_shape(test_shape(ShapeKind::Process));

    let replacement = Diagram::from_parts(
        "Imported",
        vec![test_shape(ShapeKind::Line), test_shape(ShapeKind::Process)],
    );
    let expected = replacement.clone();
    editor.open_diagram(replacement);

    assert_eq!(editor.diagram(), &expected);
    assert!(editor.selection().is_none());
}

#[test]
fn insert_shape_appends_and_selects() {
    let mut editor = DiagramEditor::new();
    let first = test_shape(ShapeKind::Process);
    let second = test_shape(ShapeKind::Line);
    let second_id = second.id;
    editor.insert_shape(first);
    editor.insert_shape(second);

    assert_eq!(editor.diagram().shapes().len(), 2);
    assert_eq!(editor.selection(), Some(second_id));
    assert_selection_consistent(&editor);
}
