use egui::Rect;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable, unique identifier for a shape, assigned at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeId(Uuid);

impl ShapeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// The closed set of shape kinds the editor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Process,
    Decision,
    Terminator,
    Line,
}

impl ShapeKind {
    /// Lines are connectors and never carry a text label.
    pub fn supports_text(self) -> bool {
        !matches!(self, ShapeKind::Line)
    }

    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Process => "Process",
            ShapeKind::Decision => "Decision",
            ShapeKind::Terminator => "Terminator",
            ShapeKind::Line => "Line",
        }
    }
}

/// A single diagram element.
///
/// Colors are opaque strings; the canvas substitutes presentation defaults
/// when they are absent. Geometry (`rect`) is owned and interpreted by the
/// canvas as well — the editor never validates or transforms it. A `Line`
/// draws from one corner of its rect to the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: ShapeId,
    pub kind: ShapeKind,
    pub fill_color: Option<String>,
    pub stroke_color: Option<String>,
    pub text: Option<String>,
    pub rect: Rect,
}

impl Shape {
    /// Create a shape of the given kind with a fresh id, no colors and no
    /// text. Construction cannot fail.
    pub fn new(kind: ShapeKind, rect: Rect) -> Self {
        Self {
            id: ShapeId::new(),
            kind,
            fill_color: None,
            stroke_color: None,
            text: None,
            rect,
        }
    }
}
