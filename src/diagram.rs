use serde::{Deserialize, Serialize};

use crate::shape::{Shape, ShapeId};

/// Display name given to a freshly created document.
pub const DEFAULT_DIAGRAM_NAME: &str = "Untitled Diagram";

/// The document under edit: a display name and the ordered shape sequence.
///
/// Sequence order is draw order (z-order) and must survive any mutation that
/// does not explicitly reorder. Shape ids are unique within the sequence;
/// uniqueness is maintained by inserting freshly constructed shapes and
/// trusted as-is for diagrams handed in from outside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    pub name: String,
    shapes: Vec<Shape>,
}

impl Diagram {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shapes: Vec::new(),
        }
    }

    /// Assemble a diagram from a name and an already-built shape sequence,
    /// e.g. for a store handing back its persisted representation.
    pub fn from_parts(name: impl Into<String>, shapes: Vec<Shape>) -> Self {
        Self {
            name: name.into(),
            shapes,
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn find_shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.find_shape(id).is_some()
    }

    pub(crate) fn find_shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id == id)
    }
}

impl Default for Diagram {
    fn default() -> Self {
        Self::new(DEFAULT_DIAGRAM_NAME)
    }
}
