use crate::diagram::Diagram;
use crate::prompt::{PromptResponse, TextPrompt};
use crate::shape::{Shape, ShapeId};
use crate::store::{DiagramStore, StoreResult};

/// Owns the current diagram and the selection; every mutation of either goes
/// through these methods.
///
/// The selection is held as an id and resolved against the diagram on read.
/// That makes the consistency rule structural: either the id names an entry
/// in the current shape sequence and that entry *is* the selected data, or
/// the selection is cleared. It can never dangle or drift out of sync with
/// the document.
#[derive(Debug, Default)]
pub struct DiagramEditor {
    diagram: Diagram,
    selection: Option<ShapeId>,
}

impl DiagramEditor {
    /// Start with an empty, default-named diagram and no selection.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    pub fn selection(&self) -> Option<ShapeId> {
        self.selection
    }

    /// The currently selected shape, if any.
    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selection.and_then(|id| self.diagram.find_shape(id))
    }

    /// Select the shape with the given id, or clear the selection with
    /// `None`. An id that is not in the current diagram clears the selection
    /// rather than leaving it dangling.
    pub fn select(&mut self, id: Option<ShapeId>) {
        self.selection = match id {
            Some(id) if self.diagram.contains(id) => Some(id),
            Some(id) => {
                log::warn!("ignoring selection of unknown shape {id}");
                None
            }
            None => None,
        };
    }

    /// Append a shape to the diagram and select it.
    pub fn insert_shape(&mut self, shape: Shape) {
        let id = shape.id;
        self.diagram.add_shape(shape);
        self.selection = Some(id);
    }

    /// Set the fill color of the selected shape; a no-op without a
    /// selection.
    pub fn set_fill_color(&mut self, color: &str) {
        self.update_selected(|shape| shape.fill_color = Some(color.to_owned()));
    }

    /// Set the stroke color of the selected shape; a no-op without a
    /// selection.
    pub fn set_stroke_color(&mut self, color: &str) {
        self.update_selected(|shape| shape.stroke_color = Some(color.to_owned()));
    }

    /// Ask the user for a new label for the selected shape.
    ///
    /// A no-op when nothing is selected or the selected kind does not carry
    /// text. A cancelled prompt abandons the edit with no state change; an
    /// empty submission is a valid new value and is applied.
    pub fn edit_text(&mut self, prompt: &mut dyn TextPrompt) {
        let (kind, seed) = match self.selected_shape() {
            Some(shape) => (shape.kind, shape.text.clone().unwrap_or_default()),
            None => {
                log::debug!("edit_text with no selection");
                return;
            }
        };
        if !kind.supports_text() {
            log::debug!("edit_text on {kind:?} shape ignored");
            return;
        }
        match prompt.prompt("Edit text:", &seed) {
            PromptResponse::Value(text) => {
                self.update_selected(|shape| shape.text = Some(text));
            }
            PromptResponse::Cancelled => {}
        }
    }

    /// Replace the document with an empty, default-named diagram and clear
    /// the selection.
    pub fn new_diagram(&mut self) {
        self.diagram = Diagram::default();
        self.selection = None;
    }

    /// Replace the document wholesale and clear the selection. The incoming
    /// shapes are trusted as-is; id uniqueness is the supplier's job.
    pub fn open_diagram(&mut self, diagram: Diagram) {
        self.diagram = diagram;
        self.selection = None;
    }

    /// Persist the current diagram under the given name.
    ///
    /// The store's returned value becomes the current diagram on success
    /// (the store is the source of truth for the persisted representation).
    /// On failure the current state is left exactly as it was and the error
    /// propagates to the caller. The selection survives a save only if the
    /// returned diagram still contains the selected id.
    pub fn save_diagram(&mut self, name: &str, store: &dyn DiagramStore) -> StoreResult<()> {
        let mut candidate = self.diagram.clone();
        candidate.name = name.to_owned();
        let saved = store.create(candidate)?;
        self.diagram = saved;
        if let Some(id) = self.selection {
            if !self.diagram.contains(id) {
                log::debug!("selected shape {id} not in saved diagram, clearing selection");
                self.selection = None;
            }
        }
        Ok(())
    }

    // Rewrites the selected entry in place: position in the sequence and
    // every other entry stay untouched.
    fn update_selected(&mut self, update: impl FnOnce(&mut Shape)) {
        match self.selection.and_then(|id| self.diagram.find_shape_mut(id)) {
            Some(shape) => update(shape),
            None => log::debug!("shape mutation with no selection"),
        }
    }
}
