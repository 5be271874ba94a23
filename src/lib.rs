#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod diagram;
pub mod editor;
pub mod panels;
pub mod prompt;
pub mod shape;
pub mod store;

pub use app::FlowApp;
pub use diagram::{DEFAULT_DIAGRAM_NAME, Diagram};
pub use editor::DiagramEditor;
pub use prompt::{PromptResponse, TextPrompt};
pub use shape::{Shape, ShapeId, ShapeKind};
pub use store::{DiagramStore, FileStore, StoreError, StoreResult};
