use eframe::egui;

use crate::editor::DiagramEditor;
use crate::panels::{central_panel, tools_panel};
use crate::prompt::{PromptResponse, TextPrompt};
use crate::shape::ShapeKind;
use crate::store::FileStore;

/// Replays a response the UI has already collected, so the editor sees an
/// ordinary prompt collaborator.
struct QueuedPrompt(Option<String>);

impl TextPrompt for QueuedPrompt {
    fn prompt(&mut self, _message: &str, _default_value: &str) -> PromptResponse {
        match self.0.take() {
            Some(text) => PromptResponse::Value(text),
            None => PromptResponse::Cancelled,
        }
    }
}

pub struct FlowApp {
    editor: DiagramEditor,
    store: FileStore,
    /// Kind used for new insertions on the canvas. UI state only, not part
    /// of the diagram.
    active_kind: ShapeKind,
    /// In-progress value of the text-prompt window, when open.
    text_edit: Option<String>,
    /// In-progress name in the save window, when open.
    save_name: Option<String>,
    status: Option<String>,
}

impl FlowApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            editor: DiagramEditor::new(),
            store: FileStore::new("diagrams"),
            active_kind: ShapeKind::Process,
            text_edit: None,
            save_name: None,
            status: None,
        }
    }

    fn menu_bar(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("New").clicked() {
                    self.editor.new_diagram();
                    ui.close_menu();
                }
                ui.menu_button("Open", |ui| match self.store.list() {
                    Ok(names) if !names.is_empty() => {
                        for name in names {
                            if ui.button(&name).clicked() {
                                self.open_by_name(&name);
                                ui.close_menu();
                            }
                        }
                    }
                    Ok(_) => {
                        ui.label("No saved diagrams");
                    }
                    Err(err) => {
                        ui.label(format!("Store unavailable: {err}"));
                    }
                });
                if ui.button("Save…").clicked() {
                    self.save_name = Some(self.editor.diagram().name.clone());
                    ui.close_menu();
                }
            });
        });
    }

    fn open_by_name(&mut self, name: &str) {
        match self.store.open(name) {
            Ok(diagram) => {
                self.editor.open_diagram(diagram);
                self.status = Some(format!("Opened '{name}'"));
            }
            Err(err) => {
                log::error!("failed to open diagram '{name}': {err}");
                self.status = Some(format!("Failed to open '{name}': {err}"));
            }
        }
    }

    fn save_window(&mut self, ctx: &egui::Context) {
        let Some(mut name) = self.save_name.take() else {
            return;
        };
        let mut keep = true;
        let mut submit = false;
        egui::Window::new("Save Diagram")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Name:");
                ui.text_edit_singleline(&mut name);
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        submit = true;
                    }
                    if ui.button("Cancel").clicked() {
                        keep = false;
                    }
                });
            });
        if submit {
            match self.editor.save_diagram(&name, &self.store) {
                Ok(()) => {
                    log::info!("saved diagram '{name}'");
                    self.status = Some(format!("Saved '{name}'"));
                }
                Err(err) => {
                    log::error!("failed to save diagram '{name}': {err}");
                    self.status = Some(format!("Save failed: {err}"));
                }
            }
        } else if keep {
            self.save_name = Some(name);
        }
    }

    fn text_prompt_window(&mut self, ctx: &egui::Context) {
        let Some(mut value) = self.text_edit.take() else {
            return;
        };
        let mut keep = true;
        let mut submit = false;
        egui::Window::new("Edit text")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.text_edit_singleline(&mut value);
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        submit = true;
                    }
                    if ui.button("Cancel").clicked() {
                        keep = false;
                    }
                });
            });
        if submit {
            self.editor.edit_text(&mut QueuedPrompt(Some(value)));
        } else if keep {
            self.text_edit = Some(value);
        }
    }
}

impl eframe::App for FlowApp {
    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| self.menu_bar(ui));

        egui::SidePanel::left("tools_panel")
            .resizable(true)
            .default_width(160.0)
            .show(ctx, |ui| {
                let response = tools_panel::show(ui, &mut self.editor, &mut self.active_kind);
                if response.edit_text_clicked {
                    // Seed the prompt with the shape's current text.
                    let seed = self
                        .editor
                        .selected_shape()
                        .and_then(|shape| shape.text.clone())
                        .unwrap_or_default();
                    self.text_edit = Some(seed);
                }
            });

        if let Some(status) = self.status.clone() {
            egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
                ui.label(status);
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            central_panel::show(ui, &mut self.editor, self.active_kind);
        });

        self.save_window(ctx);
        self.text_prompt_window(ctx);
    }
}
