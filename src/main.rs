#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 720.0])
            .with_title("FlowSurfer"),
        ..Default::default()
    };
    eframe::run_native(
        "flowsurfer",
        native_options,
        Box::new(|cc| Ok(Box::new(flowsurfer::FlowApp::new(cc)))),
    )
}
