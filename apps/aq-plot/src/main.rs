#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;

use app::AquacarbApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_title("Aquacarb"),
        ..Default::default()
    };

    eframe::run_native(
        "Aquacarb",
        options,
        Box::new(|cc| Ok(Box::new(AquacarbApp::new(cc)))),
    )
}
