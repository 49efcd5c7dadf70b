use anyhow::Result;
use eframe::egui;
use log::info;

mod console;
mod particles;
mod router;
mod ui;

use ui::UniversApp;

fn main() -> Result<()> {
    env_logger::init();
    info!("Starting Univers.run");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Univers.run"),
        ..Default::default()
    };

    eframe::run_native(
        "Univers.run",
        options,
        Box::new(|cc| Ok(Box::new(UniversApp::new(cc)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run app: {e}"))?;

    Ok(())
}
