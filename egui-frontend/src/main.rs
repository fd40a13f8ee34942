use eframe::egui;
use log::{error, info};

mod ui;

use ui::TipTimeApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting Tip Time egui application");

    // Create window options sized for a single-column form
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 640.0])
            .with_min_inner_size([360.0, 560.0])
            .with_title("Tip Time")
            .with_resizable(true),
        ..Default::default()
    };

    // Run the application
    info!("Launching egui window");
    eframe::run_native(
        "Tip Time",
        options,
        Box::new(|cc| match TipTimeApp::new(cc) {
            Ok(app) => {
                info!("Successfully initialized Tip Time app");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {}", e);
                Err(format!("Failed to initialize app: {}", e).into())
            }
        }),
    )
}
