// Hide console window in release builds (Windows GUI app)
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dashboard::{AppError, DashboardApp};

#[tokio::main]
async fn main() -> dashboard::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "dashboard=debug,info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting CityPulse officials dashboard");

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([1100.0, 700.0])
        .with_min_inner_size([800.0, 500.0])
        .with_title("CityPulse — Officials Dashboard");

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "CityPulse — Officials Dashboard",
        native_options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(cc)))),
    )
    .map_err(|e| AppError::State(format!("Failed to run application: {}", e)))?;

    Ok(())
}
