use anyhow::Result;
use eframe::egui;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use waterline::config::TrackerConfig;
use waterline::ui::WaterlineApp;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "waterline=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Waterline");

    let config = TrackerConfig::from_env()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([390.0, 844.0])
            .with_min_inner_size([320.0, 560.0])
            .with_title("Waterline"),
        ..Default::default()
    };

    eframe::run_native(
        "Waterline",
        options,
        Box::new(move |cc| Ok(Box::new(WaterlineApp::new(cc, config)?))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {}", e))
}
