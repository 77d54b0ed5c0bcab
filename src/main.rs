//! Chartify Motion - Animated bar, line and pie charts
//!
//! Usage: `chartify_motion [config.json]`

use anyhow::{anyhow, Context};
use chartify_motion::cli::Cli;
use chartify_motion::config::AppConfig;
use chartify_motion::gui::ChartsApp;
use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let config = match cli.config {
        Some(path) => AppConfig::load(&path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::default(),
    };
    tracing::info!(?config, "starting");

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1450.0, 480.0])
            .with_min_inner_size([800.0, 420.0])
            .with_title("Chartify Motion"),
        ..Default::default()
    };

    eframe::run_native(
        "Chartify Motion",
        options,
        Box::new(move |cc| Ok(Box::new(ChartsApp::new(cc, config)))),
    )
    .map_err(|e| anyhow!("{e}"))
}
