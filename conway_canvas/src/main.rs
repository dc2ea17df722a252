// main.rs - Interactive Conway's Game of Life in an egui window

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use eframe::egui;
use tracing::info;

mod app;      // LifeApp state and actions
mod config;   // Command-line configuration
mod surface;  // egui Painter as a conway::Surface
mod ui;       // eframe::App implementation

use app::LifeApp;
use config::{Args, CanvasConfig};

fn main() -> Result<()> {
    init_tracing();

    let config = CanvasConfig::try_from(Args::parse()).context("invalid configuration")?;
    let app = LifeApp::new(config.clone()).context("failed to build the universe")?;
    info!(
        width = config.layout.width,
        height = config.layout.height,
        layout = ?config.initial,
        "starting canvas"
    );

    let layout = config.layout;
    let canvas = egui::Vec2::new(layout.pixel_width(), layout.pixel_height()) * config.zoom;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([canvas.x.max(640.0) + 40.0, canvas.y + 260.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|err| anyhow!("window closed with an error: {err}"))
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
