//! PrivacyLens - Social App Privacy Dashboard
//!
//! A read-only desktop dashboard presenting pre-collected privacy metadata
//! about popular social apps, with educational flashcards and tips.

mod content;
mod data;
mod gui;

use anyhow::Context;
use eframe::egui;
use gui::PrivacyLensApp;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // RUST_LOG overrides the default filter.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("privacylens=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // A missing or corrupt dataset is fatal; there is no in-app recovery.
    let mut loader = data::DatasetLoader::new(data::DATASET_PATH);
    loader
        .load()
        .context("failed to load the app privacy dataset")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([1000.0, 640.0])
            .with_title("PrivacyLens"),
        ..Default::default()
    };

    eframe::run_native(
        "PrivacyLens",
        options,
        Box::new(move |cc| Ok(Box::new(PrivacyLensApp::new(cc, loader)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}
