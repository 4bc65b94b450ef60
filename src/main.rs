use eframe::egui;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

// Define application modules
mod app;
mod cli;
mod config;
mod ripple;
mod ui;

use app::RippleApp;
use config::Config;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match Config::load(Path::new("config.toml")) {
        Ok(config) => {
            info!("loaded config.toml");
            config
        }
        Err(e) => {
            warn!("{:#}; using default configuration", e);
            Config::default()
        }
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Ripple Diffusion View",
        native_options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            let mut style = (*cc.egui_ctx.style()).clone();
            style.text_styles.insert(
                egui::TextStyle::Monospace,
                egui::FontId::proportional(16.0),
            );
            cc.egui_ctx.set_style(style);
            Box::new(RippleApp::new(cc, config))
        }),
    )
}
