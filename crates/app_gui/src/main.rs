use anyhow::{Context, Result};
use directories_next::ProjectDirs;
use eframe::NativeOptions;
use screening_core::AppConfig;
use screening_core::config::CONFIG_FILE_NAME;
use std::path::PathBuf;
use tracing::Level;

mod app;

use app::UiApp;

fn main() {
    let (config, config_error) = match load_config() {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    let (level, level_error) = match config.tracing_level() {
        Ok(level) => (level, None),
        Err(e) => (Level::INFO, Some(e)),
    };
    tracing_subscriber::fmt().with_max_level(level).init();
    if let Some(e) = config_error {
        tracing::warn!("using default settings: {e:#}");
    }
    if let Some(e) = level_error {
        tracing::warn!("{e}, using info");
    }

    let options = NativeOptions::default();
    if let Err(e) = eframe::run_native(
        "Breast Cancer Detection System (demo)",
        options,
        Box::new(move |_cc| {
            Ok::<_, Box<dyn std::error::Error + Send + Sync>>(Box::new(UiApp::new(config)))
        }),
    ) {
        eprintln!("Application stopped with error: {e}");
    }
}

fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "screening-demo", "ScreeningDemo")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

fn load_config() -> Result<AppConfig> {
    match config_path() {
        Some(path) => AppConfig::load(&path)
            .with_context(|| format!("could not load {}", path.display())),
        None => Ok(AppConfig::default()),
    }
}
