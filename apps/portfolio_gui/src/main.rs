use std::sync::Arc;

mod controller;
mod settings;
mod ui;

use anyhow::{anyhow, Result};
use clap::Parser;
use eframe::egui;
use storage::{JsonFileStore, KeyValueStore, UnavailableStore};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use widget_core::{PageEnvironment, ScrollEvents};

use crate::{
    settings::{load_settings, CliArgs, Settings},
    ui::PortfolioApp,
};

fn open_local_storage(settings: &Settings) -> Arc<dyn KeyValueStore> {
    let opened = settings
        .resolve_data_dir()
        .and_then(|dir| JsonFileStore::open_in(&dir).map_err(anyhow::Error::from));
    match opened {
        Ok(store) => {
            info!(path = %store.path().display(), "using local storage file");
            Arc::new(store)
        }
        Err(err) => {
            warn!(error = %err, "local storage unavailable; banner dismissal will not persist");
            Arc::new(UnavailableStore)
        }
    }
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    let settings = load_settings(&args)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_filter.as_str()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let catalog = settings.load_catalog()?;
    info!(projects = catalog.len(), "catalog loaded");

    let env = PageEnvironment {
        catalog: Arc::new(catalog),
        store: open_local_storage(&settings),
        scroll: ScrollEvents::new(0.0),
    };
    let mount_points = settings.mount_points();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.window_title.as_str())
            .with_inner_size([1024.0, 720.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        &settings.window_title,
        options,
        Box::new(move |_cc| Ok(Box::new(PortfolioApp::new(&env, &mount_points)))),
    )
    .map_err(|err| anyhow!("portfolio window failed: {err}"))
}
