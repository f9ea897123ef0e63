use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::Parser;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use shared::Catalog;
use widget_core::{page::DEFAULT_MOUNT_POINTS, MountPoints};

pub const DEFAULT_CONFIG_FILE: &str = "portfolio.toml";
pub const ENV_PREFIX: &str = "PORTFOLIO";

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "portfolio_gui", about = "Portfolio page with project gallery")]
pub struct CliArgs {
    /// Settings file; defaults to ./portfolio.toml when present.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Catalog file (.toml or .json) replacing the built-in sample projects.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    /// Directory holding local_storage.json.
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
    #[arg(long)]
    pub log_filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub catalog_path: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub mount_points: Vec<String>,
    pub log_filter: String,
    pub window_title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: None,
            data_dir: None,
            mount_points: DEFAULT_MOUNT_POINTS.iter().map(|id| id.to_string()).collect(),
            log_filter: "info".into(),
            window_title: "Portfolio".into(),
        }
    }
}

impl Settings {
    fn apply_cli(&mut self, args: &CliArgs) {
        if let Some(path) = &args.catalog {
            self.catalog_path = Some(path.clone());
        }
        if let Some(dir) = &args.data_dir {
            self.data_dir = Some(dir.clone());
        }
        if let Some(filter) = &args.log_filter {
            self.log_filter = filter.clone();
        }
    }

    pub fn mount_points(&self) -> MountPoints {
        MountPoints::new(self.mount_points.iter().map(|id| id.trim().to_string()))
    }

    pub fn load_catalog(&self) -> anyhow::Result<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::load(path)
                .with_context(|| format!("failed to load catalog '{}'", path.display())),
            None => Ok(Catalog::sample()),
        }
    }

    pub fn resolve_data_dir(&self) -> anyhow::Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        storage::default_data_dir().ok_or_else(|| anyhow!("unable to resolve local app data dir"))
    }
}

/// Defaults, then the settings file, then `PORTFOLIO__*` variables, then CLI flags.
pub fn load_settings(args: &CliArgs) -> anyhow::Result<Settings> {
    let (path, required) = match &args.config {
        Some(path) => (path.clone(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    let mut settings: Settings = Config::builder()
        .add_source(
            File::from(path.as_path())
                .format(FileFormat::Toml)
                .required(required),
        )
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("mount_points")
                .try_parsing(true),
        )
        .build()
        .with_context(|| format!("failed to read settings from '{}'", path.display()))?
        .try_deserialize()
        .context("invalid portfolio settings")?;

    settings.apply_cli(args);
    Ok(settings)
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
