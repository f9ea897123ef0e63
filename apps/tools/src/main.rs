use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use shared::{Catalog, QueryState, SortOrder, TagFilter, ViewMode};
use storage::{JsonFileStore, KeyValueStore};
use tracing::info;
use tracing_subscriber::EnvFilter;
use widget_core::{
    BannerState, BannerWidget, GalleryContent, GalleryView, GalleryWidget, BANNER_STORAGE_KEY,
};

#[derive(Parser, Debug)]
#[command(name = "tools", about = "Catalog and local storage utilities for the portfolio page")]
struct Cli {
    /// Catalog file (.toml or .json); the built-in sample projects otherwise.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Directory holding local_storage.json.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the gallery pipeline and print what the page would show.
    Query {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value_t = TagFilter::All)]
        tag: TagFilter,
        #[arg(long, default_value_t = SortOrder::Ascending)]
        sort: SortOrder,
        #[arg(long, default_value_t = ViewMode::Grid)]
        view: ViewMode,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Parse and validate a catalog file without starting the page.
    ValidateCatalog { path: PathBuf },
    /// Inspect or change the persisted banner dismissal.
    Banner {
        #[command(subcommand)]
        action: BannerAction,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum BannerAction {
    Status,
    Dismiss,
    Reset,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("failed to load catalog '{}'", path.display())),
        None => Ok(Catalog::sample()),
    }
}

fn open_store(data_dir: Option<PathBuf>) -> Result<JsonFileStore> {
    let dir = match data_dir {
        Some(dir) => dir,
        None => storage::default_data_dir()
            .ok_or_else(|| anyhow!("unable to resolve local app data dir; pass --data-dir"))?,
    };
    Ok(JsonFileStore::open_in(&dir)?)
}

fn render_text(view: &GalleryView) -> String {
    let mut lines = Vec::new();
    match &view.content {
        GalleryContent::Placeholder { message } => lines.push(message.to_string()),
        GalleryContent::Cards { cards } => {
            lines.push(format!("{} project(s), {} view", cards.len(), view.layout));
            for card in cards {
                lines.push(format!("- {}: {}", card.title, card.description));
                if let Some(link) = &card.link {
                    lines.push(format!("  {}", link.href));
                }
            }
        }
    }
    lines.push(String::new());
    lines.join("\n")
}

fn banner_status_line(state: BannerState) -> &'static str {
    match state {
        BannerState::Shown => "banner: shown",
        BannerState::Dismissed => "banner: dismissed",
    }
}

fn run_banner(store: Arc<dyn KeyValueStore>, action: BannerAction) -> Result<String> {
    match action {
        BannerAction::Status => Ok(banner_status_line(BannerWidget::mount(store).state()).into()),
        BannerAction::Dismiss => {
            let mut banner = BannerWidget::mount(store);
            if !banner.dismiss() {
                return Ok("banner: already dismissed".into());
            }
            Ok(banner_status_line(banner.state()).into())
        }
        BannerAction::Reset => {
            store.remove(BANNER_STORAGE_KEY)?;
            Ok(banner_status_line(BannerWidget::mount(store).state()).into())
        }
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Query {
            search,
            tag,
            sort,
            view,
            format,
        } => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            let query = QueryState::default()
                .with_search_text(search)
                .with_tag_filter(tag)
                .with_sort_order(sort)
                .with_view_mode(view);
            let gallery = GalleryWidget::with_query(Arc::new(catalog), query);
            let rendered = gallery.render();
            match format {
                OutputFormat::Text => print!("{}", render_text(&rendered)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rendered)?),
            }
        }
        Command::ValidateCatalog { path } => {
            let catalog = load_catalog(Some(&path))?;
            info!(path = %path.display(), projects = catalog.len(), "catalog validated");
            println!("ok: {} project(s) in '{}'", catalog.len(), path.display());
        }
        Command::Banner { action } => {
            let store = open_store(cli.data_dir)?;
            println!("{}", run_banner(Arc::new(store), action)?);
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
