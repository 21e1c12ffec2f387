#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod default_content;
mod gallery_host;
mod pdf;
mod reveal_host;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::PageContent;
use tracing_subscriber::EnvFilter;

use crate::context::{AppConfig, ExportScale};

/// Global page configuration, set once from command line
static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get the page configuration (set from command line or defaults)
pub fn get_app_config() -> &'static AppConfig {
    APP_CONFIG.get_or_init(|| AppConfig::with_content(default_content::page()))
}

/// Folio - portfolio page with gallery lightbox
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - personal portfolio page with gallery lightbox and PDF export")]
struct Args {
    /// Page content document (JSON)
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Window title (defaults to the page title)
    #[arg(short, long)]
    title: Option<String>,

    /// PDF scale policy: "auto" to fit one page, or a fixed factor like 0.85
    #[arg(long, default_value = "auto")]
    export_scale: ExportScale,

    /// PDF file name (defaults to "<Title>-Resume.pdf")
    #[arg(long)]
    filename: Option<String>,
}

/// Content lookup order: --content, then <data_dir>/folio/profile.json,
/// then the built-in sample page.
fn load_content(explicit: Option<&PathBuf>) -> anyhow::Result<PageContent> {
    if let Some(path) = explicit {
        return PageContent::load(path)
            .with_context(|| format!("Failed to load content from {}", path.display()));
    }

    let fallback = dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
        .join("profile.json");
    if fallback.exists() {
        return PageContent::load(&fallback)
            .with_context(|| format!("Failed to load content from {}", fallback.display()));
    }

    tracing::info!("No content document found, using built-in sample page");
    Ok(default_content::page())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut content = match load_content(args.content.as_ref()) {
        Ok(content) => content,
        Err(e) => {
            tracing::error!("{:#}", e);
            default_content::page()
        }
    };
    content.apply_widow_prevention();

    let title = args
        .title
        .clone()
        .unwrap_or_else(|| content.title.replace('\u{a0}', " "));

    let mut config = AppConfig::with_content(content);
    config.export_scale = args.export_scale;
    if let Some(filename) = args.filename {
        config.filename = filename;
    }

    tracing::info!(
        "Starting '{}' with {} sections, export scale {:?}",
        title,
        config.content.sections.len(),
        config.export_scale
    );

    // Store configuration globally
    let _ = APP_CONFIG.set(config);

    let window_width = 900.0;
    let window_height = 1000.0;

    let desktop = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop)
        .launch(app::App);
}
