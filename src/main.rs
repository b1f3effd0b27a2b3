#![allow(non_snake_case)]

mod app;
pub mod context;
mod pages;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::{initialize_global_styles, Theme, ThemeConfig};

/// Global theme, set from command line before launch
static THEME: OnceLock<Theme> = OnceLock::new();

/// Get the theme (set from command line or default)
pub fn get_theme() -> Theme {
    THEME.get().cloned().unwrap_or_default()
}

/// folio - personal site shell
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "folio - site layout shell with themed global styles")]
struct Args {
    /// JSON theme file with palette and typography overrides
    #[arg(short, long)]
    theme: Option<PathBuf>,

    /// Window title
    #[arg(long, default_value = "folio")]
    title: String,

    /// Print the global stylesheet and exit without opening a window
    #[arg(long)]
    print_styles: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let theme = match &args.theme {
        Some(path) => ThemeConfig::load(path)
            .and_then(ThemeConfig::into_theme)
            .with_context(|| format!("Failed to load theme from {}", path.display()))?,
        None => Theme::default(),
    };

    // Styles are installed here, once, before any component renders
    let injection = initialize_global_styles(&theme);

    if args.print_styles {
        print!("{}", injection.stylesheet().render());
        return Ok(());
    }

    let _ = THEME.set(theme);

    tracing::info!("Starting '{}'", args.title);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&args.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1000.0, 800.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}
