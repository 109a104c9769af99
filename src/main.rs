#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use opensolo_core::config::DEFAULT_SESSION;
use opensolo_core::LandingConfig;

/// Global page configuration, set from command line
static CONFIG: OnceLock<LandingConfig> = OnceLock::new();

/// Get the page configuration (set from command line or default)
pub fn get_config() -> LandingConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// OpenSolo - waitlist landing page
#[derive(Parser, Debug)]
#[command(name = "opensolo-desktop")]
#[command(about = "OpenSolo - open-source contribution platform waitlist")]
struct Args {
    /// Launch instant to count down to (local time, YYYY-MM-DDTHH:MM:SS)
    #[arg(short = 't', long)]
    countdown_target: Option<String>,

    /// Record analytics events as JSONL files in this directory
    #[arg(short, long)]
    analytics_dir: Option<PathBuf>,

    /// Record analytics under the default data directory
    #[arg(long, conflicts_with = "analytics_dir")]
    analytics: bool,

    /// Session name used in analytics file names
    #[arg(short, long, default_value = DEFAULT_SESSION)]
    session: String,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let mut config = match LandingConfig::with_target(args.countdown_target.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(2);
        }
    };

    config.analytics_dir = if let Some(dir) = args.analytics_dir {
        Some(dir)
    } else if args.analytics {
        Some(
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("opensolo")
                .join("analytics"),
        )
    } else {
        None
    };
    config.session = args.session;

    tracing::info!(
        "Counting down to {} (local time), analytics: {:?}",
        config.countdown_target,
        config.analytics_dir
    );

    // Store configuration globally
    let _ = CONFIG.set(config);

    let window_width = 900.0;
    let window_height = 1000.0;

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("OpenSolo")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
