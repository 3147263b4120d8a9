mod clipboard;
mod input;
mod render;
mod runtime;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hearth_core::tracing_setup::{init_tracing, LogTarget};
use hearth_core::{open_repository, SourceConfig};

use crate::runtime::run_app;
use crate::ui::App;

#[derive(Parser, Debug)]
#[command(name = "hearth-tui")]
#[command(about = "Browse and search the HEARTH threat-hunting collection", long_about = None)]
#[command(version)]
struct Args {
    /// Config file (defaults to the user config dir when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Read hunts from a local checkout instead of GitHub
    #[arg(long, value_name = "DIR")]
    local: Option<PathBuf>,

    /// Append logs to this file; nothing is logged otherwise
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ui::terminal::restore();
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_tracing(LogTarget::resolve(args.log_file, LogTarget::Off), args.verbose)?;

    let config = SourceConfig::resolve(args.config.as_deref())
        .context("Failed to load configuration")?;
    let repository = open_repository(config, args.local.as_deref())
        .context("Failed to set up hunt source")?;

    install_panic_hook();
    let mut terminal = ui::terminal::init()?;
    let mut app = App::new();

    let result = run_app(&mut terminal, &mut app, repository).await;

    ui::terminal::restore()?;
    tracing::info!("Exited");
    result
}
