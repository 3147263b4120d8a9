use std::fs::OpenOptions;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer};

/// Environment variable naming a log file when no flag is given
pub const LOG_FILE_ENV: &str = "HEARTH_LOG_FILE";

/// Where log output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to a file; the only option while a full-screen UI owns the terminal
    File(PathBuf),
    Stderr,
    Off,
}

impl LogTarget {
    /// An explicit path wins, then `HEARTH_LOG_FILE`, then `fallback`
    pub fn resolve(explicit: Option<PathBuf>, fallback: LogTarget) -> Self {
        explicit
            .or_else(|| std::env::var_os(LOG_FILE_ENV).map(PathBuf::from))
            .map(LogTarget::File)
            .unwrap_or(fallback)
    }
}

fn level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    }
}

/// `RUST_LOG` overrides the verbosity flag when set
fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level(verbose).into())
        .from_env_lossy()
}

pub fn init_tracing(target: LogTarget, verbose: bool) -> Result<()> {
    match target {
        LogTarget::Off => Ok(()),
        LogTarget::Stderr => {
            let layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter(verbose));
            tracing_subscriber::registry().with(layer).init();
            Ok(())
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;

            let layer = fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true)
                .with_filter(filter(verbose));
            tracing_subscriber::registry().with(layer).init();
            Ok(())
        }
    }
}
