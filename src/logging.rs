//! File logging
//!
//! The terminal belongs to the UI, so log lines go to
//! `~/.ticketsafer/ticketsafer.log`. Verbosity follows `RUST_LOG`.

use crate::config::Config;
use anyhow::Result;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "ticketsafer=info";

pub fn log_path() -> Option<PathBuf> {
    Config::config_dir().map(|dir| dir.join("ticketsafer.log"))
}

/// Install the global subscriber. Returns the log file path.
pub fn init() -> Result<PathBuf> {
    let path = log_path().ok_or_else(|| anyhow::anyhow!("Could not determine log directory"))?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()?;

    Ok(path)
}
