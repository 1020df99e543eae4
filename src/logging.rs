use anyhow::{anyhow, Context, Result};
use std::fs::File;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Log file written in the working directory when `RUST_LOG` is set.
pub const LOG_FILE: &str = "rview.log";

/// Installs a file-backed subscriber if `RUST_LOG` is set. The terminal is
/// the editor's canvas, so nothing is ever logged to stdout or stderr.
pub fn init() -> Result<()> {
    let Ok(filter) = EnvFilter::try_from_default_env() else {
        return Ok(());
    };

    let file = File::create(LOG_FILE).with_context(|| format!("failed to create {LOG_FILE}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}
