// src/log.rs
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{ScrapeError, ScrapeResult};

const DEFAULT_FILTER: &str = "runlah_races=info";
const VERBOSE_FILTER: &str = "runlah_races=debug";

/// Install the global subscriber: stderr always, plus an appending log file
/// when one is given. Timestamps are time since start.
///
/// `RUST_LOG` takes precedence over `verbose`. Calling this twice keeps the
/// first subscriber.
pub fn init(verbose: bool, log_file: Option<&Path>) -> ScrapeResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER }));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::uptime())
        .with_target(false);

    let file_layer = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                crate::file::ensure_directory(parent)?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| ScrapeError::FileWrite { path: path.to_path_buf(), source })?;
            Some(
                fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_timer(fmt::time::uptime()),
            )
        }
        None => None,
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init();
    Ok(())
}
