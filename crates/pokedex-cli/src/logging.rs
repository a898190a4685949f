//! Tracing subscriber setup for the `pokedex` binary.
//!
//! # Priority (highest to lowest)
//!
//! 1. `POKEDEX_LOG` env var (per-target directives, e.g. `pokedex_client=debug,warn`)
//! 2. `RUST_LOG` env var
//! 3. `--log-level` flag (default `warn`)
//!
//! The interactive browser owns the terminal, so it only logs when a
//! `--log-file` is given.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::args::LogLevel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Disabled,
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(level: LogLevel, target: LogTarget) -> Result<()> {
    let filter = build_env_filter(level);

    let installed = match target {
        LogTarget::Disabled => return Ok(()),
        LogTarget::Stderr => {
            let use_ansi = std::io::stderr().is_terminal();
            let layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(use_ansi)
                .with_target(true)
                .without_time()
                .compact();
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            let layer = fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
    };

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }

    Ok(())
}

fn build_env_filter(level: LogLevel) -> EnvFilter {
    if let Ok(directives) = std::env::var("POKEDEX_LOG")
        && let Ok(filter) = EnvFilter::try_new(&directives)
    {
        return filter;
    }

    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    EnvFilter::new(level.to_string())
}
