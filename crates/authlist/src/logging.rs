/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Diagnostic logging with `tracing`.
//!
//! Logs go to stderr so stdout carries only the generated markup. `RUST_LOG`
//! overrides the level chosen on the command line.

use std::io::{self, IsTerminal};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: LevelFilter,
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::WARN,
            with_ansi: io::stderr().is_terminal(),
        }
    }
}

impl LogConfig {
    /// Map `-v` / `-q` flags to a level.
    ///
    /// - `-q`: error
    /// - none: warn
    /// - `-v`: info
    /// - `-vv`: debug
    /// - `-vvv` and more: trace
    pub fn from_verbosity(verbose: u8, quiet: bool) -> Self {
        let level = if quiet {
            LevelFilter::ERROR
        } else {
            match verbose {
                0 => LevelFilter::WARN,
                1 => LevelFilter::INFO,
                2 => LevelFilter::DEBUG,
                _ => LevelFilter::TRACE,
            }
        };
        Self {
            level,
            ..Default::default()
        }
    }
}

fn build_env_filter(level: LevelFilter) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level.to_string().to_lowercase();
        EnvFilter::new(format!(
            "warn,authlist={level},authlist_core={level}",
            level = level
        ))
    })
}

/// Install the global subscriber. Call once at startup.
pub fn init_logging(config: &LogConfig) -> Result<(), tracing_subscriber::util::TryInitError> {
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(config.with_ansi)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(build_env_filter(config.level))
        .with(layer)
        .try_init()
}
