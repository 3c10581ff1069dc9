/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod cli;
mod logging;

use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use authlist_core::{check_paths, generate_from_paths, RenderOptions};
use clap::Parser;
use cli::Cli;
use logging::{init_logging, LogConfig};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&LogConfig::from_verbosity(cli.verbose, cli.quiet)) {
        eprintln!("error: failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.check {
        let summary = check_paths(&cli.authors, &cli.affiliations)?;
        println!("{}", summary);
        return Ok(());
    }

    let options = RenderOptions {
        format: cli.format.into(),
    };
    let document = generate_from_paths(&cli.authors, &cli.affiliations, &options)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &document)
                .with_context(|| format!("cannot write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(document.as_bytes())
                .and_then(|()| stdout.flush())
                .context("cannot write to stdout")?;
        }
    }
    Ok(())
}
