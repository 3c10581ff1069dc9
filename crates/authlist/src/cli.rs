/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use authlist_core::Format;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "authlist", author, version)]
#[command(about = "Generate the LaTeX author and affiliation block of a journal paper")]
pub struct Cli {
    /// Authors file: one `<name><TAB><key>[,<key>...]` record per line
    #[arg(index = 1)]
    pub authors: PathBuf,

    /// Affiliations file: one `<key> <address>` record per line
    #[arg(index = 2)]
    pub affiliations: PathBuf,

    /// Write the output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output markup
    #[arg(short, long, value_enum, default_value_t = FormatArg::Latex)]
    pub format: FormatArg,

    /// Only parse the inputs and resolve every affiliation key
    #[arg(long)]
    pub check: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum FormatArg {
    Latex,
    Plain,
}

impl std::fmt::Display for FormatArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatArg::Latex => write!(f, "latex"),
            FormatArg::Plain => write!(f, "plain"),
        }
    }
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Latex => Format::Latex,
            FormatArg::Plain => Format::Plain,
        }
    }
}
