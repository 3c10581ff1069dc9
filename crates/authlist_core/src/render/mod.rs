/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Rendering of the author block and the affiliation block.

pub mod format;
pub mod latex;
pub mod plain;

pub use format::OutputFormat;
pub use latex::Latex;
pub use plain::PlainText;

use std::fmt;

use crate::error::Result;
use crate::model::{AffiliationMap, AuthorList};
use crate::order::AffiliationOrder;

/// Markup selected for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// IOP journal LaTeX.
    #[default]
    Latex,
    /// Plain text preview.
    Plain,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Latex => write!(f, "latex"),
            Format::Plain => write!(f, "plain"),
        }
    }
}

/// Options for a rendering run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: Format,
}

/// Join rendered author entries, introducing the last one with "and".
fn join_authors<F: OutputFormat>(fmt: &F, entries: &[String]) -> String {
    match entries {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!(
            "{}{}{}",
            init.join(fmt.author_delimiter()),
            fmt.final_author_delimiter(),
            last
        ),
    }
}

/// Render the author block.
///
/// Each author is followed by the superscript numbers of their affiliations
/// as given by `order`. Fails with a lookup error if an author references a
/// key that `order` does not contain, which only happens when `order` was
/// built from a different author list.
pub fn render_authors<F: OutputFormat>(
    fmt: &F,
    authors: &AuthorList,
    order: &AffiliationOrder,
) -> Result<String> {
    let entries = authors
        .iter()
        .map(|author| -> Result<String> {
            let superscripts = order.superscripts_for(author)?;
            Ok(fmt.author(&author.name, &superscripts))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(fmt.author_block(join_authors(fmt, &entries)))
}

/// Render the affiliation block, one numbered address per line.
pub fn render_affiliations<F: OutputFormat>(
    fmt: &F,
    order: &AffiliationOrder,
    affiliations: &AffiliationMap,
) -> Result<String> {
    let lines = order
        .numbered()
        .map(|(number, key)| -> Result<String> {
            Ok(fmt.address(number, affiliations.address(key)?))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(lines.join("\n"))
}
