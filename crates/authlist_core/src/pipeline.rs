/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! End-to-end generation: read both inputs, number the affiliations, and
//! compose the final document.
//!
//! Nothing is written here. Callers receive the whole document or an error,
//! so a failed run never leaves partial output behind.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{Error, LookupTable, Result};
use crate::model::{AffiliationMap, AuthorList};
use crate::order::{build_affiliation_order, AffiliationOrder};
use crate::parse::{parse_affiliation_map, parse_author_list};
use crate::render::{
    render_affiliations, render_authors, Format, Latex, OutputFormat, PlainText, RenderOptions,
};

/// Name written into the provenance header.
pub const TOOL_NAME: &str = "authlist";

/// The raw text of one input together with the name it is reported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub name: String,
    pub text: String,
}

impl Input {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Read a file, naming the input after its path.
    pub fn read(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Resource {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(path.display().to_string(), text))
    }
}

/// Parsed and numbered inputs, ready to render.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub authors: AuthorList,
    pub affiliations: AffiliationMap,
    pub order: AffiliationOrder,
}

impl Resolved {
    /// Parse both inputs and build the affiliation order.
    pub fn from_inputs(authors: &Input, affiliations: &Input) -> Result<Self> {
        let author_list = parse_author_list(&authors.text, &authors.name)?;
        let affiliation_map = parse_affiliation_map(&affiliations.text, &affiliations.name)?;
        let order = build_affiliation_order(&author_list);

        if author_list.is_empty() {
            tracing::warn!(input = %authors.name, "author list is empty");
        }
        let resolved = Self {
            authors: author_list,
            affiliations: affiliation_map,
            order,
        };
        for key in resolved.unused_affiliations() {
            tracing::info!(key, "affiliation is not referenced by any author");
        }
        Ok(resolved)
    }

    /// Affiliation keys defined in the map but never referenced.
    pub fn unused_affiliations(&self) -> Vec<&str> {
        self.affiliations
            .keys()
            .filter(|key| !self.order.contains(key))
            .collect()
    }

    /// Referenced keys with no address in the map, in first-appearance order.
    pub fn missing_affiliations(&self) -> Vec<&str> {
        self.order
            .keys()
            .filter(|key| !self.affiliations.contains_key(key))
            .collect()
    }

    fn compose<F: OutputFormat>(
        &self,
        fmt: &F,
        authors: &str,
        affiliations: &str,
    ) -> Result<String> {
        let author_block = render_authors(fmt, &self.authors, &self.order)?;
        let affiliation_block = render_affiliations(fmt, &self.order, &self.affiliations)?;
        Ok(format!(
            "{}\n{}\n{}\n\n{}\n",
            fmt.comment(&format!("AUTO-GENERATED WITH {}", TOOL_NAME)),
            fmt.comment(&format!("FROM {} AND {}", authors, affiliations)),
            author_block,
            affiliation_block
        ))
    }
}

/// Generate the author and affiliation blocks from two raw inputs.
///
/// The result holds two provenance comment lines, the author block, a blank
/// line, and the affiliation block.
pub fn generate(
    authors: &Input,
    affiliations: &Input,
    options: &RenderOptions,
) -> Result<String> {
    let resolved = Resolved::from_inputs(authors, affiliations)?;
    let output = match options.format {
        Format::Latex => resolved.compose(&Latex, &authors.name, &affiliations.name),
        Format::Plain => resolved.compose(&PlainText, &authors.name, &affiliations.name),
    }?;
    tracing::info!(
        authors = resolved.authors.len(),
        affiliations = resolved.order.len(),
        format = %options.format,
        "generated author block"
    );
    Ok(output)
}

/// Read both files and generate the document.
pub fn generate_from_paths(
    authors: &Path,
    affiliations: &Path,
    options: &RenderOptions,
) -> Result<String> {
    let authors = Input::read(authors)?;
    let affiliations = Input::read(affiliations)?;
    generate(&authors, &affiliations, options)
}

/// Counts reported by a check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub authors: usize,
    pub referenced: usize,
    pub defined: usize,
    pub unused: Vec<String>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "authors: {}", self.authors)?;
        writeln!(f, "affiliations referenced: {}", self.referenced)?;
        write!(f, "affiliations defined: {}", self.defined)?;
        if !self.unused.is_empty() {
            write!(f, "\nunused: {}", self.unused.join(", "))?;
        }
        Ok(())
    }
}

/// Parse both inputs and verify every referenced key has an address,
/// without rendering.
pub fn check(authors: &Input, affiliations: &Input) -> Result<Summary> {
    let resolved = Resolved::from_inputs(authors, affiliations)?;
    if let Some(key) = resolved.missing_affiliations().first() {
        return Err(Error::lookup(key, LookupTable::AffiliationMap));
    }
    Ok(Summary {
        authors: resolved.authors.len(),
        referenced: resolved.order.len(),
        defined: resolved.affiliations.len(),
        unused: resolved
            .unused_affiliations()
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}

/// Read both files and check them.
pub fn check_paths(authors: &Path, affiliations: &Path) -> Result<Summary> {
    let authors = Input::read(authors)?;
    let affiliations = Input::read(affiliations)?;
    check(&authors, &affiliations)
}
