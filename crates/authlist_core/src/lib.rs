/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! authlist core
//!
//! Reads an author list and an affiliation map, numbers the affiliations by
//! their first appearance among the authors, and renders the author and
//! affiliation blocks of a journal paper.
//!
//! # Example
//!
//! ```rust
//! use authlist_core::{generate, Input, RenderOptions};
//!
//! let authors = Input::new("authors.txt", "Alice Smith\tA,B\nBob Jones\tB\n");
//! let affiliations = Input::new("affils.txt", "A University of X\nB Institute of Y\n");
//!
//! let output = generate(&authors, &affiliations, &RenderOptions::default()).unwrap();
//! assert!(output.contains("Alice Smith$^{1,2}$\nand\nBob Jones$^{2}$"));
//! assert!(output.contains("\\address{$^{2}$~Institute of Y}"));
//! ```

pub mod error;
pub mod model;
pub mod order;
pub mod parse;
pub mod pipeline;
pub mod render;

pub use error::{Error, LookupTable, ParseReason, Result};
pub use model::{AffiliationMap, AuthorList, AuthorRecord};
pub use order::{build_affiliation_order, AffiliationOrder};
pub use parse::{parse_affiliation_map, parse_author_list};
pub use pipeline::{
    check, check_paths, generate, generate_from_paths, Input, Resolved, Summary, TOOL_NAME,
};
pub use render::{render_affiliations, render_authors, Format, RenderOptions};
