/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use authlist_core::{generate, Input, RenderOptions};

pub const SCENARIO_AUTHORS: &str = "Alice Smith\tA,B\nBob Jones\tB\nCarol Lee\tC\n";

pub const SCENARIO_AFFILIATIONS: &str = "A University-of-X\nB Institute-of-Y\nC Lab-of-Z\n";

pub fn authors(text: &str) -> Input {
    Input::new("authors.txt", text)
}

pub fn affiliations(text: &str) -> Input {
    Input::new("affils.txt", text)
}

/// Generate LaTeX output for two in-memory inputs.
pub fn latex(authors_text: &str, affiliations_text: &str) -> authlist_core::Result<String> {
    generate(
        &authors(authors_text),
        &affiliations(affiliations_text),
        &RenderOptions::default(),
    )
}

/// Superscript numbers found in `$^{...}$` groups, in output order.
pub fn superscripts_in(block: &str) -> Vec<Vec<usize>> {
    block
        .split("$^{")
        .skip(1)
        .filter_map(|rest| rest.split_once("}$"))
        .map(|(numbers, _)| {
            numbers
                .split(',')
                .filter_map(|n| n.parse().ok())
                .collect()
        })
        .collect()
}
