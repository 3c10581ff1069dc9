/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Output format trait for pluggable author-block markup.

/// Trait for defining how author and affiliation blocks are written in a
/// specific markup.
///
/// Implementations decide the wrappers and the superscript notation. Joining
/// authors and numbering affiliations is shared and lives in the parent module.
pub trait OutputFormat: Default + Clone {
    /// A single-line comment in the target markup.
    fn comment(&self, text: &str) -> String;

    /// One author with their superscript numbers.
    ///
    /// `superscripts` is never empty for authors read from an authors file.
    fn author(&self, name: &str, superscripts: &[usize]) -> String;

    /// Delimiter between authors, except before the last one.
    fn author_delimiter(&self) -> &'static str {
        ",\n"
    }

    /// Delimiter that introduces the last author.
    fn final_author_delimiter(&self) -> &'static str {
        "\nand\n"
    }

    /// Wrap the joined author entries.
    fn author_block(&self, body: String) -> String;

    /// One numbered affiliation address.
    fn address(&self, number: usize, address: &str) -> String;
}

/// Comma-join superscript numbers: `[1, 2]` becomes `1,2`.
pub(crate) fn superscript_list(superscripts: &[usize]) -> String {
    superscripts
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
