/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! LaTeX output for IOP journal templates (`\author` and `\address`).

use super::format::{superscript_list, OutputFormat};

/// IOP LaTeX renderer.
///
/// Names and addresses are copied verbatim, so they may carry their own
/// LaTeX (accents, `~`, `\&`).
#[derive(Debug, Clone, Default)]
pub struct Latex;

impl OutputFormat for Latex {
    fn comment(&self, text: &str) -> String {
        format!("% {}", text)
    }

    fn author(&self, name: &str, superscripts: &[usize]) -> String {
        format!("{}$^{{{}}}$", name, superscript_list(superscripts))
    }

    fn author_block(&self, body: String) -> String {
        format!("\\author{{%\n{}\n}}", body)
    }

    fn address(&self, number: usize, address: &str) -> String {
        format!("\\address{{$^{{{}}}$~{}}}", number, address)
    }
}
