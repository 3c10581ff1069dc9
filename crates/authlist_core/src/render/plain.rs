/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Plain text output format, for previewing the numbering.

use super::format::{superscript_list, OutputFormat};

#[derive(Debug, Clone, Default)]
pub struct PlainText;

impl OutputFormat for PlainText {
    fn comment(&self, text: &str) -> String {
        format!("# {}", text)
    }

    fn author(&self, name: &str, superscripts: &[usize]) -> String {
        format!("{}[{}]", name, superscript_list(superscripts))
    }

    fn author_block(&self, body: String) -> String {
        // No wrapper in plain text
        body
    }

    fn address(&self, number: usize, address: &str) -> String {
        format!("[{}] {}", number, address)
    }
}
