/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Affiliation numbering by first appearance.
//!
//! Authors are scanned in document order and each author's keys in the
//! order they were listed. A key is numbered the first time it is seen, so
//! the first author's first affiliation is always `1`.

use indexmap::IndexSet;

use crate::error::{Error, LookupTable, Result};
use crate::model::{AuthorList, AuthorRecord};

/// Distinct affiliation keys in first-appearance order.
#[derive(Debug, Clone, Default)]
pub struct AffiliationOrder {
    keys: IndexSet<String>,
}

// IndexSet equality ignores order; two orders are equal only key by key.
impl PartialEq for AffiliationOrder {
    fn eq(&self, other: &Self) -> bool {
        self.keys.iter().eq(other.keys.iter())
    }
}

impl Eq for AffiliationOrder {}

impl AffiliationOrder {
    /// Build the order from an author list.
    pub fn from_authors(authors: &AuthorList) -> Self {
        let mut keys: IndexSet<String> = IndexSet::new();
        for key in authors.references() {
            if !keys.contains(key) {
                keys.insert(key.to_string());
            }
        }
        Self { keys }
    }

    /// Zero-based position of a key.
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.keys.get_index_of(key)
    }

    /// The 1-based superscript number of a key.
    pub fn superscript(&self, key: &str) -> Result<usize> {
        self.index_of(key)
            .map(|index| index + 1)
            .ok_or_else(|| Error::lookup(key, LookupTable::AffiliationOrder))
    }

    /// Superscript numbers for one author, in listed order.
    ///
    /// A key listed twice for the same author yields one number.
    pub fn superscripts_for(&self, author: &AuthorRecord) -> Result<Vec<usize>> {
        let mut numbers = Vec::with_capacity(author.affiliations.len());
        for key in &author.affiliations {
            let number = self.superscript(key)?;
            if !numbers.contains(&number) {
                numbers.push(number);
            }
        }
        Ok(numbers)
    }

    /// `(superscript, key)` pairs in order.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &str)> {
        self.keys
            .iter()
            .enumerate()
            .map(|(index, key)| (index + 1, key.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Build the first-appearance affiliation order for `authors`.
pub fn build_affiliation_order(authors: &AuthorList) -> AffiliationOrder {
    let order = AffiliationOrder::from_authors(authors);
    tracing::debug!(
        authors = authors.len(),
        affiliations = order.len(),
        "built affiliation order"
    );
    order
}
