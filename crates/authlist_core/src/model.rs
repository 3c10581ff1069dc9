/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Author and affiliation records.

use indexmap::IndexMap;

use crate::error::{Error, LookupTable, Result};

/// Affiliation keys mapped to their addresses.
///
/// Keys keep the position of their first insertion. Inserting an existing
/// key replaces its address (last wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AffiliationMap {
    entries: IndexMap<String, String>,
}

impl AffiliationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an address, returning the address it replaced, if any.
    pub fn insert(&mut self, key: impl Into<String>, address: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), address.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Look up an address, failing with a lookup error when the key is unknown.
    pub fn address(&self, key: &str) -> Result<&str> {
        self.get(key)
            .ok_or_else(|| Error::lookup(key, LookupTable::AffiliationMap))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AffiliationMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = AffiliationMap::new();
        for (key, address) in iter {
            map.insert(key, address);
        }
        map
    }
}

/// One author and the affiliation keys listed for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRecord {
    pub name: String,
    /// Keys in the order they were listed; duplicates are kept.
    pub affiliations: Vec<String>,
}

impl AuthorRecord {
    pub fn new<I, S>(name: impl Into<String>, affiliations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            affiliations: affiliations.into_iter().map(Into::into).collect(),
        }
    }
}

/// Authors in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorList(Vec<AuthorRecord>);

impl AuthorList {
    pub fn new(authors: Vec<AuthorRecord>) -> Self {
        Self(authors)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AuthorRecord> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[AuthorRecord] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every (author, key) reference in scan order.
    pub fn references(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .flat_map(|author| author.affiliations.iter().map(String::as_str))
    }
}

impl From<Vec<AuthorRecord>> for AuthorList {
    fn from(authors: Vec<AuthorRecord>) -> Self {
        Self(authors)
    }
}

impl FromIterator<AuthorRecord> for AuthorList {
    fn from_iter<I: IntoIterator<Item = AuthorRecord>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
