/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Line-oriented readers for the authors and affiliations files.
//!
//! Both files hold one record per line: a leading field, a run of
//! whitespace, and the rest of the line. Blank lines are skipped; every
//! other line must split into exactly two parts.

use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{rest, take_till, take_while};

use crate::error::{self, Error, ParseReason};
use crate::model::{AffiliationMap, AuthorList, AuthorRecord};

fn word<'s>(input: &mut &'s str) -> Result<&'s str, ErrMode<ContextError>> {
    take_till(1.., char::is_whitespace).parse_next(input)
}

fn separator<'s>(input: &mut &'s str) -> Result<&'s str, ErrMode<ContextError>> {
    take_while(1.., char::is_whitespace).parse_next(input)
}

/// Split at the first run of whitespace.
fn first_run<'s>(input: &mut &'s str) -> Result<(&'s str, &'s str), ErrMode<ContextError>> {
    (word, separator, rest)
        .map(|(head, _, tail)| (head, tail))
        .parse_next(input)
}

/// Split at the whitespace run holding the first tab, so the head may contain spaces.
fn tab_run<'s>(input: &mut &'s str) -> Result<(&'s str, &'s str), ErrMode<ContextError>> {
    (take_till(1.., '\t'), separator, rest)
        .map(|(head, _, tail): (&str, &str, &str)| (head.trim_end(), tail))
        .parse_next(input)
}

/// Non-blank lines with their 1-based line numbers, trimmed.
fn records(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

/// Parse the affiliations file.
///
/// Each record is `<key><whitespace><address>`; the address runs to the end
/// of the line and may contain whitespace. A repeated key replaces the
/// earlier address.
pub fn parse_affiliation_map(text: &str, input: &str) -> error::Result<AffiliationMap> {
    let mut map = AffiliationMap::new();
    for (line_no, line) in records(text) {
        let mut cursor = line;
        let (key, address) = first_run
            .parse_next(&mut cursor)
            .map_err(|_| Error::parse(input, line_no, line, ParseReason::MissingSeparator))?;

        if let Some(previous) = map.insert(key, address) {
            tracing::warn!(
                input,
                line = line_no,
                key,
                replaced = %previous,
                "duplicate affiliation key; later address wins"
            );
        }
    }
    tracing::debug!(input, affiliations = map.len(), "read affiliation map");
    Ok(map)
}

/// Parse the authors file.
///
/// Each record is `<name><whitespace><key>[,<key>...]`. When the line
/// contains a tab, the name runs up to the first tab; otherwise it ends at
/// the first whitespace. Keys are split on commas and are not trimmed.
pub fn parse_author_list(text: &str, input: &str) -> error::Result<AuthorList> {
    let mut authors = Vec::new();
    for (line_no, line) in records(text) {
        let mut cursor = line;
        let split = if line.contains('\t') {
            tab_run.parse_next(&mut cursor)
        } else {
            first_run.parse_next(&mut cursor)
        };
        let (name, field) =
            split.map_err(|_| Error::parse(input, line_no, line, ParseReason::MissingSeparator))?;

        let affiliations: Vec<&str> = field.split(',').collect();
        if affiliations.iter().any(|key| key.is_empty()) {
            return Err(Error::parse(input, line_no, line, ParseReason::EmptyKey));
        }
        authors.push(AuthorRecord::new(name, affiliations));
    }
    tracing::debug!(input, authors = authors.len(), "read author list");
    Ok(AuthorList::new(authors))
}
