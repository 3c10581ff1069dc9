/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Error types for reading inputs and rendering author blocks.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a line could not be split into its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseReason {
    /// No whitespace between the first field and the rest of the line.
    MissingSeparator,
    /// An empty entry in a comma-separated affiliation list (`A,`, `,A`, `A,,B`).
    EmptyKey,
}

impl fmt::Display for ParseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseReason::MissingSeparator => write!(f, "missing whitespace separator"),
            ParseReason::EmptyKey => write!(f, "empty affiliation key"),
        }
    }
}

/// Where a failed affiliation lookup happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupTable {
    /// The first-appearance order built from the author list.
    AffiliationOrder,
    /// The key-to-address map read from the affiliations file.
    AffiliationMap,
}

impl fmt::Display for LookupTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupTable::AffiliationOrder => write!(f, "affiliation order"),
            LookupTable::AffiliationMap => write!(f, "affiliation map"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read {}", path.display())]
    Resource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{input}:{line}: {reason}: {content:?}")]
    Parse {
        /// Display name of the input (usually its path).
        input: String,
        /// 1-based line number.
        line: usize,
        content: String,
        reason: ParseReason,
    },

    #[error("affiliation key {key:?} not found in {table}")]
    Lookup { key: String, table: LookupTable },
}

impl Error {
    pub(crate) fn parse(input: &str, line: usize, content: &str, reason: ParseReason) -> Self {
        Error::Parse {
            input: input.to_string(),
            line,
            content: content.to_string(),
            reason,
        }
    }

    pub(crate) fn lookup(key: &str, table: LookupTable) -> Self {
        Error::Lookup {
            key: key.to_string(),
            table,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_names_input_and_line() {
        let err = Error::parse("authors.txt", 3, "AliceA", ParseReason::MissingSeparator);
        assert_eq!(
            err.to_string(),
            r#"authors.txt:3: missing whitespace separator: "AliceA""#
        );
    }

    #[test]
    fn lookup_error_names_table() {
        let err = Error::lookup("Z", LookupTable::AffiliationMap);
        assert_eq!(
            err.to_string(),
            r#"affiliation key "Z" not found in affiliation map"#
        );
    }

    #[test]
    fn resource_error_keeps_io_source() {
        let err = Error::Resource {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().starts_with("cannot read missing.txt"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
