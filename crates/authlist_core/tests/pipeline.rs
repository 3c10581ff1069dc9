/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;
use common::*;

use authlist_core::{generate, Error, Format, LookupTable, ParseReason, RenderOptions};

#[test]
fn test_scenario_full_document() {
    let output = latex(SCENARIO_AUTHORS, SCENARIO_AFFILIATIONS).unwrap();
    let expected = "\
% AUTO-GENERATED WITH authlist
% FROM authors.txt AND affils.txt
\\author{%
Alice Smith$^{1,2}$,
Bob Jones$^{2}$
and
Carol Lee$^{3}$
}

\\address{$^{1}$~University-of-X}
\\address{$^{2}$~Institute-of-Y}
\\address{$^{3}$~Lab-of-Z}
";
    assert_eq!(output, expected);
}

#[test]
fn test_single_author_single_affiliation() {
    let output = latex("Alice\tA\n", "A Somewhere\n").unwrap();
    let (_, author_block) = output.split_once("\\author{%\n").unwrap();
    let (body, _) = author_block.split_once("\n}").unwrap();

    assert_eq!(body, "Alice$^{1}$");
    assert!(!body.contains(','));
    assert!(!body.contains("and"));
}

#[test]
fn test_two_authors_share_affiliation() {
    let output = latex("Alice\tA\nBob\tA\n", "A Somewhere\n").unwrap();
    assert!(output.contains("\\author{%\nAlice$^{1}$\nand\nBob$^{1}$\n}"));
    assert!(output.ends_with("\\address{$^{1}$~Somewhere}\n"));
}

#[test]
fn test_every_superscript_has_one_address() {
    let output = latex(
        "Ann\tB,A\nBen\tC\nCy\tA,D\nDee\tD,B\n",
        "A Alpha\nB Beta\nC Gamma\nD Delta\nE Unused\n",
    )
    .unwrap();
    let (author_part, address_part) = output.split_once("\n\n").unwrap();

    let address_numbers: Vec<usize> = superscripts_in(address_part)
        .into_iter()
        .flatten()
        .collect();
    assert_eq!(address_numbers, vec![1, 2, 3, 4]);

    for number in superscripts_in(author_part).into_iter().flatten() {
        assert_eq!(
            address_numbers.iter().filter(|n| **n == number).count(),
            1,
            "superscript {number} should have exactly one address"
        );
    }
    assert!(!address_part.contains("Unused"));
}

#[test]
fn test_duplicate_affiliation_key_last_wins() {
    let output = latex("Alice\tA\n", "A First\nA Second\n").unwrap();
    assert!(output.contains("\\address{$^{1}$~Second}"));
    assert!(!output.contains("First"));
}

#[test]
fn test_malformed_author_line() {
    let err = latex("Alice\tA\nBob\n", SCENARIO_AFFILIATIONS).unwrap_err();
    assert!(matches!(
        err,
        Error::Parse {
            line: 2,
            reason: ParseReason::MissingSeparator,
            ..
        }
    ));
}

#[test]
fn test_malformed_affiliation_line() {
    let err = latex(SCENARIO_AUTHORS, "A University-of-X\nB\n").unwrap_err();
    match err {
        Error::Parse { input, line, .. } => {
            assert_eq!(input, "affils.txt");
            assert_eq!(line, 2);
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_trailing_comma_is_parse_error() {
    let err = latex("Alice\tA,\n", "A Somewhere\n").unwrap_err();
    assert!(matches!(
        err,
        Error::Parse {
            reason: ParseReason::EmptyKey,
            ..
        }
    ));
}

#[test]
fn test_unknown_key_is_lookup_error() {
    let err = latex("Alice\tA\nBob\tZ\n", "A Somewhere\n").unwrap_err();
    match err {
        Error::Lookup { key, table } => {
            assert_eq!(key, "Z");
            assert_eq!(table, LookupTable::AffiliationMap);
        }
        other => panic!("expected lookup error, got {other:?}"),
    }
}

#[test]
fn test_plain_format() {
    let output = generate(
        &authors(SCENARIO_AUTHORS),
        &affiliations(SCENARIO_AFFILIATIONS),
        &RenderOptions {
            format: Format::Plain,
        },
    )
    .unwrap();
    let expected = "\
# AUTO-GENERATED WITH authlist
# FROM authors.txt AND affils.txt
Alice Smith[1,2],
Bob Jones[2]
and
Carol Lee[3]

[1] University-of-X
[2] Institute-of-Y
[3] Lab-of-Z
";
    assert_eq!(output, expected);
}

#[test]
fn test_blank_lines_ignored() {
    let with_blanks = latex(
        "\nAlice Smith\tA,B\n\nBob Jones\tB\n  \nCarol Lee\tC\n\n",
        "\nA University-of-X\n\nB Institute-of-Y\n\t\nC Lab-of-Z\n",
    )
    .unwrap();
    let clean = latex(SCENARIO_AUTHORS, SCENARIO_AFFILIATIONS).unwrap();
    assert_eq!(with_blanks, clean);
}

#[test]
fn test_hash_prefixed_lines_are_records() {
    let output = latex("Alice\tA\n#Bob\tA\nCarol\tA\n", "A Somewhere\n").unwrap();
    assert!(output.contains("Alice$^{1}$,\n#Bob$^{1}$\nand\nCarol$^{1}$"));

    let err = latex("Alice\tA\n", "#retired\nA Somewhere\n").unwrap_err();
    assert!(matches!(
        err,
        Error::Parse {
            line: 1,
            reason: ParseReason::MissingSeparator,
            ..
        }
    ));
}
