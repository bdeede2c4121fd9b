//! Tests for the notation parser

use rstest::rstest;

use treenote::domain::{parse, Association};

fn assoc(parent: &str, children: &[&str]) -> Association {
    Association::new(parent, children.iter().map(|c| c.to_string()).collect())
}

#[test]
fn given_single_pair_when_parsing_then_splits_children_on_commas() {
    assert_eq!(parse("A > B, C"), vec![assoc("A", &["B", "C"])]);
}

#[test]
fn given_multiple_contexts_when_parsing_then_keeps_context_order() {
    let result = parse("A > B > C, D; A > E");
    assert_eq!(
        result,
        vec![
            assoc("A", &["B"]),
            assoc("B", &["C", "D"]),
            assoc("A", &["E"]),
        ]
    );
}

#[rstest]
#[case("A > B , C ; ")]
#[case("A > B, C;")]
#[case("  A>B,C  ")]
#[case("A > B, C; X")]
fn given_whitespace_or_empty_contexts_when_parsing_then_matches_plain_form(#[case] input: &str) {
    assert_eq!(parse(input), parse("A > B, C"));
}

#[test]
fn given_comma_in_mid_chain_level_when_parsing_then_parent_keeps_literal_text() {
    let result = parse("A > B, C > D");
    assert_eq!(
        result,
        vec![assoc("A", &["B", "C"]), assoc("B, C", &["D"])]
    );
}

#[rstest]
#[case("")]
#[case(";;;")]
#[case("A")]
#[case("A, B; C")]
fn given_no_level_separator_when_parsing_then_yields_no_associations(#[case] input: &str) {
    assert!(parse(input).is_empty());
}

#[test]
fn given_stray_delimiters_when_parsing_then_produces_empty_labels() {
    let result = parse("> A");
    assert_eq!(result, vec![assoc("", &["A"])]);
}
