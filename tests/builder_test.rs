//! Tests for TreeBuilder

use rstest::rstest;

use treenote::domain::{parse, DomainError, Tree, TreeBuilder};
use treenote::util::testing;

fn build(input: &str) -> Result<Tree, DomainError> {
    testing::init_test_setup();
    TreeBuilder::new().build(&parse(input))
}

fn ids(tree: &Tree) -> Vec<&str> {
    tree.nodes().map(|n| n.id.as_str()).collect()
}

#[test]
fn given_simple_pair_when_building_then_materializes_children() {
    let tree = build("A > B, C").unwrap();

    assert_eq!(ids(&tree), vec!["A", "B", "C"]);
    assert_eq!(tree.children_of("A"), ["B", "C"]);
    assert!(tree.children_of("B").is_empty());
    assert!(tree.children_of("C").is_empty());
}

#[test]
fn given_nested_chain_and_second_context_when_building_then_merges_parent() {
    let tree = build("A > B > C, D; A > E").unwrap();

    assert_eq!(ids(&tree), vec!["A", "B", "C", "D", "E"]);
    assert_eq!(tree.children_of("A"), ["B", "E"]);
    assert_eq!(tree.children_of("B"), ["C", "D"]);
    for leaf in ["C", "D", "E"] {
        assert!(tree.children_of(leaf).is_empty(), "{leaf} should be a leaf");
    }
}

#[test]
fn given_overlapping_children_when_building_then_dedups_in_first_order() {
    let tree = build("A > B, C; A > C, D").unwrap();

    assert_eq!(tree.children_of("A"), ["B", "C", "D"]);
    assert_eq!(tree.len(), 4);
}

#[test]
fn given_same_association_twice_when_building_then_single_child() {
    let tree = build("A > B; A > B").unwrap();

    assert_eq!(tree.children_of("A"), ["B"]);
}

#[test]
fn given_trailing_separator_when_building_then_same_as_without() {
    let with = build("A > B , C ; ").unwrap();
    let without = build("A > B, C").unwrap();

    assert_eq!(ids(&with), ids(&without));
    assert_eq!(with.children_of("A"), without.children_of("A"));
}

#[rstest]
#[case("A > A", "A")]
#[case("A > B, A", "A")]
#[case("A > B; B > C, B", "B")]
fn given_self_parent_when_building_then_errors(#[case] input: &str, #[case] offender: &str) {
    let result = build(input);

    assert_eq!(
        result.unwrap_err(),
        DomainError::SelfParent(offender.to_string())
    );
}

#[test]
fn given_self_parent_when_displaying_error_then_uses_exact_message() {
    let err = build("A > A").unwrap_err();

    assert_eq!(err.to_string(), "Invalid! Node cannot be a parent of itself");
}

#[test]
fn given_two_node_cycle_when_building_then_passes_validation() {
    let tree = build("A > B; B > A").unwrap();

    assert_eq!(tree.children_of("A"), ["B"]);
    assert_eq!(tree.children_of("B"), ["A"]);
}

#[test]
fn given_acyclic_chain_without_repeats_when_building_then_each_label_is_one_node() {
    let input = "root > a, b > c; a > d, e; e > f";
    let tree = build(input).unwrap();

    let mentioned = ["root", "a", "b", "c", "d", "e", "f", "a, b"];
    for label in mentioned {
        assert!(tree.contains(label), "missing node {label}");
    }
    assert_eq!(tree.len(), mentioned.len());
}

#[test]
fn given_mid_chain_comma_when_building_then_creates_comma_labelled_node() {
    let tree = build("A > B, C > D").unwrap();

    assert_eq!(ids(&tree), vec!["A", "B", "C", "B, C", "D"]);
    assert_eq!(tree.children_of("B, C"), ["D"]);
    assert!(tree.children_of("B").is_empty());
}
