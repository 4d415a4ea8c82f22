use super::*;

#[test]
fn test_single_id() {
    assert_eq!(parse_correlation_id("7"), Some(7));
}

#[test]
fn test_concatenated_ids_take_last_token() {
    assert_eq!(parse_correlation_id("3 3 12"), Some(12));
}

#[test]
fn test_non_numeric_rejected() {
    assert_eq!(parse_correlation_id("Ctrl+K"), None);
    assert_eq!(parse_correlation_id("12a"), None);
    assert_eq!(parse_correlation_id(""), None);
}

#[test]
fn test_trailing_space_rejected() {
    // Last token is empty, so there is no id for this node's own element.
    assert_eq!(parse_correlation_id("12 "), None);
}

#[test]
fn test_pattern_matcher() {
    assert!(is_space_delimited_mmid("1 2 3"));
    assert!(is_space_delimited_mmid("42"));
    assert!(!is_space_delimited_mmid("4 two"));
    assert!(!is_space_delimited_mmid(" 4\t"));
}
