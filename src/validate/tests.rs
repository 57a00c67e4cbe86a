use rstest::rstest;

use super::*;

const NAMES: [&str; 3] = ["Bob", "Alice", "Carl"];

#[rstest]
#[case("David", CaseMatching::Insensitive, false)]
#[case("CARL", CaseMatching::Insensitive, true)]
#[case("alice", CaseMatching::Sensitive, false)]
#[case("Alice", CaseMatching::Sensitive, true)]
fn test_eq_any(#[case] s: &str, #[case] case: CaseMatching, #[case] expected: bool) {
    assert_eq!(eq_any(s, case, NAMES), expected);
}

#[test]
fn test_eq_any_empty_candidates() {
    assert!(!eq_any("Me", CaseMatching::Insensitive, []));
}

#[rstest]
#[case("", true)]
#[case("   ", true)]
#[case("\t\n", true)]
#[case(" x ", false)]
fn test_is_blank(#[case] s: &str, #[case] expected: bool) {
    assert_eq!(is_blank(s), expected);
}

#[rstest]
#[case("report.txt", true)]
#[case("notes.md", true)]
#[case("report.pdf", false)]
fn test_matches_any(#[case] subject: &str, #[case] expected: bool) {
    assert_eq!(matches_any(subject, ["*.md", "*.txt"]), expected);
}

#[test]
fn test_matches_any_empty_patterns() {
    assert!(!matches_any("anything", []));
}
