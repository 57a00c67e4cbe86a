use super::*;

#[test]
fn test_error_display() {
    assert_eq!(
        Error::InvalidPath("a..b".into()).to_string(),
        r#"invalid property path "a..b""#
    );
    assert_eq!(
        Error::from(wildmatch::Error::AmbiguousWildcards('*')).to_string(),
        "wildcard symbols must differ, got '*' for both"
    );
}
