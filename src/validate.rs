// third-party imports
use wildmatch::Pattern;

// ---

/// Case handling for string comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMatching {
    /// Exact code point comparison.
    #[default]
    Sensitive,
    /// Unicode lowercase folding on both sides.
    Insensitive,
}

impl CaseMatching {
    fn eq(self, left: &str, right: &str) -> bool {
        match self {
            Self::Sensitive => left == right,
            Self::Insensitive => left.to_lowercase() == right.to_lowercase(),
        }
    }
}

// ---

/// Checks whether the string equals any of the candidates.
///
/// # Examples
///
/// ```
/// use strkit::CaseMatching;
/// use strkit::validate::eq_any;
///
/// let names = ["Bob", "Alice", "Carl"];
/// assert!(eq_any("CARL", CaseMatching::Insensitive, names));
/// assert!(!eq_any("alice", CaseMatching::Sensitive, names));
/// ```
pub fn eq_any<'a, I>(s: &str, case: CaseMatching, candidates: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    candidates.into_iter().any(|candidate| case.eq(s, candidate))
}

/// Checks whether the string is empty or consists only of whitespace.
pub fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}

/// Checks whether any of the wildcard patterns matches the subject.
///
/// Patterns use the default `?`/`*` wildcards.
///
/// # Examples
///
/// ```
/// use strkit::validate::matches_any;
///
/// assert!(matches_any("report.txt", ["*.md", "*.txt"]));
/// assert!(!matches_any("report.pdf", ["*.md", "*.txt"]));
/// ```
pub fn matches_any<'a, I>(subject: &str, patterns: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    patterns
        .into_iter()
        .any(|pattern| Pattern::new(pattern).matches(subject))
}

#[cfg(test)]
mod tests;
