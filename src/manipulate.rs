// third-party imports
use memchr::memmem;

// ---

/// Returns at most `max_chars` characters of `s`, appending `suffix` only
/// when characters were cut off.
///
/// # Examples
///
/// ```
/// use strkit::manipulate::truncate;
///
/// assert_eq!(truncate("this is a test", 10, "..."), "this is a ...");
/// assert_eq!(truncate("123456", 10, "..."), "123456");
/// ```
pub fn truncate(s: &str, max_chars: usize, suffix: &str) -> String {
    match s.char_indices().nth(max_chars) {
        Some((at, _)) => format!("{}{}", &s[..at], suffix),
        None => s.to_owned(),
    }
}

/// Reverses all characters of `s`.
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Reverses `count` characters of `s` starting at character offset `start`.
///
/// Offsets are clamped to the string: a start at or beyond the last
/// character, or an effective count of one or less, leaves the string
/// unchanged.
pub fn reverse_range(s: &str, start: usize, count: usize) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    if chars.is_empty() || start >= chars.len() - 1 {
        return s.to_owned();
    }

    let count = count.min(chars.len() - start);
    if count <= 1 {
        return s.to_owned();
    }

    chars[start..start + count].reverse();
    chars.into_iter().collect()
}

/// Extracts the leftmost `n` characters, or the whole string if it is
/// shorter than that.
pub fn left(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((at, _)) => &s[..at],
        None => s,
    }
}

/// Extracts the rightmost `n` characters, or the whole string if it is
/// shorter than that.
pub fn right(s: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }
    match s.char_indices().nth_back(n - 1) {
        Some((at, _)) => &s[at..],
        None => s,
    }
}

/// Extracts the part before the `skip`-th occurrence of `token`.
///
/// Occurrences are counted from zero and may overlap, the search resumes
/// one character past each found position. Returns `None` when the token is
/// empty or does not occur often enough.
///
/// # Examples
///
/// ```
/// use strkit::manipulate::left_of;
///
/// assert_eq!(left_of("dummy@my.com", "@", 0), Some("dummy"));
/// assert_eq!(left_of("dummy.g.cs", ".", 1), Some("dummy.g"));
/// assert_eq!(left_of("dummy.g.cs", ".", 5), None);
/// ```
pub fn left_of<'a>(s: &'a str, token: &str, skip: usize) -> Option<&'a str> {
    find_nth(s, token, skip).map(|at| &s[..at])
}

/// Extracts the part before the last occurrence of `token`.
pub fn left_of_last<'a>(s: &'a str, token: &str) -> Option<&'a str> {
    find_last(s, token).map(|at| &s[..at])
}

/// Extracts the part after the `skip`-th occurrence of `token`.
///
/// Occurrence counting works as in [`left_of`].
pub fn right_of<'a>(s: &'a str, token: &str, skip: usize) -> Option<&'a str> {
    find_nth(s, token, skip).map(|at| &s[at + token.len()..])
}

/// Extracts the part after the last occurrence of `token`.
pub fn right_of_last<'a>(s: &'a str, token: &str) -> Option<&'a str> {
    find_last(s, token).map(|at| &s[at + token.len()..])
}

fn find_nth(s: &str, token: &str, skip: usize) -> Option<usize> {
    if token.is_empty() {
        return None;
    }

    let finder = memmem::Finder::new(token.as_bytes());
    let mut offset = 0;
    for _ in 0..skip {
        offset += finder.find(&s.as_bytes()[offset..])? + 1;
    }
    Some(offset + finder.find(&s.as_bytes()[offset..])?)
}

fn find_last(s: &str, token: &str) -> Option<usize> {
    if token.is_empty() {
        return None;
    }
    memmem::rfind(s.as_bytes(), token.as_bytes())
}
