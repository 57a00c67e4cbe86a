// std imports
use std::str::FromStr;

// ---

/// Byte encodings supported by [`encode`] and [`crate::count::byte_size`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Utf16Le,
    Utf16Be,
}

// ---

/// Parses a value from a string, falling back to `default` when the string
/// does not parse, including out-of-range numbers.
///
/// # Examples
///
/// ```
/// use strkit::convert::parse_or;
///
/// assert_eq!(parse_or::<i32>("42", 0), 42);
/// assert_eq!(parse_or::<i32>("dummy", 7), 7);
/// assert_eq!(parse_or::<i16>("123456", 0), 0);
/// ```
pub fn parse_or<T: FromStr>(s: &str, default: T) -> T {
    s.parse().unwrap_or(default)
}

/// Parses a value from a string, falling back to the type's default.
pub fn parse_or_default<T: FromStr + Default>(s: &str) -> T {
    parse_or(s, T::default())
}

/// Parses a boolean, accepting `true` and `false` in any ASCII case with
/// surrounding whitespace, falling back to `default` otherwise.
pub fn parse_bool_or(s: &str, default: bool) -> bool {
    let s = s.trim();
    if s.eq_ignore_ascii_case("true") {
        true
    } else if s.eq_ignore_ascii_case("false") {
        false
    } else {
        default
    }
}

/// Encodes the string as bytes in the given encoding.
pub fn encode(s: &str, encoding: Encoding) -> Vec<u8> {
    match encoding {
        Encoding::Utf8 => s.as_bytes().to_vec(),
        Encoding::Utf16Le => s.encode_utf16().flat_map(u16::to_le_bytes).collect(),
        Encoding::Utf16Be => s.encode_utf16().flat_map(u16::to_be_bytes).collect(),
    }
}
