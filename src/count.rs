// local imports
use crate::convert::Encoding;

// ---

/// Calculates the number of bytes the string occupies in the given encoding.
///
/// UTF-16 sizes count code units, so characters outside the basic
/// multilingual plane contribute four bytes.
///
/// # Examples
///
/// ```
/// use strkit::Encoding;
/// use strkit::count::byte_size;
///
/// assert_eq!(byte_size("Dummy!", Encoding::Utf8), 6);
/// assert_eq!(byte_size("Dummy!", Encoding::Utf16Le), 12);
/// ```
pub fn byte_size(s: &str, encoding: Encoding) -> usize {
    match encoding {
        Encoding::Utf8 => s.len(),
        Encoding::Utf16Le | Encoding::Utf16Be => s.encode_utf16().count() * 2,
    }
}
