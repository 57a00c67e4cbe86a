// std imports
use std::cmp::Ordering;

// ---

/// Byte order used when comparing byte arrays as unsigned magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    Big,
    Little,
}

impl Endianness {
    /// The byte order of the current target.
    pub fn native() -> Self {
        if cfg!(target_endian = "big") {
            Self::Big
        } else {
            Self::Little
        }
    }
}

// ---

/// Computes the bitwise NOT of every byte.
pub fn not(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().map(|b| !b).collect()
}

/// Computes the pairwise bitwise AND over the common prefix of the inputs.
pub fn and(left: &[u8], right: &[u8]) -> Vec<u8> {
    left.iter().zip(right).map(|(a, b)| a & b).collect()
}

/// Computes the pairwise bitwise OR over the common prefix of the inputs.
pub fn or(left: &[u8], right: &[u8]) -> Vec<u8> {
    left.iter().zip(right).map(|(a, b)| a | b).collect()
}

/// Compares two byte arrays as unsigned magnitudes in the given byte order,
/// zero-extending the shorter operand on its most significant side.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
///
/// use strkit::bytes::{compare, Endianness};
///
/// assert_eq!(compare(&[1, 2, 5], &[1, 3, 4], Endianness::Big), Ordering::Less);
/// assert_eq!(compare(&[1, 2, 5], &[1, 3, 4], Endianness::Little), Ordering::Greater);
/// ```
pub fn compare(left: &[u8], right: &[u8], endianness: Endianness) -> Ordering {
    let len = left.len().max(right.len());
    match endianness {
        Endianness::Big => {
            let left_pad = len - left.len();
            let right_pad = len - right.len();
            for i in 0..len {
                let a = if i < left_pad { 0 } else { left[i - left_pad] };
                let b = if i < right_pad { 0 } else { right[i - right_pad] };
                match a.cmp(&b) {
                    Ordering::Equal => continue,
                    unequal => return unequal,
                }
            }
            Ordering::Equal
        }
        Endianness::Little => {
            for i in (0..len).rev() {
                let a = left.get(i).copied().unwrap_or(0);
                let b = right.get(i).copied().unwrap_or(0);
                match a.cmp(&b) {
                    Ordering::Equal => continue,
                    unequal => return unequal,
                }
            }
            Ordering::Equal
        }
    }
}
