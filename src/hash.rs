// third-party imports
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};

// ---

/// Computes the MD5 digest of the string's UTF-8 bytes as uppercase hex.
///
/// # Examples
///
/// ```
/// use strkit::hash::md5_hex;
///
/// assert_eq!(md5_hex(""), "D41D8CD98F00B204E9800998ECF8427E");
/// ```
pub fn md5_hex(s: &str) -> String {
    digest_hex::<Md5>(s)
}

/// Computes the SHA-1 digest of the string's UTF-8 bytes as uppercase hex.
pub fn sha1_hex(s: &str) -> String {
    digest_hex::<Sha1>(s)
}

/// Computes the SHA-256 digest of the string's UTF-8 bytes as uppercase hex.
pub fn sha256_hex(s: &str) -> String {
    digest_hex::<Sha256>(s)
}

/// Computes the SHA-384 digest of the string's UTF-8 bytes as uppercase hex.
pub fn sha384_hex(s: &str) -> String {
    digest_hex::<Sha384>(s)
}

/// Computes the SHA-512 digest of the string's UTF-8 bytes as uppercase hex.
pub fn sha512_hex(s: &str) -> String {
    digest_hex::<Sha512>(s)
}

fn digest_hex<D: Digest>(s: &str) -> String {
    hex::encode_upper(D::digest(s.as_bytes()))
}

#[cfg(test)]
mod tests;
