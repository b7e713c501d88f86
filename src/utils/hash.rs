//! Content hashing using BLAKE3.
//!
//! # Usage
//!
//! ```ignore
//! use crate::utils::hash;
//!
//! let fp = hash::fingerprint("body { }"); // -> "a1b2c3d4"
//! let digest = hash::digest_file(path)?;  // -> 64-char hex
//! ```

use std::io;
use std::path::Path;

/// Length of the short fingerprint used in asset filenames.
pub const FINGERPRINT_LEN: usize = 8;

/// Compute the full BLAKE3 digest as lowercase hex.
#[inline]
pub fn digest<T: AsRef<[u8]> + ?Sized>(data: &T) -> String {
    hex::encode(blake3::hash(data.as_ref()).as_bytes())
}

/// Compute hash and return as 8-char hex fingerprint.
///
/// Useful for cache-busting filenames (e.g. `folio.a1b2c3d4.css`).
#[inline]
pub fn fingerprint<T: AsRef<[u8]> + ?Sized>(value: &T) -> String {
    let mut full = digest(value);
    full.truncate(FINGERPRINT_LEN);
    full
}

/// Digest a file on disk (streaming).
pub fn digest_file(path: &Path) -> io::Result<String> {
    let mut hasher = blake3::Hasher::new();
    let mut file = std::fs::File::open(path)?;
    io::copy(&mut file, &mut hasher)?;
    Ok(hex::encode(hasher.finalize().as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_is_stable() {
        assert_eq!(fingerprint("abc"), fingerprint("abc"));
        assert_ne!(fingerprint("abc"), fingerprint("abd"));
        assert_eq!(fingerprint("abc").len(), FINGERPRINT_LEN);
    }

    #[test]
    fn test_digest_file_matches_digest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "{\"name\":\"x\"}").unwrap();
        assert_eq!(digest_file(&path).unwrap(), digest("{\"name\":\"x\"}"));
    }
}
