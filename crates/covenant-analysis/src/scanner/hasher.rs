//! Streaming SHA-256 content digests.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

/// SHA-256 of everything `reader` yields, read `chunk_size` bytes at a time.
/// Returns uppercase hex.
pub fn sha256_reader<R: Read>(mut reader: R, chunk_size: usize) -> io::Result<String> {
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; chunk_size.max(1)];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode_upper(hasher.finalize()))
}

/// SHA-256 of the file at `path` without loading it whole.
pub fn sha256_file(path: &Path, chunk_size: usize) -> io::Result<String> {
    sha256_reader(File::open(path)?, chunk_size)
}

/// Case-insensitive comparison of two hex digests.
#[inline]
pub fn digests_match(expected: &str, actual: &str) -> bool {
    expected.trim().eq_ignore_ascii_case(actual.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_SHA256: &str = "E3B0C44298FC1C149AFBF4C8996FB92427AE41E4649B934CA495991B7852B855";

    #[test]
    fn empty_input_known_digest() {
        assert_eq!(sha256_reader(&b""[..], 4096).unwrap(), EMPTY_SHA256);
    }

    #[test]
    fn chunk_size_does_not_change_digest() {
        let data = vec![7u8; 10_000];
        let a = sha256_reader(&data[..], 1).unwrap();
        let b = sha256_reader(&data[..], 4096).unwrap();
        let c = sha256_reader(&data[..], 1 << 20).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn output_is_uppercase_hex() {
        let digest = sha256_reader(&b"hello"[..], 4096).unwrap();
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn comparison_ignores_case() {
        assert!(digests_match(EMPTY_SHA256, &EMPTY_SHA256.to_lowercase()));
        assert!(!digests_match(EMPTY_SHA256, &EMPTY_SHA256[1..]));
    }
}
