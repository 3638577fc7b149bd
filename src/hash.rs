// src/hash.rs

//! SHA-256 helpers for archive checksums
//!
//! Bazel's `sha256` attribute is the lowercase hex digest of the exact bytes
//! served for the archive URL, so hashing happens on the raw download, never
//! on decompressed content.

use sha2::{Digest, Sha256};
use std::io::{self, Write};

/// Hex-encoded SHA-256 of a byte slice
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Writer adapter that hashes every byte passed through to `inner`
pub struct Sha256Writer<W> {
    inner: W,
    hasher: Sha256,
    written: u64,
}

impl<W: Write> Sha256Writer<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            hasher: Sha256::new(),
            written: 0,
        }
    }

    /// Number of bytes hashed so far
    pub fn bytes_written(&self) -> u64 {
        self.written
    }

    /// Finish hashing, returning the inner writer and the hex digest
    pub fn finish(self) -> (W, String) {
        (self.inner, hex::encode(self.hasher.finalize()))
    }
}

impl<W: Write> Write for Sha256Writer<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        // Only the bytes the inner writer accepted count toward the digest
        self.hasher.update(&buf[..n]);
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
