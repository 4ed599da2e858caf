//! Content Hash Value Object
//!
//! A fixed-length, immutable digest of a file's full byte content.
//! Two files with identical bytes always share a hash, whatever their
//! name, location or modification time.

use std::fmt;
use std::io::{self, Read};
use std::str::FromStr;

use sha2::{Digest, Sha256};

/// Read buffer size used when hashing streams
pub const BLOCK_SIZE: usize = 64 * 1024;

/// Content hash value object
///
/// Wraps a raw SHA-256 digest. Displayed with the `sha256:` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    /// Prefix used by the textual form
    pub const PREFIX: &'static str = "sha256:";

    /// Wrap an already computed digest
    pub const fn from_digest(digest: [u8; 32]) -> Self {
        Self(digest)
    }

    /// Hash an in-memory byte slice
    pub fn from_bytes(content: &[u8]) -> Self {
        Self(Sha256::digest(content).into())
    }

    /// Hash a reader to exhaustion, `BLOCK_SIZE` bytes at a time
    pub fn from_reader<R: Read>(reader: R) -> io::Result<Self> {
        let mut hasher = ContentHasher::new();
        hasher.consume(reader)?;
        Ok(hasher.finish())
    }

    /// Raw digest bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex without prefix
    pub fn hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Abbreviated hex, handy in log lines
    pub fn short(&self) -> String {
        hex::encode(&self.0[..6])
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.hex())
    }
}

/// Error returned when parsing a textual hash fails
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid content hash '{input}': expected 64 hex characters")]
pub struct ParseHashError {
    input: String,
}

impl FromStr for ContentHash {
    type Err = ParseHashError;

    /// Accepts `sha256:<hex>` or bare hex
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.strip_prefix(Self::PREFIX).unwrap_or(s);
        let mut digest = [0u8; 32];
        hex::decode_to_slice(raw, &mut digest).map_err(|_| ParseHashError {
            input: s.to_string(),
        })?;
        Ok(Self(digest))
    }
}

/// Incremental hasher for content that arrives in pieces
#[derive(Debug, Clone, Default)]
pub struct ContentHasher {
    inner: Sha256,
}

impl ContentHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk of bytes
    pub fn update(&mut self, chunk: &[u8]) {
        self.inner.update(chunk);
    }

    /// Feed everything a reader produces, returning the number of bytes read
    pub fn consume<R: Read>(&mut self, mut reader: R) -> io::Result<u64> {
        let mut buf = vec![0u8; BLOCK_SIZE];
        let mut total = 0u64;
        loop {
            let n = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            self.inner.update(&buf[..n]);
            total += n as u64;
        }
        Ok(total)
    }

    pub fn finish(self) -> ContentHash {
        ContentHash(self.inner.finalize().into())
    }
}
