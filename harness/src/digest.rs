//! Content digests with domain separation.
//!
//! Used to fingerprint node logs so two runs can be compared by a single
//! string. Format: `"sha256:<hex_digest>"`.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Domain prefix for node log digests.
pub const DOMAIN_NODE_LOG: &[u8] = b"LINPUZZLE::NODE_LOG::V1\0";

/// A content-addressed hash with algorithm identifier.
///
/// Invariant: the inner string contains exactly one `:` with non-empty text
/// on both sides (enforced by [`ContentHash::parse`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"` format.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 || s[colon + 1..].contains(':') {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    /// The algorithm portion (e.g. `"sha256"`).
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    /// The hex digest portion.
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }

    fn from_sha256(hasher: Sha256) -> Self {
        let full = format!("sha256:{}", hex::encode(hasher.finalize()));
        Self { full, colon: 6 }
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}

impl TryFrom<String> for ContentHash {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s).ok_or_else(|| format!("not an algorithm:digest string: {s:?}"))
    }
}

impl From<ContentHash> for String {
    fn from(h: ContentHash) -> Self {
        h.full
    }
}

/// Incremental SHA-256 over a sequence of byte chunks, seeded with a domain
/// prefix.
#[derive(Debug, Clone)]
pub struct StreamDigest {
    hasher: Sha256,
}

impl StreamDigest {
    #[must_use]
    pub fn new(domain: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(domain);
        Self { hasher }
    }

    /// Feed one chunk. Chunks are length-prefixed so that boundaries are
    /// part of the digest.
    pub fn update(&mut self, chunk: &[u8]) {
        self.hasher.update((chunk.len() as u64).to_le_bytes());
        self.hasher.update(chunk);
    }

    /// Digest of everything fed so far. Does not consume the stream.
    #[must_use]
    pub fn current(&self) -> ContentHash {
        ContentHash::from_sha256(self.hasher.clone())
    }
}
