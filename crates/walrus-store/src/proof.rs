//! Off-chain proof records and bundle re-verification.
//!
//! `proof_hash` reproduces the digest the audit backend attaches to every
//! anchored proof: SHA-256 over the JSON object with sorted keys and the
//! `", "` / `": "` separators, hex encoded. Keys and values are ASCII, so no
//! escaping differences arise.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::ser::Formatter;
use sha2::{Digest, Sha256};

/// Fields are declared in key order; serialization relies on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofRecord {
    pub blob_hash: String,
    pub fairness_score: u64,
    pub timestamp: u64,
}

impl ProofRecord {
    pub fn new(bundle_hash: &[u8; 32], fairness_score: u64, timestamp: u64) -> Self {
        Self {
            blob_hash: hex::encode(bundle_hash),
            fairness_score,
            timestamp,
        }
    }

    pub fn canonical_json(&self) -> serde_json::Result<Vec<u8>> {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
        self.serialize(&mut ser)?;
        Ok(buf)
    }

    /// Hex SHA-256 of the canonical JSON form (64 chars)
    pub fn proof_hash(&self) -> serde_json::Result<String> {
        let json = self.canonical_json()?;
        Ok(hex::encode(Sha256::digest(&json)))
    }
}

struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }
}

/// SHA-256 of a bundle file, streamed
pub fn bundle_digest(path: &Path) -> io::Result<[u8; 32]> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(hasher.finalize().into())
}

/// Check a fetched bundle against the `bundle_hash` recorded on-chain.
pub fn verify_bundle(path: &Path, expected: &[u8; 32]) -> io::Result<bool> {
    Ok(bundle_digest(path)? == *expected)
}
