//! Audit Table State
//!
//! Shared, append-only ledger of audit proofs. The table is a plain keypair
//! account (not a PDA), so each `init_table` call yields an independent
//! ledger addressed by its own public key.
//!
//! Layout:
//!
//! ```text
//! [discriminator 8][creator 32][count 8][proof 0: 48][proof 1: 48]...
//! ```
//!
//! Only the fixed header is Borsh-deserialized by Anchor. Proofs live in the
//! raw tail and are written in place, so an append touches 48 bytes no
//! matter how many proofs the table already holds.

use anchor_lang::prelude::*;

use crate::error::LedgerError;

/// Largest account the runtime will allocate (10 MiB)
pub const MAX_TABLE_SPACE: usize = 10 * 1024 * 1024;

/// A single anchored audit proof. Never mutated after it is written.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuditProof {
    /// SHA-256 digest of the stored dataset bundle
    pub bundle_hash: [u8; 32],

    /// Fairness score in the caller's fixed-point encoding
    pub fairness_score: u64,

    /// Caller-supplied time value; no on-chain clock is consulted
    pub timestamp: u64,
}

impl AuditProof {
    /// bundle_hash (32) + fairness_score (8) + timestamp (8)
    pub const SIZE: usize = 32 + 8 + 8;

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        out[..32].copy_from_slice(&self.bundle_hash);
        out[32..40].copy_from_slice(&self.fairness_score.to_le_bytes());
        out[40..].copy_from_slice(&self.timestamp.to_le_bytes());
        out
    }

    pub fn from_bytes(bytes: &[u8; Self::SIZE]) -> Self {
        let mut bundle_hash = [0u8; 32];
        bundle_hash.copy_from_slice(&bytes[..32]);
        let mut score = [0u8; 8];
        score.copy_from_slice(&bytes[32..40]);
        let mut timestamp = [0u8; 8];
        timestamp.copy_from_slice(&bytes[40..]);

        Self {
            bundle_hash,
            fairness_score: u64::from_le_bytes(score),
            timestamp: u64::from_le_bytes(timestamp),
        }
    }
}

#[account]
pub struct AuditTable {
    /// Payer of `init_table`. Informational only, grants no rights.
    pub creator: Pubkey,

    /// Number of proofs in the tail; also the index of the next proof
    pub count: u64,
}

impl AuditTable {
    /// Account discriminator (8) + creator (32) + count (8)
    pub const HEADER_SIZE: usize = 8 + 32 + 8;

    /// Account size needed to hold `proof_count` proofs
    pub const fn space_for(proof_count: usize) -> usize {
        Self::HEADER_SIZE + proof_count * AuditProof::SIZE
    }

    /// Whether one more proof still fits under the runtime account limit
    pub fn can_append(&self) -> bool {
        Self::space_for(self.count as usize + 1) <= MAX_TABLE_SPACE
    }

    pub fn proof_count(&self) -> u64 {
        self.count
    }

    /// Write `proof` at the next index of the account `data` and bump the
    /// count. Returns the proof's zero-based position.
    pub fn append(&mut self, data: &mut [u8], proof: &AuditProof) -> Result<u64> {
        let index = self.count;
        let start = Self::space_for(index as usize);
        let slot = data
            .get_mut(start..start + AuditProof::SIZE)
            .ok_or(LedgerError::TableTooSmall)?;
        slot.copy_from_slice(&proof.to_bytes());

        self.count = index.checked_add(1).ok_or(LedgerError::ArithmeticOverflow)?;
        Ok(index)
    }

    /// Read the proof at `index` from raw account data
    pub fn read_proof(data: &[u8], index: u64) -> Option<AuditProof> {
        let start = Self::space_for(usize::try_from(index).ok()?);
        let bytes = data.get(start..start + AuditProof::SIZE)?;
        Some(AuditProof::from_bytes(bytes.try_into().ok()?))
    }
}
