//! Events emitted on ledger state changes

use anchor_lang::prelude::*;

#[event]
pub struct TableInitialized {
    pub table: Pubkey,
    pub creator: Pubkey,
}

#[event]
pub struct AuditAnchored {
    pub table: Pubkey,
    /// Position of the proof in the table's sequence
    pub index: u64,
    pub bundle_hash: [u8; 32],
    pub fairness_score: u64,
    pub timestamp: u64,
}
