//! Audit Ledger
//!
//! Anchor program that keeps a tamper-evident, append-only record of dataset
//! fairness audits. Each proof binds the hash of a bundle stored on Walrus to
//! a fairness score and a caller-supplied timestamp.
//!
//! Instructions:
//! - `init_table`: create a new shared ledger (one per call, no registry)
//! - `anchor_audit`: append a proof; no update or delete path exists
//! - `proof_count`: read the current length via return data

use anchor_lang::prelude::*;

pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod audit_ledger {
    use super::*;

    /// Create a new, empty audit table
    pub fn init_table(ctx: Context<InitTable>) -> Result<()> {
        instructions::init_table::handler(ctx)
    }

    /// Append an audit proof to the table
    pub fn anchor_audit(
        ctx: Context<AnchorAudit>,
        bundle_hash: [u8; 32],
        fairness_score: u64,
        timestamp: u64,
    ) -> Result<()> {
        instructions::anchor_audit::handler(ctx, bundle_hash, fairness_score, timestamp)
    }

    /// Number of proofs anchored so far
    pub fn proof_count(ctx: Context<ProofCount>) -> Result<u64> {
        instructions::proof_count::handler(ctx)
    }
}
