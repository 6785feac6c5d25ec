//! Read the number of proofs anchored in a table

use anchor_lang::prelude::*;

use crate::state::AuditTable;

#[derive(Accounts)]
pub struct ProofCount<'info> {
    pub audit_table: Account<'info, AuditTable>,
}

pub fn handler(ctx: Context<ProofCount>) -> Result<u64> {
    Ok(ctx.accounts.audit_table.proof_count())
}
