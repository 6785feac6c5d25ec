//! Append an audit proof to a shared table
//!
//! Every writer takes the table as `mut`, so the runtime serializes
//! concurrent submissions and the stored order is the commit order. The
//! table address does not depend on its count, so a submitter never races
//! another writer for a slot.

use anchor_lang::prelude::*;

use crate::error::LedgerError;
use crate::events::AuditAnchored;
use crate::state::{AuditProof, AuditTable};

#[derive(Accounts)]
pub struct AnchorAudit<'info> {
    #[account(
        mut,
        constraint = audit_table.can_append() @ LedgerError::LedgerFull,
        realloc = AuditTable::space_for(audit_table.count as usize + 1),
        realloc::payer = submitter,
        realloc::zero = false,
    )]
    pub audit_table: Account<'info, AuditTable>,

    /// Pays rent for the additional proof bytes
    #[account(mut)]
    pub submitter: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<AnchorAudit>,
    bundle_hash: [u8; 32],
    fairness_score: u64,
    timestamp: u64,
) -> Result<()> {
    let table_info = ctx.accounts.audit_table.to_account_info();
    let table_key = table_info.key();
    let proof = AuditProof {
        bundle_hash,
        fairness_score,
        timestamp,
    };

    let index = {
        let mut data = table_info.try_borrow_mut_data()?;
        ctx.accounts.audit_table.append(&mut data, &proof)?
    };

    msg!(
        "Audit proof anchored: table={}, index={}, score={}, timestamp={}",
        table_key,
        index,
        fairness_score,
        timestamp
    );

    emit!(AuditAnchored {
        table: table_key,
        index,
        bundle_hash,
        fairness_score,
        timestamp,
    });

    Ok(())
}
