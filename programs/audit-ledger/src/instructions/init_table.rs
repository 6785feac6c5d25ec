//! Create a new shared audit table
//!
//! Not idempotent: every call allocates a fresh, unrelated ledger. Callers
//! distribute the resulting table address out-of-band.

use anchor_lang::prelude::*;

use crate::events::TableInitialized;
use crate::state::AuditTable;

#[derive(Accounts)]
pub struct InitTable<'info> {
    #[account(
        init,
        payer = creator,
        space = AuditTable::space_for(0),
    )]
    pub audit_table: Account<'info, AuditTable>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitTable>) -> Result<()> {
    let table_key = ctx.accounts.audit_table.key();
    let creator = ctx.accounts.creator.key();

    let table = &mut ctx.accounts.audit_table;
    table.creator = creator;
    table.count = 0;

    msg!("Audit table initialized: {} (creator: {})", table_key, creator);

    emit!(TableInitialized {
        table: table_key,
        creator,
    });

    Ok(())
}
