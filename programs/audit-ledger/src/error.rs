//! Program-level errors for the audit ledger
//!
//! Proof contents are never validated; the only failures are structural.

use anchor_lang::prelude::*;

#[error_code]
pub enum LedgerError {
    #[msg("Audit table has reached the maximum account size")]
    LedgerFull,

    #[msg("Audit table account is smaller than its proof count requires")]
    TableTooSmall,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
