//! Instruction handlers for the audit ledger

pub mod anchor_audit;
pub mod init_table;
pub mod proof_count;

pub use anchor_audit::*;
pub use init_table::*;
pub use proof_count::*;
