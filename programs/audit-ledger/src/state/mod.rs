//! State definitions for the audit ledger

pub mod audit_table;

pub use audit_table::*;
