//! Walrus storage adapter for audit bundles.
//!
//! Drives the `walrus` CLI as a subprocess and normalizes its noisy,
//! multi-shaped `--json` output into a single [`BlobReceipt`]:
//!
//! ```text
//! raw output -> strip_ansi -> first_json_array -> classify -> BlobReceipt
//! ```
//!
//! Only freshly created blobs produce a receipt. Other shapes, such as an
//! already certified blob, fail with [`StoreError::UnsupportedResultShape`].

pub mod adapter;
pub mod config;
pub mod error;
pub mod extract;
pub mod proof;
pub mod receipt;
pub mod sanitize;

pub use adapter::{BlobStore, WalrusStore};
pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use receipt::{parse_receipt, BlobReceipt, StoreOutcome};
