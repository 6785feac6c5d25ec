//! Canonical blob receipt and normalization of Walrus result shapes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, StoreError};
use crate::extract::first_json_array;
use crate::sanitize::strip_ansi;

/// Off-chain record of a successfully stored bundle.
///
/// All four fields are non-empty; a receipt is only ever built whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobReceipt {
    #[serde(rename = "blobId")]
    pub blob_id: String,
    #[serde(rename = "objectId")]
    pub object_id: String,
    #[serde(rename = "storageURL")]
    pub storage_url: String,
    #[serde(rename = "objectURL")]
    pub object_url: String,
}

impl BlobReceipt {
    pub fn new(blob_id: String, object_id: String, explorer_base: &str) -> Self {
        let base = explorer_base.trim_end_matches('/');
        Self {
            storage_url: format!("{base}/blob/{blob_id}"),
            object_url: format!("{base}/object/{object_id}"),
            blob_id,
            object_id,
        }
    }
}

/// Result shapes the Walrus CLI reports for a single stored file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOutcome {
    /// Fresh blob registered and certified in this run
    NewlyCreated { blob_id: String, object_id: String },
    /// Blob already certified on the network; no new object was created
    AlreadyCertified { blob_id: String },
    /// Anything else, named by its top-level key
    Unknown { shape: String },
}

/// One entry's result object. Only the known tags are read; sibling keys
/// such as `path` are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BlobStoreResult {
    newly_created: Option<NewlyCreated>,
    already_certified: Option<AlreadyCertified>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewlyCreated {
    blob_object: BlobObject,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AlreadyCertified {
    blob_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BlobObject {
    id: String,
    blob_id: String,
}

/// Classify the first entry of a parsed `store --json` array.
///
/// Entries are either wrapped as `{"blobStoreResult": {...}, "path": ...}`
/// or given bare as `{"newlyCreated": {...}, "path": ...}`.
pub fn classify(value: &Value) -> StoreOutcome {
    let Some(first) = value.as_array().and_then(|items| items.first()) else {
        return StoreOutcome::Unknown {
            shape: "empty".to_string(),
        };
    };
    let result = first.get("blobStoreResult").unwrap_or(first);

    match BlobStoreResult::deserialize(result) {
        Ok(BlobStoreResult {
            newly_created: Some(created),
            ..
        }) => StoreOutcome::NewlyCreated {
            blob_id: created.blob_object.blob_id,
            object_id: created.blob_object.id,
        },
        Ok(BlobStoreResult {
            already_certified: Some(certified),
            ..
        }) => StoreOutcome::AlreadyCertified {
            blob_id: certified.blob_id,
        },
        Ok(_) | Err(_) => StoreOutcome::Unknown {
            shape: shape_name(result),
        },
    }
}

fn shape_name(value: &Value) -> String {
    match value {
        Value::Object(map) => match map.keys().find(|key| *key != "path") {
            Some(key) => key.clone(),
            None => "empty".to_string(),
        },
        Value::Array(_) => "array".to_string(),
        Value::String(_) => "string".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::Bool(_) => "bool".to_string(),
        Value::Null => "null".to_string(),
    }
}

/// Turn raw captured tool output into a receipt.
///
/// Sanitation, extraction and classification run in that order; only a
/// newly created blob with non-empty identifiers yields a receipt.
pub fn parse_receipt(raw_output: &str, explorer_base: &str) -> Result<BlobReceipt> {
    let clean = strip_ansi(raw_output);

    let value = match first_json_array(&clean) {
        Some(Ok(value)) => value,
        Some(Err(source)) => {
            return Err(StoreError::InvalidJson {
                source,
                output: raw_output.to_string(),
            })
        }
        None => {
            return Err(StoreError::NoJsonFound {
                output: raw_output.to_string(),
            })
        }
    };

    match classify(&value) {
        StoreOutcome::NewlyCreated { blob_id, object_id }
            if !blob_id.is_empty() && !object_id.is_empty() =>
        {
            Ok(BlobReceipt::new(blob_id, object_id, explorer_base))
        }
        StoreOutcome::NewlyCreated { .. } => Err(StoreError::UnsupportedResultShape {
            shape: "newlyCreated (empty identifier)".to_string(),
            output: raw_output.to_string(),
        }),
        StoreOutcome::AlreadyCertified { .. } => Err(StoreError::UnsupportedResultShape {
            shape: "alreadyCertified".to_string(),
            output: raw_output.to_string(),
        }),
        StoreOutcome::Unknown { shape } => Err(StoreError::UnsupportedResultShape {
            shape,
            output: raw_output.to_string(),
        }),
    }
}
