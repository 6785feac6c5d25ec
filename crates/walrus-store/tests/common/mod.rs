#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use walrus_store::StoreConfig;

pub const BASE: &str = "https://walruscan.com/testnet";

/// Scratch directory holding a bundle file and canned walrus output.
///
/// The fake tool is `sh -c <script> walrus ...`, so the adapter's own
/// arguments show up as `$1..$5` inside the script.
pub struct FakeWalrus {
    tmp: TempDir,
    pub bundle: PathBuf,
}

impl FakeWalrus {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let bundle = tmp.path().join("bundle.json");
        fs::write(&bundle, b"{\"rows\": 120, \"version\": \"1.0.0\"}\n").expect("write bundle");
        Self { tmp, bundle }
    }

    pub fn dir(&self) -> &Path {
        self.tmp.path()
    }

    /// Write `output` to a fixture file and return a script that prints it.
    pub fn printing(&self, output: &str) -> String {
        let fixture = self.tmp.path().join("walrus-output.txt");
        fs::write(&fixture, output).expect("write fixture");
        format!("cat '{}'", fixture.display())
    }

    pub fn config(&self, script: &str) -> StoreConfig {
        StoreConfig {
            program: "sh".into(),
            tool_args: vec!["-c".into(), script.into(), "walrus".into()],
            epochs: 5,
            explorer_base: BASE.to_string(),
        }
    }
}

pub fn newly_created(blob_id: &str, object_id: &str) -> String {
    format!(
        r#"[
  {{
    "blobStoreResult": {{
      "newlyCreated": {{
        "blobObject": {{
          "id": "{object_id}",
          "registeredEpoch": 312,
          "blobId": "{blob_id}",
          "size": 34,
          "encodingType": "RS2",
          "certifiedEpoch": 312,
          "storage": {{ "id": "0x77", "startEpoch": 312, "endEpoch": 317, "storageSize": 65023000 }},
          "deletable": false
        }},
        "resourceOperation": {{ "registerFromScratch": {{ "encodedLength": 65023000, "epochsAhead": 5 }} }},
        "cost": 11025000
      }}
    }},
    "path": "bundle.json"
  }}
]"#
    )
}

pub fn already_certified(blob_id: &str) -> String {
    format!(
        r#"[{{"blobStoreResult":{{"alreadyCertified":{{"blobId":"{blob_id}","event":{{"txDigest":"9xQ","eventSeq":"0"}},"endEpoch":340}}}},"path":"bundle.json"}}]"#
    )
}
