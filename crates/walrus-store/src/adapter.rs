//! Walrus CLI driver.
//!
//! One `store` call spawns exactly one `walrus store` process and blocks
//! until it exits. There is no retry and no timeout here; callers wrap the
//! call if they need either. Independent calls share no state and may run
//! in parallel.

use std::path::Path;
use std::process::Command;

use tracing::{debug, info, instrument, warn};

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::receipt::{parse_receipt, BlobReceipt};

/// Stores a local file and returns its canonical receipt.
pub trait BlobStore {
    fn store(&self, path: &Path) -> Result<BlobReceipt>;
}

#[derive(Debug, Clone, Default)]
pub struct WalrusStore {
    config: StoreConfig,
}

impl WalrusStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn command(&self, path: &Path) -> Command {
        let mut cmd = Command::new(&self.config.program);
        cmd.args(&self.config.tool_args)
            .arg("store")
            .arg(path)
            .arg("--epochs")
            .arg(self.config.epochs.to_string())
            .arg("--json");
        cmd
    }

    /// Run the tool and return stdout followed by stderr as one text blob.
    fn run_tool(&self, path: &Path) -> Result<String> {
        let mut cmd = self.command(path);
        debug!(command = ?cmd, "invoking walrus");

        let out = cmd.output().map_err(|source| StoreError::Spawn {
            program: self.config.program.display().to_string(),
            source,
        })?;

        let mut output = String::from_utf8_lossy(&out.stdout).into_owned();
        output.push_str(&String::from_utf8_lossy(&out.stderr));

        if !out.status.success() {
            return Err(StoreError::ProcessFailure {
                status: out.status,
                output,
            });
        }

        Ok(output)
    }
}

impl BlobStore for WalrusStore {
    #[instrument(skip(self, path), fields(path = %path.display(), epochs = self.config.epochs))]
    fn store(&self, path: &Path) -> Result<BlobReceipt> {
        if !path.is_file() {
            return Err(StoreError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let result = self
            .run_tool(path)
            .and_then(|output| parse_receipt(&output, &self.config.explorer_base));

        match &result {
            Ok(receipt) => info!(
                blob_id = %receipt.blob_id,
                object_id = %receipt.object_id,
                "stored bundle on walrus"
            ),
            Err(e) => warn!(kind = e.kind(), error = %e, "walrus store failed"),
        }

        result
    }
}
