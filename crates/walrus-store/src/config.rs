//! Adapter configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PROGRAM: &str = "walrus";
pub const DEFAULT_EPOCHS: u32 = 5;
pub const DEFAULT_EXPLORER_BASE: &str = "https://walruscan.com/testnet";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct StoreConfig {
    /// Walrus CLI executable
    pub program: PathBuf,

    /// Global arguments placed before the `store` subcommand,
    /// e.g. `--context testnet` or `--config <path>`
    pub tool_args: Vec<String>,

    /// Replication duration requested for every stored blob
    pub epochs: u32,

    /// Explorer root used to build receipt URLs
    pub explorer_base: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_PROGRAM),
            tool_args: Vec::new(),
            epochs: DEFAULT_EPOCHS,
            explorer_base: DEFAULT_EXPLORER_BASE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let cfg: StoreConfig = serde_json::from_str(r#"{"epochs": 12}"#).unwrap();
        assert_eq!(cfg.epochs, 12);
        assert_eq!(cfg.program, PathBuf::from("walrus"));
        assert_eq!(cfg.explorer_base, DEFAULT_EXPLORER_BASE);
        assert!(cfg.tool_args.is_empty());
    }
}
