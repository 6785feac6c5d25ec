use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use walrus_store::config::{DEFAULT_EPOCHS, DEFAULT_EXPLORER_BASE, DEFAULT_PROGRAM};
use walrus_store::{BlobStore, StoreConfig, WalrusStore};

#[derive(Parser, Debug)]
#[command(
    name = "walrus-store",
    version,
    about = "Store an audit bundle on Walrus and print its receipt as one JSON line"
)]
struct Cli {
    /// Bundle file to store
    file: PathBuf,
    /// Walrus CLI executable
    #[arg(long, env = "WALRUS_BIN", default_value = DEFAULT_PROGRAM)]
    walrus_bin: PathBuf,
    /// Replication duration for the stored blob, in epochs
    #[arg(long, env = "WALRUS_EPOCHS", default_value_t = DEFAULT_EPOCHS)]
    epochs: u32,
    /// Explorer root used to build the receipt URLs
    #[arg(long, env = "WALRUS_EXPLORER_URL", default_value = DEFAULT_EXPLORER_BASE)]
    explorer_url: String,
    /// Global walrus argument placed before `store` (repeatable)
    #[arg(long = "tool-arg", allow_hyphen_values = true)]
    tool_args: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let store = WalrusStore::new(StoreConfig {
        program: cli.walrus_bin,
        tool_args: cli.tool_args,
        epochs: cli.epochs,
        explorer_base: cli.explorer_url,
    });

    let receipt = match store.store(&cli.file) {
        Ok(receipt) => receipt,
        Err(e) => {
            eprintln!("error[{}]: {e}", e.kind());
            if let Some(output) = e.raw_output() {
                eprintln!("--- walrus output ---\n{output}");
            }
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string(&receipt) {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error[serialize]: {e}");
            ExitCode::FAILURE
        }
    }
}
