pub mod browse;
pub mod list;

use anyhow::{Context, Result};
use clap::Args;
use leetvault_libs::catalog::ProblemStore;
use std::{env, ffi::OsString, path::PathBuf};

const DATA_FILE_KEY: &str = "LEETVAULT_DATA_FILE";

#[derive(Debug, Args)]
pub struct DataArgs {
    /// JSON file of problems to use instead of the built-in sample
    #[arg(long)]
    data: Option<OsString>,
}

/// The `--data` flag wins over the environment. `None` selects the sample.
fn data_path(flag: Option<&OsString>, env_value: Option<OsString>) -> Option<PathBuf> {
    match flag {
        Some(path) => Some(PathBuf::from(path)),
        None => env_value.map(PathBuf::from),
    }
}

pub fn load_store(args: &DataArgs) -> Result<ProblemStore> {
    match data_path(args.data.as_ref(), env::var_os(DATA_FILE_KEY)) {
        Some(path) => ProblemStore::from_json_file(&path).with_context(|| {
            let message = format!("failed to load problems from {}", path.display());
            tracing::error!("{}", message);
            message
        }),
        None => {
            tracing::info!(
                "{} environment variable is not set. Built-in sample problems will be used.",
                DATA_FILE_KEY
            );
            Ok(ProblemStore::sample())
        }
    }
}
