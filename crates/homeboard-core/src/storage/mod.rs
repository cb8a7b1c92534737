mod data_store;

pub use data_store::{DataStore, LoadOutcome};

use std::path::PathBuf;

use crate::error::Result;

/// Returns `~/.config/homeboard[-dev]/` based on HOMEBOARD_ENV.
///
/// Set HOMEBOARD_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("HOMEBOARD_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("homeboard-dev")
    } else {
        base_dir.join("homeboard")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
