pub mod add;
pub mod commit;
pub mod init;
pub mod log;
pub mod show;
pub mod status;

use anyhow::{Context, Result};
use groot_core::REPO_DIR_NAME;
use std::path::PathBuf;

use crate::display;

pub fn get_repo_path(custom_path: Option<PathBuf>) -> Result<PathBuf> {
    match custom_path {
        Some(path) => Ok(path),
        None => Ok(std::env::current_dir()
            .context("Failed to determine current directory")?
            .join(REPO_DIR_NAME)),
    }
}

/// Prints a not-found report and yields `None` when `result` failed because a
/// commit or object is missing. Any other error is passed on.
pub fn report_not_found<T>(result: groot_core::Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_found() => {
            display::not_found(&e);
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
