//! Platform Directories
//!
//! Where the dashboard keeps its config file and rolling logs.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::{Error, Result};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("dev", "taxidash", "taxi-dash").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

/// Config directory, created on first use
///
/// - **Linux**: `~/.config/taxi-dash/` or `$XDG_CONFIG_HOME/taxi-dash/`
/// - **macOS**: `~/Library/Application Support/dev.taxidash.taxi-dash/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\taxidash\taxi-dash\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.config_dir())
}

/// Data directory for the daily log files, created on first use
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.data_dir())
}
