use crate::error::{Error, Result};
use std::path::PathBuf;

/// Resolve the aitrail data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. AITRAIL_PATH environment variable (with tilde expansion)
/// 3. System data directory
/// 4. ~/.aitrail (fallback for systems without a standard data directory)
pub fn resolve_data_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("AITRAIL_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("aitrail"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".aitrail"));
    }

    Err(Error::Config(
        "Could not determine data path: no HOME directory or system data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}
