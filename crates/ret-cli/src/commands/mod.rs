pub mod config;
pub mod export;
pub mod process;
pub mod run;

use std::path::{Path, PathBuf};

use ret_core::{RetConfig, RetError};

/// Default location of the user configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ret")
        .join("config.json")
}

/// Load the configuration given on the command line, else the user file, else defaults.
pub fn load_config(config_path: Option<&str>) -> Result<RetConfig, RetError> {
    let path = match config_path {
        Some(path) => PathBuf::from(path),
        None => {
            let path = default_config_path();
            if !path.exists() {
                return Ok(RetConfig::default());
            }
            path
        }
    };

    read_config(&path)
}

fn read_config(path: &Path) -> Result<RetConfig, RetError> {
    RetConfig::from_file(path).map_err(|e| {
        RetError::Config(format!("failed to load {}: {}", path.display(), e))
    })
}
