//! # Configuration
//!
//! Where the café keeps its data. A [`CafeConfig`] is built from the command line
//! (`--dir`, falling back to `CAFE_DATA_DIR`, then `data`) and prepared once at
//! start-up: the directory is created if needed and every collection file is seeded
//! with an empty JSON array.

use clap::Args;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

pub const ORDERS_FILE: &str = "orders.json";
pub const MENU_FILE: &str = "menu_items.json";
pub const INVENTORY_FILE: &str = "inventory.json";

/// Directory names that belong to the project itself and may not hold data.
const RESERVED_DIRS: [&str; 3] = ["src", "tests", "target"];

/// Errors raised while preparing the data directory.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Data directory cannot be named src, tests or target: {0}")]
    ReservedName(PathBuf),
    #[error("Data path exists but is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Args)]
pub struct CafeConfig {
    /// Directory holding orders.json, menu_items.json and inventory.json
    #[arg(long = "dir", env = "CAFE_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,
}

impl CafeConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn orders_path(&self) -> PathBuf {
        self.data_dir.join(ORDERS_FILE)
    }

    pub fn menu_path(&self) -> PathBuf {
        self.data_dir.join(MENU_FILE)
    }

    pub fn inventory_path(&self) -> PathBuf {
        self.data_dir.join(INVENTORY_FILE)
    }

    /// Validates the data directory, creating it and seeding missing collection files.
    ///
    /// Existing files are left untouched.
    pub fn prepare(&self) -> Result<(), ConfigError> {
        let dir = &self.data_dir;
        let reserved = dir
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| RESERVED_DIRS.contains(&name));
        if reserved {
            return Err(ConfigError::ReservedName(dir.clone()));
        }

        match std::fs::metadata(dir) {
            Ok(meta) if !meta.is_dir() => return Err(ConfigError::NotADirectory(dir.clone())),
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {
                std::fs::create_dir_all(dir).map_err(|source| io_error(dir, source))?;
                info!(dir = %dir.display(), "Created data directory");
            }
            Err(source) => return Err(io_error(dir, source)),
        }

        for path in [self.orders_path(), self.menu_path(), self.inventory_path()] {
            seed(&path)?;
        }
        Ok(())
    }
}

fn seed(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Ok(());
    }
    std::fs::write(path, "[]\n").map_err(|source| io_error(path, source))?;
    info!(file = %path.display(), "Seeded empty collection");
    Ok(())
}

fn io_error(path: &Path, source: std::io::Error) -> ConfigError {
    ConfigError::Io {
        path: path.to_path_buf(),
        source,
    }
}
