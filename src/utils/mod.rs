//! Tracing setup and data-directory resolution.

use std::sync::Once;
use std::{env, fs, io, path::Path, path::PathBuf};

use dirs::home_dir;

const DEFAULT_DIR_NAME: &str = ".arthaku";
const MASTER_FILE: &str = "master_data.json";
const STATE_FILE: &str = "state.json";
const BACKUP_DIR: &str = "backups";
const CONFIG_DIR: &str = "config";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("arthaku_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// Returns the application-specific data directory, defaulting to `~/.arthaku`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("ARTHAKU_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// The storage base: an explicit override, or the default data directory.
pub fn resolve_base(root: Option<PathBuf>) -> PathBuf {
    root.unwrap_or_else(app_data_dir)
}

/// Path to the master data file holding every monthly snapshot.
pub fn master_file_in(base: &Path) -> PathBuf {
    base.join(MASTER_FILE)
}

/// Path to the shared state file (tracking the selected month).
pub fn state_file_in(base: &Path) -> PathBuf {
    base.join(STATE_FILE)
}

/// Directory holding timestamped copies of the master data file.
pub fn backups_dir_in(base: &Path) -> PathBuf {
    base.join(BACKUP_DIR)
}

/// Directory holding the user configuration file.
pub fn config_dir_in(base: &Path) -> PathBuf {
    base.join(CONFIG_DIR)
}

pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
