use dirs::home_dir;
use std::sync::Once;
use std::{env, fs, path::Path, path::PathBuf};

use crate::errors::TrackerError;

const DEFAULT_DIR_NAME: &str = ".lifetrack_core";
const JOURNAL_DIR: &str = "journals";
const CONFIG_FILE: &str = "config.json";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("lifetrack_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// Returns the application-specific data directory, defaulting to `~/.lifetrack_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("LIFETRACK_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Absolute path to the managed journals directory.
pub fn journals_dir_in(base: &Path) -> PathBuf {
    base.join(JOURNAL_DIR)
}

/// Path to the configuration file inside the data directory.
pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

/// Creates the directory (and parents) when missing.
pub fn ensure_dir(path: &Path) -> Result<(), TrackerError> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
