//! Log file setup
//!
//! The TUI owns stdout, so logs go to a file. The filter comes from
//! `ALGOSCOPE_LOG` (same syntax as `RUST_LOG`) and defaults to `info`.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "ALGOSCOPE_LOG";

/// Install a global subscriber appending to `path`
pub fn init(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| e as Box<dyn std::error::Error>)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_installs_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("algoscope.log");

        assert!(init(&path).is_ok());
        tracing::info!("hello from the log test");
        assert!(path.exists());

        // A global subscriber is already set
        assert!(init(&path).is_err());
    }

    #[test]
    fn test_init_rejects_unopenable_path() {
        let dir = TempDir::new().unwrap();
        assert!(init(dir.path()).is_err());
    }
}
