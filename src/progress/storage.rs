//! Storage backends for the progress record

use super::{ProgressError, STORAGE_NAME};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::debug;

/// Persisted layout: `{"solved": ["id", ...]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    #[serde(default)]
    pub solved: Vec<String>,
}

/// Load/save of one progress record
pub trait ProgressStorage {
    /// `Ok(None)` when nothing was saved yet
    fn load(&self) -> Result<Option<ProgressRecord>, ProgressError>;

    fn save(&self, record: &ProgressRecord) -> Result<(), ProgressError>;
}

/// JSON file `<dir>/algoscope-progress.json`, written atomically
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStorage { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", STORAGE_NAME))
    }
}

impl Default for FileStorage {
    fn default() -> Self {
        Self::new(default_data_dir())
    }
}

impl ProgressStorage for FileStorage {
    fn load(&self) -> Result<Option<ProgressRecord>, ProgressError> {
        let path = self.path();
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)?;
        let record: ProgressRecord = serde_json::from_str(&contents)?;
        Ok(Some(record))
    }

    fn save(&self, record: &ProgressRecord) -> Result<(), ProgressError> {
        ensure_dir(&self.dir)?;
        let json = serde_json::to_vec_pretty(record)?;

        let path = self.path();
        let tmp_path = path.with_extension("json.tmp");
        {
            let mut file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&tmp_path)?;
            file.write_all(&json)?;
            file.flush()?;
        }
        fs::rename(tmp_path, &path)?;

        debug!(path = %path.display(), "progress saved");
        Ok(())
    }
}

fn ensure_dir(dir: &Path) -> Result<(), ProgressError> {
    if dir.is_file() {
        return Err(ProgressError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Default directory for the progress file
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("algoscope")
}

/// In-process storage; clones share the same record
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    record: Rc<RefCell<Option<ProgressRecord>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: ProgressRecord) -> Self {
        MemoryStorage {
            record: Rc::new(RefCell::new(Some(record))),
        }
    }

    /// Copy of the last saved record
    pub fn snapshot(&self) -> Option<ProgressRecord> {
        self.record.borrow().clone()
    }
}

impl ProgressStorage for MemoryStorage {
    fn load(&self) -> Result<Option<ProgressRecord>, ProgressError> {
        Ok(self.snapshot())
    }

    fn save(&self, record: &ProgressRecord) -> Result<(), ProgressError> {
        *self.record.borrow_mut() = Some(record.clone());
        Ok(())
    }
}
