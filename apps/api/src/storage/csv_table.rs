use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use super::StorageError;

/// Result of a conditional append.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    Inserted,
    Duplicate,
}

/// A typed, append-only CSV file. The header row comes from the field names of
/// `T` and is written the first time a row lands in an empty or missing file.
///
/// All reads and writes of one table are serialized through `lock`, which
/// makes `append_unique` a check-then-insert without interleaving writers.
pub struct CsvTable<T> {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
    _row: PhantomData<fn() -> T>,
}

impl<T> CsvTable<T>
where
    T: Serialize + DeserializeOwned + Send + 'static,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
            _row: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every row. A missing file is an empty table; rows that do not
    /// parse are logged with their line number and skipped.
    pub async fn load_all(&self) -> Result<Vec<T>, StorageError> {
        let path = self.path.clone();
        let lock = Arc::clone(&self.lock);
        tokio::task::spawn_blocking(move || {
            let _guard = lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            read_rows(&path)
        })
        .await?
    }

    /// Appends a row unconditionally.
    pub async fn append(&self, record: T) -> Result<(), StorageError> {
        let path = self.path.clone();
        let lock = Arc::clone(&self.lock);
        tokio::task::spawn_blocking(move || {
            let _guard = lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            write_row(&path, &record)
        })
        .await?
    }

    /// Appends `record` unless an existing row matches it under `same_key`.
    /// The scan is linear over the whole file.
    pub async fn append_unique<F>(
        &self,
        record: T,
        same_key: F,
    ) -> Result<AppendOutcome, StorageError>
    where
        F: Fn(&T, &T) -> bool + Send + 'static,
    {
        let path = self.path.clone();
        let lock = Arc::clone(&self.lock);
        tokio::task::spawn_blocking(move || {
            let _guard = lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let existing: Vec<T> = read_rows(&path)?;
            if existing.iter().any(|row| same_key(row, &record)) {
                return Ok(AppendOutcome::Duplicate);
            }
            write_row(&path, &record)?;
            Ok(AppendOutcome::Inserted)
        })
        .await?
    }
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StorageError> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(file);
    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for result in reader.deserialize::<T>() {
        match result {
            Ok(row) => rows.push(row),
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                skipped += 1;
                let line = e.position().map(|p| p.line()).unwrap_or_default();
                warn!("Skipping unreadable row at {}:{line}: {e}", path.display());
            }
        }
    }
    debug!(
        "Read {} rows from {} ({skipped} skipped)",
        rows.len(),
        path.display()
    );
    Ok(rows)
}

fn write_row<T: Serialize>(path: &Path, record: &T) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let needs_header = match fs::metadata(path) {
        Ok(meta) => meta.len() == 0,
        Err(e) if e.kind() == ErrorKind::NotFound => true,
        Err(e) => return Err(e.into()),
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(needs_header)
        .from_writer(file);
    writer.serialize(record)?;
    writer.flush()?;
    Ok(())
}
