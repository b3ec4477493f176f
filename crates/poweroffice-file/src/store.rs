//! JSON file storage for session state.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde_json::{Map, Value};
use tracing::{debug, instrument, trace};

use poweroffice_core::error::StoreError;
use poweroffice_core::traits::SessionStore;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// A session store persisted as one flat JSON object of string values.
///
/// Every write is a read-modify-write under an exclusive lock on a sibling
/// `.lock` file, and lands through a temp file plus rename, so readers never
/// observe a half-written file. A missing file reads as empty.
///
/// # Example
///
/// ```no_run
/// use poweroffice_core::Session;
/// use poweroffice_file::FileStore;
///
/// let session = Session::new(FileStore::new("/var/lib/app/poweroffice.json"));
/// println!("valid: {}", session.is_valid()?);
/// # Ok::<(), poweroffice_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store at `path`. The file is created on first write.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the JSON file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        sibling(&self.path, "lock")
    }

    fn temp_path(&self) -> PathBuf {
        sibling(&self.path, "tmp")
    }

    fn ensure_parent(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    fn lock(&self) -> Result<File, StoreError> {
        self.ensure_parent()?;
        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(self.lock_path())?;
        lock_file.lock_exclusive()?;
        Ok(lock_file)
    }

    fn read(&self) -> Result<Map<String, Value>, StoreError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&content)? {
            Value::Object(map) => Ok(map),
            _ => Err(StoreError::Backend {
                message: format!("{} does not contain a JSON object", self.path.display()),
            }),
        }
    }

    fn write(&self, data: &Map<String, Value>) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(data)?;
        let temp_path = self.temp_path();

        {
            let mut file = File::create(&temp_path)?;
            file.write_all(content.as_bytes())?;
            file.sync_all()?;
        }

        // Tokens are secrets; keep the file private (Unix only)
        #[cfg(unix)]
        {
            let mut perms = fs::metadata(&temp_path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&temp_path, perms)?;
        }

        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }

    fn update<F>(&self, apply: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut Map<String, Value>),
    {
        let lock_file = self.lock()?;

        let result = self.read().and_then(|mut data| {
            apply(&mut data);
            self.write(&data)
        });

        FileExt::unlock(&lock_file)?;
        result
    }
}

fn sibling(path: &Path, extension: &str) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(extension);
    path.with_file_name(name)
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let data = self.read()?;
        trace!(key, found = data.contains_key(key), "file store get");

        Ok(data.get(key).and_then(|value| match value {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }))
    }

    #[instrument(skip(self, value), fields(path = %self.path.display()))]
    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.update(|data| {
            data.insert(key.to_string(), Value::String(value.to_string()));
        })?;
        debug!("stored value");
        Ok(())
    }

    #[instrument(skip(self, entries), fields(path = %self.path.display(), count = entries.len()))]
    fn put_many(&self, entries: &[(&str, &str)]) -> Result<(), StoreError> {
        self.update(|data| {
            for (key, value) in entries {
                data.insert(key.to_string(), Value::String(value.to_string()));
            }
        })?;
        debug!("stored values");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn delete_all_with_prefix(&self, prefix: &str) -> Result<(), StoreError> {
        if !self.path.exists() {
            return Ok(());
        }
        self.update(|data| {
            data.retain(|key, _| !key.starts_with(prefix));
        })?;
        debug!("deleted values with prefix");
        Ok(())
    }
}
