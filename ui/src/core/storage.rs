//! Durable key/value persistence behind a small backend trait.
//!
//! The history store only needs "read the blob" and "replace the blob", so a
//! backend is bound to one key at construction. Web builds use the browser's
//! `localStorage`; native builds write a JSON file under the platform data
//! directory; tests swap in [`MemoryStorage`].

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

/// Key under which the history list is stored.
pub const HISTORY_KEY: &str = "flashcardHistory";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),

    #[error("write failed: {0}")]
    Write(String),
}

pub trait StorageBackend {
    /// Stored value, or `None` when nothing was written or it can't be read.
    fn get(&self) -> Option<String>;

    fn set(&self, value: &str) -> Result<(), StorageError>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for Box<B> {
    fn get(&self) -> Option<String> {
        (**self).get()
    }

    fn set(&self, value: &str) -> Result<(), StorageError> {
        (**self).set(value)
    }
}

/// Backend used by the running app for the current platform.
pub fn default_backend(key: &str) -> Box<dyn StorageBackend> {
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(LocalStorage::new(key))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        match FileStorage::in_data_dir(key) {
            Ok(storage) => Box::new(storage),
            Err(err) => {
                tracing::warn!("{err}; history will only last for this run");
                Box::new(MemoryStorage::default())
            }
        }
    }
}

/// In-memory backend. Clones share the same cell, so a test can keep a handle
/// and inspect what the store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    cell: Rc<RefCell<Option<String>>>,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            cell: Rc::new(RefCell::new(Some(value.into()))),
            fail_writes: false,
        }
    }

    /// A backend whose writes always fail, as with a full or blocked quota.
    pub fn failing() -> Self {
        Self {
            cell: Rc::default(),
            fail_writes: true,
        }
    }

    pub fn snapshot(&self) -> Option<String> {
        self.cell.borrow().clone()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self) -> Option<String> {
        self.snapshot()
    }

    fn set(&self, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Write("quota exceeded".to_string()));
        }
        *self.cell.borrow_mut() = Some(value.to_string());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::LocalStorage;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{StorageBackend, StorageError};

    /// `window.localStorage` under a fixed key.
    #[derive(Debug, Clone)]
    pub struct LocalStorage {
        key: String,
    }

    impl LocalStorage {
        pub fn new(key: impl Into<String>) -> Self {
            Self { key: key.into() }
        }

        fn storage(&self) -> Result<web_sys::Storage, StorageError> {
            let window = web_sys::window()
                .ok_or_else(|| StorageError::Unavailable("window unavailable".into()))?;
            window
                .local_storage()
                .map_err(|_| StorageError::Unavailable("localStorage access denied".into()))?
                .ok_or_else(|| StorageError::Unavailable("localStorage missing".into()))
        }
    }

    impl StorageBackend for LocalStorage {
        fn get(&self) -> Option<String> {
            self.storage().ok()?.get_item(&self.key).ok().flatten()
        }

        fn set(&self, value: &str) -> Result<(), StorageError> {
            self.storage()?
                .set_item(&self.key, value)
                .map_err(|err| StorageError::Write(format!("{err:?}")))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::FileStorage;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::fs;
    use std::path::{Path, PathBuf};

    use super::{StorageBackend, StorageError};

    /// JSON file standing in for browser local storage on desktop.
    #[derive(Debug, Clone)]
    pub struct FileStorage {
        path: PathBuf,
    }

    impl FileStorage {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// `<platform data dir>/<key>.json`.
        pub fn in_data_dir(key: &str) -> Result<Self, StorageError> {
            let dirs = directories::ProjectDirs::from("com", "Flashdeck", "Flashdeck")
                .ok_or_else(|| StorageError::Unavailable("no home directory".into()))?;
            Ok(Self::new(dirs.data_dir().join(format!("{key}.json"))))
        }

        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl StorageBackend for FileStorage {
        fn get(&self) -> Option<String> {
            fs::read_to_string(&self.path).ok()
        }

        fn set(&self, value: &str) -> Result<(), StorageError> {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent).map_err(|err| StorageError::Write(err.to_string()))?;
            }
            fs::write(&self.path, value).map_err(|err| StorageError::Write(err.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_clones_share_state() {
        let storage = MemoryStorage::default();
        let handle = storage.clone();
        storage.set("[1]").unwrap();
        assert_eq!(handle.get().as_deref(), Some("[1]"));
    }

    #[test]
    fn failing_memory_rejects_writes() {
        let storage = MemoryStorage::failing();
        assert!(matches!(storage.set("[]"), Err(StorageError::Write(_))));
        assert_eq!(storage.get(), None);
    }

    #[test]
    fn file_storage_round_trips_and_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested").join("history.json"));
        assert_eq!(storage.get(), None);
        storage.set(r#"[{"id":1}]"#).unwrap();
        assert_eq!(storage.get().as_deref(), Some(r#"[{"id":1}]"#));
    }

    #[test]
    fn boxed_backend_delegates() {
        let inner = MemoryStorage::with_value("x");
        let boxed: Box<dyn StorageBackend> = Box::new(inner.clone());
        boxed.set("y").unwrap();
        assert_eq!(inner.snapshot().as_deref(), Some("y"));
    }
}
