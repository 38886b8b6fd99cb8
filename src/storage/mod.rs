pub mod bin_backend;

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use dirs::home_dir;

use crate::domain::Record;
use crate::errors::StoreError;
use crate::store::RecordStore;

const DEFAULT_DIR_NAME: &str = ".deskbook";

/// Data file names, one flat file per program.
pub const MONEY_FILE: &str = "money.dat";
pub const TASKS_FILE: &str = "tasks.dat";
pub const CONTACTS_FILE: &str = "contacts.dat";

/// Resolves and owns the application data directory holding the flat binary
/// data files.
#[derive(Debug, Clone)]
pub struct BinStorage {
    root: PathBuf,
}

impl BinStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self, StoreError> {
        let root = root.unwrap_or_else(default_data_dir);
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn new_default() -> Result<Self, StoreError> {
        Self::new(None)
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    pub fn data_path(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }

    pub fn save<R: Record>(
        &self,
        store: &RecordStore<R>,
        file_name: &str,
    ) -> Result<(), StoreError> {
        bin_backend::save_store_to_path(store, &self.data_path(file_name))
    }

    pub fn load<R: Record>(
        &self,
        file_name: &str,
        capacity: usize,
    ) -> Result<RecordStore<R>, StoreError> {
        bin_backend::load_store_from_path(&self.data_path(file_name), capacity)
    }
}

/// Application data directory, `~/.deskbook` unless `DESKBOOK_HOME`
/// overrides it.
pub fn default_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("DESKBOOK_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub(crate) fn ensure_dir(path: &Path) -> Result<(), StoreError> {
    fs::create_dir_all(path)?;
    Ok(())
}
