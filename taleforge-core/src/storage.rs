//! Local persistent store and the initializer trait.
//!
//! The store is a single SQLite file. Opening it creates any missing tables,
//! so `Store::open` can be called on a fresh or an existing database alike.

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension};
use thiserror::Error;

/// Schema version written by this build.
pub const SCHEMA_VERSION: u32 = 1;

/// Structured error types for storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("database schema v{found} is newer than supported v{supported}")]
    UnsupportedSchema { found: u32, supported: u32 },

    #[error("storage has not been initialized")]
    NotInitialized,
}

/// Prepares the local store. Called once per application lifetime.
pub trait StorageInitializer: Send + Sync {
    fn initialize(&self) -> Result<Store, StorageError>;
}

/// Opens (and if needed creates) the SQLite store at a fixed path.
#[derive(Debug, Clone)]
pub struct SqliteInitializer {
    db_path: PathBuf,
}

impl SqliteInitializer {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}

impl StorageInitializer for SqliteInitializer {
    fn initialize(&self) -> Result<Store, StorageError> {
        Store::open(&self.db_path)
    }
}

/// Handle to the local store.
pub struct Store {
    pub(crate) conn: Connection,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("path", &self.conn.path())
            .finish()
    }
}

impl Store {
    /// Open the store at `path`, creating parent directories and schema.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// In-memory store with the full schema. Contents vanish on drop.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    fn initialize_schema(&self) -> Result<(), StorageError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS schema_meta (
                version INTEGER NOT NULL
            );
            CREATE TABLE IF NOT EXISTS library_files (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                kind TEXT NOT NULL,
                path TEXT NOT NULL,
                size_bytes INTEGER NOT NULL,
                added_at TEXT NOT NULL
            );",
        )?;

        let found: Option<u32> = self
            .conn
            .query_row("SELECT MAX(version) FROM schema_meta", [], |r| {
                r.get::<_, Option<u32>>(0)
            })
            .optional()?
            .flatten();

        match found {
            None => {
                self.conn.execute(
                    "INSERT INTO schema_meta (version) VALUES (?1)",
                    params![SCHEMA_VERSION],
                )?;
            }
            Some(v) if v > SCHEMA_VERSION => {
                return Err(StorageError::UnsupportedSchema {
                    found: v,
                    supported: SCHEMA_VERSION,
                });
            }
            Some(_) => {}
        }
        Ok(())
    }

    pub fn schema_version(&self) -> Result<u32, StorageError> {
        let v = self
            .conn
            .query_row("SELECT MAX(version) FROM schema_meta", [], |r| r.get(0))?;
        Ok(v)
    }
}
