//! Taleforge Core: local store, startup bootstrap, route table, configuration.
//!
//! This crate holds everything the terminal shell and the CLI share:
//! - SQLite-backed local store with idempotent schema setup
//! - One-shot, best-effort storage bootstrap running off the UI thread
//! - The fixed six-entry route table with exact path matching
//! - TOML application config with `dirs`-based defaults
//! - File library records kept in the store

pub mod bootstrap;
pub mod config;
pub mod library;
pub mod routes;
pub mod storage;

pub use bootstrap::{Bootstrap, StoreCell};
pub use config::{AppConfig, ConfigError};
pub use library::{FileKind, LibraryEntry};
pub use routes::{Route, RouteMatch, ROUTES};
pub use storage::{SqliteInitializer, StorageError, StorageInitializer, Store};
