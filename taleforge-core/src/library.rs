//! File library records kept in the local store.

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::params;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::{StorageError, Store};

/// Coarse file classification for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Audio,
    Text,
    Other,
}

impl FileKind {
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("wav" | "mp3" | "ogg" | "flac" | "m4a" | "opus") => FileKind::Audio,
            Some("txt" | "md" | "json" | "srt") => FileKind::Text,
            _ => FileKind::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FileKind::Audio => "audio",
            FileKind::Text => "text",
            FileKind::Other => "other",
        }
    }

    fn parse(s: &str) -> Self {
        match s {
            "audio" => FileKind::Audio,
            "text" => FileKind::Text,
            _ => FileKind::Other,
        }
    }
}

/// A file registered in the library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryEntry {
    pub id: String,
    pub name: String,
    pub kind: FileKind,
    pub path: String,
    pub size_bytes: u64,
    pub added_at: DateTime<Utc>,
}

impl Store {
    /// Register an existing file. The file itself is not copied.
    pub fn add_library_file(&self, path: &Path) -> Result<LibraryEntry, StorageError> {
        let meta = std::fs::metadata(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let entry = LibraryEntry {
            id: Uuid::new_v4().to_string(),
            name,
            kind: FileKind::from_path(path),
            path: path.display().to_string(),
            size_bytes: meta.len(),
            added_at: Utc::now(),
        };

        self.conn.execute(
            "INSERT INTO library_files (id, name, kind, path, size_bytes, added_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                entry.id,
                entry.name,
                entry.kind.as_str(),
                entry.path,
                entry.size_bytes as i64,
                entry.added_at.to_rfc3339(),
            ],
        )?;
        Ok(entry)
    }

    /// All library entries, newest first.
    pub fn list_library_files(&self) -> Result<Vec<LibraryEntry>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, kind, path, size_bytes, added_at
             FROM library_files ORDER BY added_at DESC, rowid DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            let kind: String = row.get(2)?;
            let size: i64 = row.get(4)?;
            let added: String = row.get(5)?;
            Ok(LibraryEntry {
                id: row.get(0)?,
                name: row.get(1)?,
                kind: FileKind::parse(&kind),
                path: row.get(3)?,
                size_bytes: size.max(0) as u64,
                added_at: DateTime::parse_from_rfc3339(&added)
                    .map(|t| t.with_timezone(&Utc))
                    .unwrap_or_default(),
            })
        })?;

        let mut entries = Vec::new();
        for entry in rows {
            entries.push(entry?);
        }
        Ok(entries)
    }

    /// Remove an entry by id. Returns whether a row was deleted.
    pub fn remove_library_file(&self, id: &str) -> Result<bool, StorageError> {
        let n = self
            .conn
            .execute("DELETE FROM library_files WHERE id = ?1", params![id])?;
        Ok(n > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_extension() {
        assert_eq!(FileKind::from_path(Path::new("a/b/take1.WAV")), FileKind::Audio);
        assert_eq!(FileKind::from_path(Path::new("notes.md")), FileKind::Text);
        assert_eq!(FileKind::from_path(Path::new("blob.bin")), FileKind::Other);
        assert_eq!(FileKind::from_path(Path::new("no_extension")), FileKind::Other);
    }

    #[test]
    fn add_list_remove() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("chapter1.txt");
        std::fs::write(&file, "Once upon a time").unwrap();

        let store = Store::open_in_memory().unwrap();
        let entry = store.add_library_file(&file).unwrap();
        assert_eq!(entry.name, "chapter1.txt");
        assert_eq!(entry.kind, FileKind::Text);
        assert_eq!(entry.size_bytes, 16);

        let listed = store.list_library_files().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, entry.id);

        assert!(store.remove_library_file(&entry.id).unwrap());
        assert!(!store.remove_library_file(&entry.id).unwrap());
        assert!(store.list_library_files().unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let store = Store::open_in_memory().unwrap();
        let err = store
            .add_library_file(Path::new("/nonexistent/voice.wav"))
            .unwrap_err();
        assert!(matches!(err, StorageError::Io(_)));
    }
}
