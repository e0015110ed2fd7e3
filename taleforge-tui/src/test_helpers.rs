//! Test helpers: stub initializers and buffer inspection.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use ratatui::buffer::Buffer;
use taleforge_core::{Bootstrap, StorageError, StorageInitializer, Store};

struct CountingInitializer {
    calls: Arc<AtomicUsize>,
}

impl StorageInitializer for CountingInitializer {
    fn initialize(&self) -> Result<Store, StorageError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Store::open_in_memory()
    }
}

struct FailingInitializer;

impl StorageInitializer for FailingInitializer {
    fn initialize(&self) -> Result<Store, StorageError> {
        Err(StorageError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "data dir is read-only",
        )))
    }
}

/// Bootstrap over an in-memory store, plus a counter of initializer calls.
pub fn counting_bootstrap() -> (Arc<Bootstrap>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let boot = Bootstrap::new(CountingInitializer {
        calls: calls.clone(),
    });
    (Arc::new(boot), calls)
}

pub fn failing_bootstrap() -> Arc<Bootstrap> {
    Arc::new(Bootstrap::new(FailingInitializer))
}

/// Buffer rows as strings, one per line, trailing blanks kept.
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}
