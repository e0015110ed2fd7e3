//! One-shot storage bootstrap.
//!
//! `Bootstrap::start` hands the initializer to a detached thread the first
//! time it is called and does nothing afterwards. The outcome is only logged:
//! a failed or panicking initializer never reaches the caller, and the UI
//! carries on without a store. Views that need the store read it through
//! [`StoreCell`] and cope with it being absent.

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};
use std::thread::{self, JoinHandle};

use crate::storage::{StorageError, StorageInitializer, Store};

/// Shared slot the store lands in once initialization succeeds.
#[derive(Debug, Clone, Default)]
pub struct StoreCell(Arc<OnceLock<Mutex<Store>>>);

impl StoreCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_ready(&self) -> bool {
        self.0.get().is_some()
    }

    /// Lock the store, or `NotInitialized` if it never arrived.
    ///
    /// A poisoned lock is recovered: the connection itself stays valid.
    pub fn lock(&self) -> Result<MutexGuard<'_, Store>, StorageError> {
        let slot = self.0.get().ok_or(StorageError::NotInitialized)?;
        Ok(slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner()))
    }

    fn publish(&self, store: Store) -> bool {
        self.0.set(Mutex::new(store)).is_ok()
    }
}

/// Process-lifetime guard around the storage initializer.
pub struct Bootstrap {
    initializer: Arc<dyn StorageInitializer>,
    started: AtomicBool,
    attempts: Arc<AtomicUsize>,
    store: StoreCell,
}

impl std::fmt::Debug for Bootstrap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bootstrap")
            .field("started", &self.started.load(Ordering::SeqCst))
            .field("attempts", &self.attempts.load(Ordering::SeqCst))
            .field("ready", &self.store.is_ready())
            .finish()
    }
}

impl Bootstrap {
    pub fn new(initializer: impl StorageInitializer + 'static) -> Self {
        Self {
            initializer: Arc::new(initializer),
            started: AtomicBool::new(false),
            attempts: Arc::new(AtomicUsize::new(0)),
            store: StoreCell::new(),
        }
    }

    /// Kick off initialization. Only the first call spawns; it returns the
    /// worker's handle so tests can wait on it. Production code drops it.
    pub fn start(&self) -> Option<JoinHandle<()>> {
        if self
            .started
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::debug!("storage bootstrap already started; skipping");
            return None;
        }

        let initializer = Arc::clone(&self.initializer);
        let attempts = Arc::clone(&self.attempts);
        let cell = self.store.clone();

        let spawned = thread::Builder::new()
            .name("storage-init".into())
            .spawn(move || run_initializer(initializer.as_ref(), &attempts, &cell));

        match spawned {
            Ok(handle) => Some(handle),
            Err(e) => {
                tracing::error!("failed to spawn storage initializer thread: {}", e);
                None
            }
        }
    }

    pub fn store(&self) -> StoreCell {
        self.store.clone()
    }

    /// How many times the initializer has actually run (0 or 1).
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }
}

fn run_initializer(initializer: &dyn StorageInitializer, attempts: &AtomicUsize, cell: &StoreCell) {
    attempts.fetch_add(1, Ordering::SeqCst);
    tracing::info!("initializing local storage");

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| initializer.initialize()));
    match outcome {
        Ok(Ok(store)) => {
            if cell.publish(store) {
                tracing::info!("local storage ready");
            } else {
                tracing::warn!("local storage was already published; discarding duplicate");
            }
        }
        Ok(Err(e)) => {
            tracing::error!("storage initialization failed: {}", e);
        }
        Err(payload) => {
            let msg = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            tracing::error!("storage initializer panicked: {}", msg);
        }
    }
}
