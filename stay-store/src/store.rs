//! The typed persistent key/value store.
//!
//! `read` never fails toward the caller: a missing key, unreadable medium or
//! payload that no longer matches the expected shape all degrade to the
//! caller-supplied default, logged at warning level. `write` is write-through
//! and then fans out a change notification; write failures are logged and
//! swallowed, leaving optimistic in-memory state to converge on the next
//! successful write.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{error, warn};

use crate::app_config::Config;
use crate::events::{ChangeHub, Subscription};
use crate::medium::{FileMedium, MemoryMedium, StorageMedium, StoreError};

/// Storage keys owned by this engine.
pub mod keys {
    pub const WISHLIST: &str = "wishlist";
    pub const BOOKINGS: &str = "bookings";
    pub const RECENT_SEARCHES: &str = "recent_searches";
    pub const RECENTLY_VIEWED: &str = "recently_viewed";
}

/// Handle on the shared medium and change hub. Cloning yields another
/// context over the same storage: a clone's writes are visible to this
/// handle's reads immediately and to its subscribers via the hub, which is
/// how separate views and tabs of the same origin are modeled.
#[derive(Clone)]
pub struct PersistentStore {
    medium: Arc<dyn StorageMedium>,
    hub: Arc<ChangeHub>,
}

impl PersistentStore {
    pub fn new(medium: Arc<dyn StorageMedium>) -> Self {
        Self {
            medium,
            hub: Arc::new(ChangeHub::new()),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryMedium::new()))
    }

    /// File-backed store rooted at the configured storage directory.
    pub fn from_config(config: &Config) -> Result<Self, StoreError> {
        Ok(Self::new(Arc::new(FileMedium::new(&config.storage.dir)?)))
    }

    pub fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.medium.get(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(err) => {
                    warn!("stored payload for {} failed to parse, using default: {}", key, err);
                    default
                }
            },
            Ok(None) => default,
            Err(err) => {
                warn!("storage read for {} failed, using default: {}", key, err);
                default
            }
        }
    }

    pub fn write<T: Serialize>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(err) => {
                error!("failed to serialize value for {}: {}", key, err);
                return;
            }
        };
        if let Err(err) = self.medium.set(key, &raw) {
            error!("storage write for {} failed: {}", key, err);
            return;
        }
        self.hub.notify(key);
    }

    /// React to changes of `key` from any context sharing this medium,
    /// including this handle's own writes. The callback receives the key
    /// only; re-read through the store for the new value.
    pub fn subscribe(&self, key: &str, listener: impl Fn(&str) + Send + Sync + 'static) -> Subscription {
        self.hub.subscribe(key, listener)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_write_then_read_through_any_handle() {
        let store = PersistentStore::in_memory();
        let other_context = store.clone();

        store.write(keys::WISHLIST, &vec!["l1".to_string()]);
        let seen: Vec<String> = other_context.read(keys::WISHLIST, Vec::new());
        assert_eq!(seen, vec!["l1".to_string()]);
    }

    #[test]
    fn test_absent_key_returns_default() {
        let store = PersistentStore::in_memory();
        let value: Vec<String> = store.read("nothing_here", Vec::new());
        assert!(value.is_empty());
        assert_eq!(store.read("nothing_here", 7u32), 7);
    }

    #[test]
    fn test_corrupt_payload_degrades_to_default() {
        let medium = Arc::new(MemoryMedium::new());
        medium.set(keys::WISHLIST, "{not json").unwrap();
        // Wrong shape must degrade too, not only invalid JSON.
        medium.set(keys::BOOKINGS, "{\"a\":1}").unwrap();

        let store = PersistentStore::new(medium);
        let wishlist: Vec<String> = store.read(keys::WISHLIST, Vec::new());
        assert!(wishlist.is_empty());
        let bookings: Vec<String> = store.read(keys::BOOKINGS, Vec::new());
        assert!(bookings.is_empty());
    }

    #[test]
    fn test_own_write_loops_back_to_subscriber() {
        let store = PersistentStore::in_memory();
        let hits = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&hits);
        let _sub = store.subscribe(keys::WISHLIST, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.write(keys::WISHLIST, &vec!["l1".to_string()]);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_cross_context_notification_without_polling() {
        let context_a = PersistentStore::in_memory();
        let context_b = context_a.clone();

        let observed: Arc<std::sync::Mutex<Vec<String>>> = Arc::default();
        let sink = Arc::clone(&observed);
        let reader = context_b.clone();
        let _sub = context_b.subscribe(keys::WISHLIST, move |key| {
            // Re-read on notification; the payload never rides along.
            let current: Vec<String> = reader.read(key, Vec::new());
            if let Ok(mut seen) = sink.lock() {
                *seen = current;
            }
        });

        context_a.write(keys::WISHLIST, &vec!["l1".to_string(), "l2".to_string()]);
        let seen = observed.lock().unwrap().clone();
        assert_eq!(seen, vec!["l1".to_string(), "l2".to_string()]);
    }

    #[test]
    fn test_file_backed_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store =
                PersistentStore::new(Arc::new(FileMedium::new(dir.path()).unwrap()));
            store.write(keys::RECENTLY_VIEWED, &vec!["l9".to_string()]);
        }
        let reopened = PersistentStore::new(Arc::new(FileMedium::new(dir.path()).unwrap()));
        let viewed: Vec<String> = reopened.read(keys::RECENTLY_VIEWED, Vec::new());
        assert_eq!(viewed, vec!["l9".to_string()]);
    }
}
