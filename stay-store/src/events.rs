//! In-process change propagation for the persistent store.
//!
//! A single hub is shared by every context attached to the same medium. A
//! write notifies all matching listeners, in this context and in others, so
//! one code path handles both origins. Notifications carry the key only,
//! never the value: subscribers must re-read, their in-memory copy is a
//! cache invalidated by the signal.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tracing::warn;

type Listener = Box<dyn Fn(&str) + Send + Sync>;

struct Entry {
    id: u64,
    key: String,
    listener: Listener,
}

#[derive(Default)]
pub struct ChangeHub {
    entries: Mutex<Vec<Arc<Entry>>>,
    next_id: AtomicU64,
}

impl ChangeHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        self: &Arc<Self>,
        key: &str,
        listener: impl Fn(&str) + Send + Sync + 'static,
    ) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let entry = Arc::new(Entry {
            id,
            key: key.to_string(),
            listener: Box::new(listener),
        });
        match self.entries.lock() {
            Ok(mut entries) => entries.push(entry),
            Err(_) => warn!("change hub lock poisoned, subscription for {} dropped", key),
        }
        Subscription {
            hub: Arc::clone(self),
            id,
        }
    }

    /// Fan the change out to every listener registered for `key`. Listeners
    /// run outside the registry lock, so one may subscribe or unsubscribe
    /// without deadlocking.
    pub fn notify(&self, key: &str) {
        let matching: Vec<Arc<Entry>> = match self.entries.lock() {
            Ok(entries) => entries.iter().filter(|e| e.key == key).cloned().collect(),
            Err(_) => {
                warn!("change hub lock poisoned, notification for {} dropped", key);
                return;
            }
        };
        for entry in matching {
            (entry.listener)(key);
        }
    }

    fn unsubscribe(&self, id: u64) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.retain(|e| e.id != id);
        }
    }
}

/// Guard for a registered listener; dropping it unregisters.
pub struct Subscription {
    hub: Arc<ChangeHub>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.hub.unsubscribe(self.id);
    }
}
