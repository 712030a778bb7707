use stay_store::{keys, PersistentStore};
use tracing::debug;

/// The set of saved listing ids, persisted as an ordered sequence under the
/// `wishlist` key. Insertion order is display order; every mutator keeps the
/// no-duplicate invariant and the order of survivors.
pub struct WishlistService {
    store: PersistentStore,
}

impl WishlistService {
    pub fn new(store: PersistentStore) -> Self {
        Self { store }
    }

    pub fn ids(&self) -> Vec<String> {
        self.store.read(keys::WISHLIST, Vec::new())
    }

    pub fn contains(&self, listing_id: &str) -> bool {
        self.ids().iter().any(|id| id == listing_id)
    }

    /// Idempotent: a second add of the same id changes nothing.
    pub fn add(&self, listing_id: &str) {
        let mut ids = self.ids();
        if ids.iter().any(|id| id == listing_id) {
            return;
        }
        ids.push(listing_id.to_string());
        self.store.write(keys::WISHLIST, &ids);
        debug!("saved listing {} to wishlist", listing_id);
    }

    /// No-op when the id is not saved.
    pub fn remove(&self, listing_id: &str) {
        let mut ids = self.ids();
        let before = ids.len();
        ids.retain(|id| id != listing_id);
        if ids.len() != before {
            self.store.write(keys::WISHLIST, &ids);
        }
    }

    pub fn toggle(&self, listing_id: &str) {
        if self.contains(listing_id) {
            self.remove(listing_id);
        } else {
            self.add(listing_id);
        }
    }

    pub fn clear(&self) {
        self.store.write(keys::WISHLIST, &Vec::<String>::new());
    }
}
