use stay_core::SearchParams;
use stay_store::{keys, PersistentStore};

/// History depth for the search bar dropdown.
pub const MAX_RECENT_SEARCHES: usize = 5;
/// History depth for the recently-viewed rail.
pub const MAX_RECENTLY_VIEWED: usize = 10;

/// Most-recent-first histories of searches and viewed listings, capped and
/// de-duplicated on every record.
pub struct RecentActivity {
    store: PersistentStore,
}

impl RecentActivity {
    pub fn new(store: PersistentStore) -> Self {
        Self { store }
    }

    pub fn searches(&self) -> Vec<SearchParams> {
        self.store.read(keys::RECENT_SEARCHES, Vec::new())
    }

    /// A repeat of the same (location, check-in, check-out) moves to the
    /// front rather than duplicating; guests alone do not distinguish
    /// searches.
    pub fn record_search(&self, search: &SearchParams) {
        let mut history = self.searches();
        history.retain(|s| {
            s.location != search.location
                || s.check_in != search.check_in
                || s.check_out != search.check_out
        });
        history.insert(0, search.clone());
        history.truncate(MAX_RECENT_SEARCHES);
        self.store.write(keys::RECENT_SEARCHES, &history);
    }

    pub fn viewed(&self) -> Vec<String> {
        self.store.read(keys::RECENTLY_VIEWED, Vec::new())
    }

    pub fn record_view(&self, listing_id: &str) {
        let mut history = self.viewed();
        history.retain(|id| id != listing_id);
        history.insert(0, listing_id.to_string());
        history.truncate(MAX_RECENTLY_VIEWED);
        self.store.write(keys::RECENTLY_VIEWED, &history);
    }
}
