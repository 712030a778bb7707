use chrono::{NaiveDate, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use stay_core::dates::{local_today, nights_between};
use stay_core::{Booking, BookingStatus, Listing};
use stay_store::{keys, PersistentStore};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("stay must be at least one night, got {nights}")]
    InvalidStay { nights: i64 },
    #[error("guest count {guests} outside allowed range 1..={max}")]
    InvalidGuests { guests: u32, max: u32 },
}

/// Owns the booking sequence under the `bookings` key. Records are appended
/// in creation order and never reordered in storage; the upcoming/past views
/// are pure projections recomputed on every read.
pub struct BookingService {
    store: PersistentStore,
}

impl BookingService {
    pub fn new(store: PersistentStore) -> Self {
        Self { store }
    }

    pub fn all(&self) -> Vec<Booking> {
        self.store.read(keys::BOOKINGS, Vec::new())
    }

    pub fn get(&self, id: Uuid) -> Option<Booking> {
        self.all().into_iter().find(|b| b.id == id)
    }

    /// Validate, snapshot the listing and append the new record. Nothing is
    /// persisted when validation fails.
    pub fn create(
        &self,
        listing: &Listing,
        check_in: NaiveDate,
        check_out: NaiveDate,
        guests: u32,
        total_price: i64,
    ) -> Result<Booking, BookingError> {
        let nights = nights_between(check_in, check_out);
        if nights <= 0 {
            return Err(BookingError::InvalidStay { nights });
        }
        if guests == 0 || guests > listing.max_guests {
            return Err(BookingError::InvalidGuests {
                guests,
                max: listing.max_guests,
            });
        }

        let booking = Booking {
            id: Uuid::new_v4(),
            listing_id: listing.id.clone(),
            listing: listing.clone(),
            check_in,
            check_out,
            guests,
            total_price,
            status: BookingStatus::Confirmed,
            created_at: Utc::now(),
        };

        let mut bookings = self.all();
        bookings.push(booking.clone());
        self.store.write(keys::BOOKINGS, &bookings);
        info!("created booking {} for listing {}", booking.id, listing.id);
        Ok(booking)
    }

    /// One-way transition to cancelled. Silently ignores unknown ids.
    pub fn cancel(&self, id: Uuid) {
        let mut bookings = self.all();
        match bookings.iter_mut().find(|b| b.id == id) {
            Some(booking) => {
                booking.status = BookingStatus::Cancelled;
                self.store.write(keys::BOOKINGS, &bookings);
                info!("cancelled booking {}", id);
            }
            None => debug!("cancel requested for unknown booking {}", id),
        }
    }

    /// Trips still ahead as of `today`: not cancelled, check-in today or
    /// later, soonest first.
    pub fn upcoming_on(&self, today: NaiveDate) -> Vec<Booking> {
        let mut upcoming: Vec<Booking> = self
            .all()
            .into_iter()
            .filter(|b| !b.is_cancelled() && b.check_in >= today)
            .collect();
        upcoming.sort_by_key(|b| b.check_in);
        upcoming
    }

    /// Finished or abandoned trips as of `today`: checked out before today
    /// or cancelled, most recent check-in first.
    pub fn past_on(&self, today: NaiveDate) -> Vec<Booking> {
        let mut past: Vec<Booking> = self
            .all()
            .into_iter()
            .filter(|b| b.check_out < today || b.is_cancelled())
            .collect();
        past.sort_by(|a, b| b.check_in.cmp(&a.check_in));
        past
    }

    pub fn upcoming(&self) -> Vec<Booking> {
        self.upcoming_on(local_today())
    }

    pub fn past(&self) -> Vec<Booking> {
        self.past_on(local_today())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stay_core::{Fees, PropertyType};

    fn listing(id: &str, max_guests: u32) -> Listing {
        Listing {
            id: id.to_string(),
            title: format!("Stay {id}"),
            city: "Lisbon".to_string(),
            country: "Portugal".to_string(),
            area: String::new(),
            property_type: PropertyType::House,
            price_per_night: 90,
            rating: 4.7,
            reviews_count: 30,
            max_guests,
            bedrooms: 2,
            baths: 1,
            amenities: vec![],
            fees: Fees::default(),
            instant_book: true,
            free_cancellation: true,
            host: None,
            description: String::new(),
            reviews: vec![],
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn service() -> BookingService {
        BookingService::new(PersistentStore::in_memory())
    }

    #[test]
    fn test_create_snapshots_listing_and_confirms() {
        let bookings = service();
        let listing = listing("l1", 4);
        let booking = bookings
            .create(&listing, date(2026, 6, 1), date(2026, 6, 4), 2, 300)
            .expect("valid booking");

        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.listing_id, "l1");
        assert_eq!(booking.listing, listing);
        assert_eq!(bookings.all().len(), 1);
        assert_eq!(bookings.get(booking.id).map(|b| b.total_price), Some(300));
    }

    #[test]
    fn test_invalid_stays_persist_nothing() {
        let bookings = service();
        let listing = listing("l1", 4);

        let same_day = bookings.create(&listing, date(2026, 6, 1), date(2026, 6, 1), 2, 0);
        assert_eq!(same_day, Err(BookingError::InvalidStay { nights: 0 }));

        let inverted = bookings.create(&listing, date(2026, 6, 4), date(2026, 6, 1), 2, 0);
        assert_eq!(inverted, Err(BookingError::InvalidStay { nights: -3 }));

        let crowd = bookings.create(&listing, date(2026, 6, 1), date(2026, 6, 3), 5, 0);
        assert_eq!(crowd, Err(BookingError::InvalidGuests { guests: 5, max: 4 }));

        let nobody = bookings.create(&listing, date(2026, 6, 1), date(2026, 6, 3), 0, 0);
        assert_eq!(nobody, Err(BookingError::InvalidGuests { guests: 0, max: 4 }));

        assert!(bookings.all().is_empty());
    }

    #[test]
    fn test_cancel_is_one_way_and_silent_on_unknown() {
        let bookings = service();
        let listing = listing("l1", 4);
        let booking = bookings
            .create(&listing, date(2026, 6, 1), date(2026, 6, 4), 2, 300)
            .unwrap();

        bookings.cancel(Uuid::new_v4());
        assert_eq!(bookings.get(booking.id).unwrap().status, BookingStatus::Confirmed);

        bookings.cancel(booking.id);
        assert_eq!(bookings.get(booking.id).unwrap().status, BookingStatus::Cancelled);
    }

    #[test]
    fn test_upcoming_past_partition_is_date_only() {
        let bookings = service();
        let listing = listing("l1", 4);
        let today = date(2026, 6, 10);

        let finished = bookings
            .create(&listing, date(2026, 6, 1), date(2026, 6, 5), 2, 100)
            .unwrap();
        let checking_in_today = bookings
            .create(&listing, date(2026, 6, 10), date(2026, 6, 12), 2, 100)
            .unwrap();
        let later = bookings
            .create(&listing, date(2026, 6, 20), date(2026, 6, 22), 2, 100)
            .unwrap();
        let cancelled = bookings
            .create(&listing, date(2026, 6, 25), date(2026, 6, 28), 2, 100)
            .unwrap();
        bookings.cancel(cancelled.id);

        let upcoming = bookings.upcoming_on(today);
        let upcoming_ids: Vec<Uuid> = upcoming.iter().map(|b| b.id).collect();
        // Ascending by check-in; a stay starting today still counts.
        assert_eq!(upcoming_ids, vec![checking_in_today.id, later.id]);

        let past = bookings.past_on(today);
        let past_ids: Vec<Uuid> = past.iter().map(|b| b.id).collect();
        // Descending by check-in; cancelled trips land here regardless of dates.
        assert_eq!(past_ids, vec![cancelled.id, finished.id]);
    }

    #[test]
    fn test_storage_keeps_insertion_order() {
        let bookings = service();
        let listing = listing("l1", 4);
        let first = bookings
            .create(&listing, date(2026, 6, 20), date(2026, 6, 22), 1, 100)
            .unwrap();
        let second = bookings
            .create(&listing, date(2026, 6, 1), date(2026, 6, 3), 1, 100)
            .unwrap();

        let stored: Vec<Uuid> = bookings.all().iter().map(|b| b.id).collect();
        assert_eq!(stored, vec![first.id, second.id]);
    }
}
