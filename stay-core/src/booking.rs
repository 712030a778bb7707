use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::listing::Listing;

/// Lifecycle of a booking. Created as `Confirmed`; a user may cancel, which
/// is one-way. `Completed` is reserved and never assigned by this engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
    Completed,
}

/// A trip reservation. Embeds a snapshot of the listing taken at creation
/// time so later catalog edits cannot retroactively alter a past trip.
/// Stored in insertion order; upcoming/past orderings are projections
/// computed by the booking service, never storage mutations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub listing_id: String,
    pub listing: Listing,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub total_price: i64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn is_cancelled(&self) -> bool {
        self.status == BookingStatus::Cancelled
    }
}
