pub mod booking;
pub mod calendar;
pub mod dates;
pub mod listing;
pub mod query;
pub mod search;
pub mod share;

pub use booking::{Booking, BookingStatus};
pub use listing::{Fees, Host, Listing, PropertyType, Review};
pub use search::{FilterParams, SearchParams, SortOption};
