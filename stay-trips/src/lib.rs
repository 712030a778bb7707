pub mod bookings;
pub mod recent;
pub mod wishlist;

pub use bookings::{BookingError, BookingService};
pub use recent::RecentActivity;
pub use wishlist::WishlistService;
