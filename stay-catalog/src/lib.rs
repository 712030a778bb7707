pub mod catalog;
pub mod pricing;
pub mod search;

pub use catalog::{Catalog, CatalogError, AMENITIES, ITEMS_PER_PAGE};
pub use pricing::{quote, PriceQuote};
pub use search::{search, SearchPage};
