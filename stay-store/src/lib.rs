pub mod app_config;
pub mod events;
pub mod medium;
pub mod store;

pub use app_config::Config;
pub use events::{ChangeHub, Subscription};
pub use medium::{FileMedium, MemoryMedium, StorageMedium, StoreError};
pub use store::{keys, PersistentStore};
