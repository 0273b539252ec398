pub mod connection;
pub mod listings;

pub use connection::{init_db, Database};
pub use listings::{get_exported_listings, save_snapshot, ExportedListing};
