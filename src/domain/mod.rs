pub mod detail;
pub mod listing;
pub mod status;

pub use detail::ListingDetail;
pub use listing::{Listing, ListingKind};
pub use status::ListingStatus;
