//! In-memory real-estate listing store with snapshot-based analytics.

pub mod analysis;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod export;
pub mod repository;
pub mod spreadsheets;

#[cfg(test)]
mod tests;

pub use analysis::ListingAnalyzer;
pub use domain::{Listing, ListingDetail, ListingKind, ListingStatus};
pub use errors::{ListingError, ListingResult};
pub use repository::{ListingRepository, Snapshot};
