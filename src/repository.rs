// src/repository.rs

use crate::domain::{Listing, ListingStatus};
use crate::errors::{ListingError, ListingResult};
use chrono::{NaiveDateTime, Utc};
use std::sync::Arc;
use tracing::debug;

/// Owns the working set of listings, in insertion order.
///
/// Duplicate addresses are allowed. Every address-keyed operation acts on the
/// first match in insertion order, compared case-insensitively.
///
/// Mutation is single-writer: callers that share a repository across tasks must
/// serialize access themselves. Readers that run alongside mutation take a
/// [`Snapshot`] instead.
#[derive(Debug, Default)]
pub struct ListingRepository {
    listings: Vec<Listing>,
}

impl ListingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Appends a listing. `None` is the absent handle and fails with `NullEntity`.
    pub fn add(&mut self, listing: impl Into<Option<Listing>>) -> ListingResult<()> {
        let listing = listing.into().ok_or(ListingError::NullEntity)?;
        debug!(address = listing.address(), price = listing.price(), "listing added");
        self.listings.push(listing);
        Ok(())
    }

    /// Lazily renders every listing, in insertion order.
    pub fn list_all(&self) -> ListingResult<impl Iterator<Item = String> + '_> {
        if self.listings.is_empty() {
            return Err(ListingError::EmptyRepository);
        }
        Ok(self.listings.iter().map(Listing::describe))
    }

    pub fn find_by_address(&self, address: &str) -> ListingResult<&Listing> {
        let index = self.position_of(address)?;
        debug!(address, index, "listing looked up");
        Ok(&self.listings[index])
    }

    /// Inclusive on both bounds. An empty match is reported as `NoResults`.
    pub fn find_by_price_range(&self, min: i64, max: i64) -> ListingResult<Vec<&Listing>> {
        if min < 0 || max < 0 {
            return Err(ListingError::InvalidArgument(format!(
                "price bounds cannot be negative (min {min}, max {max})"
            )));
        }
        if min > max {
            return Err(ListingError::InvalidArgument(format!(
                "min price {min} is greater than max price {max}"
            )));
        }

        let matches: Vec<&Listing> = self
            .listings
            .iter()
            .filter(|l| (min..=max).contains(&l.price()))
            .collect();

        debug!(min, max, hits = matches.len(), "price range searched");
        if matches.is_empty() {
            return Err(ListingError::NoResults);
        }
        Ok(matches)
    }

    pub fn update_price(&mut self, address: &str, new_price: i64) -> ListingResult<()> {
        let index = self.position_of(address)?;
        let listing = &mut self.listings[index];
        listing.update_price(new_price)?;
        debug!(address = listing.address(), price = new_price, "listing repriced");
        Ok(())
    }

    pub fn update_status(&mut self, address: &str, new_status: ListingStatus) -> ListingResult<()> {
        let index = self.position_of(address)?;
        let listing = &mut self.listings[index];
        listing.update_status(new_status);
        debug!(address = listing.address(), status = %new_status, "listing status changed");
        Ok(())
    }

    /// Removes the first match and hands it back; the rest keep their order.
    pub fn remove(&mut self, address: &str) -> ListingResult<Listing> {
        let index = self.position_of(address)?;
        let removed = self.listings.remove(index);
        debug!(address = removed.address(), "listing removed");
        Ok(removed)
    }

    /// Copies the current collection. The copy never observes later mutation.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            listings: Arc::from(self.listings.as_slice()),
            taken_at: Utc::now().naive_utc(),
        }
    }

    fn position_of(&self, address: &str) -> ListingResult<usize> {
        if address.trim().is_empty() {
            return Err(ListingError::InvalidArgument(
                "address cannot be empty".to_string(),
            ));
        }
        self.listings
            .iter()
            .position(|l| l.detail().address_matches(address))
            .ok_or_else(|| ListingError::NotFound(address.to_string()))
    }
}

/// Frozen copy of the repository's listings at one point in time.
///
/// Cloning a snapshot shares the same frozen data; taking a new snapshot from
/// the repository always copies.
#[derive(Debug, Clone)]
pub struct Snapshot {
    listings: Arc<[Listing]>,
    taken_at: NaiveDateTime,
}

impl Snapshot {
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Listing> {
        self.listings.iter()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn taken_at(&self) -> NaiveDateTime {
        self.taken_at
    }

    /// The export surface: one `describe()` line per listing, insertion order.
    pub fn describe_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.listings.iter().map(Listing::describe)
    }

    /// True when both snapshots are backed by the same frozen copy.
    pub fn shares_storage_with(&self, other: &Snapshot) -> bool {
        Arc::ptr_eq(&self.listings, &other.listings)
    }
}

// Content equality; when the snapshot was taken is irrelevant.
impl PartialEq for Snapshot {
    fn eq(&self, other: &Self) -> bool {
        self.listings == other.listings
    }
}

impl Eq for Snapshot {}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a Listing;
    type IntoIter = std::slice::Iter<'a, Listing>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
