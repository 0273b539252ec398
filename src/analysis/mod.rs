//! Read-only analytics over a repository [`Snapshot`].
//!
//! Nothing here mutates; every result either borrows from the snapshot or is
//! derived from it.

mod concurrent;

use crate::domain::{Listing, ListingStatus};
use crate::repository::{ListingRepository, Snapshot};
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::info;

pub struct ListingAnalyzer {
    snapshot: Snapshot,
}

impl ListingAnalyzer {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// Takes a fresh snapshot of `repository`.
    pub fn from_repository(repository: &ListingRepository) -> Self {
        Self::new(repository.snapshot())
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn count(&self) -> usize {
        self.snapshot.len()
    }

    /// Some listing, if any. Callers must not depend on which one.
    pub fn find_any(&self) -> Option<&Listing> {
        self.snapshot.iter().next()
    }

    pub fn find_first(&self) -> Option<&Listing> {
        self.snapshot.listings().first()
    }

    /// First listing, or the placeholder listing when the snapshot is empty.
    pub fn first_or_default(&self) -> Listing {
        self.first_or_else(Listing::placeholder)
    }

    pub fn first_or_else<F>(&self, fallback: F) -> Listing
    where
        F: FnOnce() -> Listing,
    {
        self.find_first().cloned().unwrap_or_else(fallback)
    }

    /// Vacuously true for an empty snapshot.
    pub fn all_sold(&self) -> bool {
        self.snapshot
            .iter()
            .all(|l| l.status() == ListingStatus::Sold)
    }

    pub fn any_available(&self) -> bool {
        self.snapshot
            .iter()
            .any(|l| l.status() == ListingStatus::Available)
    }

    pub fn none_below_price(&self, threshold: i64) -> bool {
        !self.snapshot.iter().any(|l| l.price() < threshold)
    }

    /// Keyed by the exact stored address. The first listing seen for an address wins.
    pub fn group_by_address(&self) -> HashMap<&str, &Listing> {
        let mut by_address = HashMap::new();
        for listing in &self.snapshot {
            by_address.entry(listing.address()).or_insert(listing);
        }
        by_address
    }

    /// `(residential, commercial)`, each in snapshot order.
    pub fn partition_by_variant(&self) -> (Vec<&Listing>, Vec<&Listing>) {
        self.snapshot
            .iter()
            .partition(|l| l.kind().is_residential())
    }

    /// Addresses of distinct listings, cheapest first, at most `limit` of them.
    ///
    /// Distinct means structurally equal listings collapse to the first one;
    /// two different listings at the same address both appear.
    pub fn distinct_addresses_by_price(&self, limit: usize) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut distinct: Vec<&Listing> = self
            .snapshot
            .iter()
            .filter(|l| seen.insert(*l))
            .collect();

        distinct.sort_by_key(|l| l.price());
        distinct
            .into_iter()
            .take(limit)
            .map(|l| l.address().to_string())
            .collect()
    }

    /// Ascending by price; equal prices keep snapshot order.
    pub fn sort_by_price(&self) -> Vec<&Listing> {
        let mut sorted: Vec<&Listing> = self.snapshot.iter().collect();
        sorted.sort_by_key(|l| l.price());
        sorted
    }

    pub fn cheapest(&self) -> Option<&Listing> {
        // min_by_key keeps the first of equal minima
        self.snapshot.iter().min_by_key(|l| l.price())
    }

    pub fn most_expensive(&self) -> Option<&Listing> {
        // max_by_key keeps the last of equal maxima, so scan backwards
        self.snapshot.iter().rev().max_by_key(|l| l.price())
    }

    pub fn group_by_status(&self) -> BTreeMap<ListingStatus, Vec<&Listing>> {
        let mut groups: BTreeMap<ListingStatus, Vec<&Listing>> = BTreeMap::new();
        for listing in &self.snapshot {
            groups.entry(listing.status()).or_default().push(listing);
        }
        groups
    }

    pub fn filter_by_condition(&self, min_price: i64, status: ListingStatus) -> Vec<&Listing> {
        self.snapshot
            .iter()
            .filter(|l| l.price() >= min_price && l.status() == status)
            .collect()
    }

    pub fn formatted_lines(&self) -> Vec<String> {
        self.snapshot
            .iter()
            .map(|l| format!("Formatted: {} - ${}", l.address(), l.price()))
            .collect()
    }

    pub fn log_listings(&self) {
        for listing in &self.snapshot {
            info!(
                address = listing.address(),
                price = listing.price(),
                status = %listing.status(),
                kind = listing.kind_label(),
                "listing"
            );
        }
    }
}
