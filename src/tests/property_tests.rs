//! Property-based checks over arbitrary listing collections.

use crate::analysis::ListingAnalyzer;
use crate::domain::{Listing, ListingStatus};
use crate::errors::ListingError;
use crate::repository::ListingRepository;
use proptest::prelude::*;

fn status_strategy() -> impl Strategy<Value = ListingStatus> {
    prop_oneof![
        Just(ListingStatus::Available),
        Just(ListingStatus::Sold),
        Just(ListingStatus::Pending),
    ]
}

/// Listings with short addresses so duplicates show up regularly.
fn listing_strategy() -> impl Strategy<Value = Listing> {
    (
        "[1-9] [A-C][a-z]{2} St",
        0i64..2_000_000,
        any::<bool>(),
        0u32..8,
        status_strategy(),
    )
        .prop_map(|(address, price, residential, bedrooms, status)| {
            let listing = if residential {
                Listing::residential(address, price, bedrooms)
            } else {
                Listing::commercial(address, price, "Retail")
            };
            listing.unwrap().with_status(status)
        })
}

fn repository(listings: &[Listing]) -> ListingRepository {
    let mut repo = ListingRepository::new();
    for listing in listings {
        repo.add(listing.clone()).unwrap();
    }
    repo
}

proptest! {
    #[test]
    fn prop_partition_is_strict(listings in prop::collection::vec(listing_strategy(), 0..40)) {
        let analyzer = ListingAnalyzer::from_repository(&repository(&listings));
        let (residential, commercial) = analyzer.partition_by_variant();

        prop_assert_eq!(residential.len() + commercial.len(), listings.len());
        prop_assert!(residential.iter().all(|l| l.kind().is_residential()));
        prop_assert!(commercial.iter().all(|l| l.kind().is_commercial()));
    }

    #[test]
    fn prop_negative_price_is_rejected_without_change(
        listings in prop::collection::vec(listing_strategy(), 1..20),
        pick in any::<prop::sample::Index>(),
        bad_price in i64::MIN..0,
    ) {
        let mut repo = repository(&listings);
        let before = repo.snapshot();
        let address = listings[pick.index(listings.len())].address().to_string();

        prop_assert_eq!(
            repo.update_price(&address, bad_price),
            Err(ListingError::InvalidPrice(bad_price))
        );
        prop_assert_eq!(repo.snapshot(), before);
    }

    #[test]
    fn prop_remove_all_then_find_is_not_found(
        listings in prop::collection::vec(listing_strategy(), 1..20),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut repo = repository(&listings);
        let address = listings[pick.index(listings.len())].address().to_uppercase();

        // duplicates are allowed, so drain every copy of the address
        while repo.remove(&address).is_ok() {}

        prop_assert_eq!(
            repo.find_by_address(&address),
            Err(ListingError::NotFound(address.clone()))
        );
    }

    #[test]
    fn prop_price_range_results_are_in_bounds_and_ordered(
        listings in prop::collection::vec(listing_strategy(), 0..30),
        a in 0i64..2_000_000,
        b in 0i64..2_000_000,
    ) {
        let (min, max) = (a.min(b), a.max(b));
        let repo = repository(&listings);
        let expected: Vec<&Listing> = listings
            .iter()
            .filter(|l| l.price() >= min && l.price() <= max)
            .collect();

        match repo.find_by_price_range(min, max) {
            Ok(hits) => prop_assert_eq!(hits, expected),
            Err(e) => {
                prop_assert_eq!(e, ListingError::NoResults);
                prop_assert!(expected.is_empty());
            }
        }
    }

    #[test]
    fn prop_distinct_addresses_are_sorted_by_price(
        listings in prop::collection::vec(listing_strategy(), 0..30),
        limit in 0usize..40,
    ) {
        let analyzer = ListingAnalyzer::from_repository(&repository(&listings));
        let addresses = analyzer.distinct_addresses_by_price(limit);

        // First occurrence of each structurally equal listing, then a stable price sort.
        let mut distinct: Vec<&Listing> = Vec::new();
        for listing in &listings {
            if !distinct.contains(&listing) {
                distinct.push(listing);
            }
        }
        distinct.sort_by_key(|l| l.price());
        let expected: Vec<String> = distinct
            .into_iter()
            .take(limit)
            .map(|l| l.address().to_string())
            .collect();

        prop_assert!(addresses.len() <= limit);
        prop_assert_eq!(addresses, expected);
    }
}

#[test]
fn prop_concurrent_total_equals_sequential_sum() {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();

    proptest!(|(listings in prop::collection::vec(listing_strategy(), 0..50))| {
        let analyzer = ListingAnalyzer::from_repository(&repository(&listings));
        let expected: i64 = listings.iter().map(|l| l.price()).sum();

        let total = runtime.block_on(analyzer.total_price_concurrent()).unwrap();
        prop_assert_eq!(total, expected);
    });
}
