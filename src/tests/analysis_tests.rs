// src/tests/analysis_tests.rs

use super::utils::{addresses, demo_repository, three_listing_repository};
use crate::analysis::ListingAnalyzer;
use crate::domain::{Listing, ListingStatus};
use crate::repository::ListingRepository;

#[test]
fn demo_session_overview() {
    let analyzer = ListingAnalyzer::from_repository(&demo_repository());

    assert_eq!(analyzer.count(), 10);
    assert_eq!(analyzer.find_first().unwrap().address(), "123 Main St");
    assert!(analyzer.find_any().is_some());
    assert!(!analyzer.all_sold());
    assert!(analyzer.any_available());
    assert!(!analyzer.none_below_price(200_000));
    assert!(analyzer.none_below_price(150_000));

    assert_eq!(analyzer.cheapest().unwrap().address(), "101 Oak Ave");
    assert_eq!(analyzer.most_expensive().unwrap().address(), "303 Industrial Blvd");
}

#[test]
fn demo_session_partitions_and_groups() {
    let analyzer = ListingAnalyzer::from_repository(&demo_repository());

    let (residential, commercial) = analyzer.partition_by_variant();
    assert_eq!(residential.len(), 6);
    assert_eq!(commercial.len(), 4);
    assert!(residential.iter().all(|l| l.kind().is_residential()));
    assert!(commercial.iter().all(|l| l.kind().is_commercial()));

    let groups = analyzer.group_by_status();
    assert_eq!(
        addresses(groups[&ListingStatus::Sold].iter().copied()),
        vec!["101 Oak Ave", "303 Industrial Blvd", "505 Cedar Ln", "606 Commerce Dr"]
    );
    assert_eq!(groups[&ListingStatus::Available].len(), 6);
    assert!(!groups.contains_key(&ListingStatus::Pending));
}

#[test]
fn distinct_addresses_by_price_limits_and_sorts() {
    let analyzer = ListingAnalyzer::from_repository(&three_listing_repository());

    assert_eq!(
        analyzer.distinct_addresses_by_price(2),
        vec!["123 Main St", "789 Pine St"]
    );
    assert!(analyzer.distinct_addresses_by_price(0).is_empty());
    assert_eq!(analyzer.distinct_addresses_by_price(50).len(), 3);
}

#[test]
fn group_by_address_keeps_first_added() {
    let mut repo = ListingRepository::new();
    repo.add(Listing::residential("9 Same St", 100, 1).unwrap())
        .unwrap();
    repo.add(Listing::commercial("9 Same St", 900, "Bakery").unwrap())
        .unwrap();
    repo.add(Listing::residential("10 Other St", 300, 2).unwrap())
        .unwrap();

    let analyzer = ListingAnalyzer::from_repository(&repo);
    let by_address = analyzer.group_by_address();

    assert_eq!(by_address.len(), 2);
    assert_eq!(by_address["9 Same St"].price(), 100);
    assert!(by_address["9 Same St"].kind().is_residential());
}

#[test]
fn analysis_ignores_mutation_after_snapshot() {
    let mut repo = three_listing_repository();
    let analyzer = ListingAnalyzer::from_repository(&repo);

    repo.remove("123 Main St").unwrap();
    repo.update_status("789 Pine St", ListingStatus::Sold).unwrap();

    assert_eq!(analyzer.count(), 3);
    assert_eq!(analyzer.find_first().unwrap().address(), "123 Main St");
    assert_eq!(
        analyzer.group_by_status()[&ListingStatus::Available].len(),
        3
    );
}

#[test]
fn sort_by_price_orders_demo_session() {
    let analyzer = ListingAnalyzer::from_repository(&demo_repository());
    let prices: Vec<i64> = analyzer.sort_by_price().iter().map(|l| l.price()).collect();

    let mut expected = prices.clone();
    expected.sort();
    assert_eq!(prices, expected);
    assert_eq!(prices.first(), Some(&150_000));
    assert_eq!(prices.last(), Some(&750_000));
}

#[tokio::test]
async fn demo_session_concurrent_total() {
    let analyzer = ListingAnalyzer::from_repository(&demo_repository());
    let total = analyzer.total_price_concurrent().await.unwrap();
    assert_eq!(total, 3_825_000);
    assert_eq!(total, analyzer.total_price().unwrap());
}
