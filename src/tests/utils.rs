use crate::config::AppConfig;
use crate::domain::Listing;
use crate::repository::ListingRepository;

/// Repository seeded with the ten-listing demo session.
pub fn demo_repository() -> ListingRepository {
    let mut repo = ListingRepository::new();
    for listing in AppConfig::default()
        .seed_listings()
        .unwrap_or_else(|e| panic!("demo seed failed: {e}"))
    {
        repo.add(listing).unwrap();
    }
    repo
}

/// 250000 residential, 500000 commercial, 350000 residential, in that order.
pub fn three_listing_repository() -> ListingRepository {
    let mut repo = ListingRepository::new();
    repo.add(Listing::residential("123 Main St", 250_000, 3).unwrap())
        .unwrap();
    repo.add(Listing::commercial("456 Market Rd", 500_000, "Retail").unwrap())
        .unwrap();
    repo.add(Listing::residential("789 Pine St", 350_000, 4).unwrap())
        .unwrap();
    repo
}

pub fn addresses<'a>(listings: impl IntoIterator<Item = &'a Listing>) -> Vec<&'a str> {
    listings.into_iter().map(|l| l.address()).collect()
}
