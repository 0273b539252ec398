//! Session configuration, loaded from TOML.

pub mod logging;

pub use logging::LoggingConfig;

use crate::domain::{Listing, ListingStatus};
use crate::errors::{ConfigError, ListingResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub export: ExportConfig,
    pub analysis: AnalysisConfig,
    pub listings: Vec<SeedListing>,
}

/// Export targets. Each one is skipped when unset.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    pub text_path: Option<PathBuf>,
    pub xlsx_path: Option<PathBuf>,
    pub sqlite_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Threshold for the "no listing below" check.
    pub price_floor: i64,
    pub distinct_limit: usize,
    /// Inclusive `[min, max]` used for the price range search.
    pub price_range: [i64; 2],
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            price_floor: 200_000,
            distinct_limit: 2,
            price_range: [200_000, 400_000],
        }
    }
}

/// A listing declared in the config file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SeedListing {
    Residential {
        address: String,
        price: i64,
        bedrooms: u32,
        #[serde(default)]
        status: ListingStatus,
    },
    Commercial {
        address: String,
        price: i64,
        business_type: String,
        #[serde(default)]
        status: ListingStatus,
    },
}

impl SeedListing {
    fn residential(address: &str, price: i64, bedrooms: u32, status: ListingStatus) -> Self {
        SeedListing::Residential {
            address: address.to_string(),
            price,
            bedrooms,
            status,
        }
    }

    fn commercial(address: &str, price: i64, business_type: &str, status: ListingStatus) -> Self {
        SeedListing::Commercial {
            address: address.to_string(),
            price,
            business_type: business_type.to_string(),
            status,
        }
    }

    pub fn address(&self) -> &str {
        match self {
            SeedListing::Residential { address, .. } | SeedListing::Commercial { address, .. } => {
                address
            }
        }
    }

    pub fn to_listing(&self) -> ListingResult<Listing> {
        match self {
            SeedListing::Residential {
                address,
                price,
                bedrooms,
                status,
            } => Ok(Listing::residential(address.as_str(), *price, *bedrooms)?.with_status(*status)),
            SeedListing::Commercial {
                address,
                price,
                business_type,
                status,
            } => Ok(
                Listing::commercial(address.as_str(), *price, business_type.as_str())?
                    .with_status(*status),
            ),
        }
    }
}

impl Default for AppConfig {
    /// The ten-listing demo session.
    fn default() -> Self {
        use ListingStatus::{Available, Sold};

        Self {
            logging: LoggingConfig::default(),
            export: ExportConfig::default(),
            analysis: AnalysisConfig::default(),
            listings: vec![
                SeedListing::residential("123 Main St", 250_000, 3, Available),
                SeedListing::commercial("456 Market Rd", 500_000, "Retail", Available),
                SeedListing::residential("789 Pine St", 350_000, 4, Available),
                SeedListing::residential("101 Oak Ave", 150_000, 2, Sold),
                SeedListing::residential("202 Elm St", 450_000, 5, Available),
                SeedListing::commercial("303 Industrial Blvd", 750_000, "Warehouse", Sold),
                SeedListing::commercial("404 Tech Park", 300_000, "Office", Available),
                SeedListing::residential("505 Cedar Ln", 200_000, 3, Sold),
                SeedListing::commercial("606 Commerce Dr", 600_000, "Retail", Sold),
                SeedListing::residential("707 Birch Rd", 275_000, 4, Available),
            ],
        }
    }
}

impl AppConfig {
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(ConfigError::Parse)
    }

    /// Reads `path`; a missing file yields the default session.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ConfigError::ReadFile(e)),
        }
    }

    /// Builds every seed listing, failing on the first invalid one.
    pub fn seed_listings(&self) -> Result<Vec<Listing>, ConfigError> {
        self.listings
            .iter()
            .map(|seed| {
                seed.to_listing().map_err(|source| ConfigError::SeedListing {
                    address: seed.address().to_string(),
                    source,
                })
            })
            .collect()
    }

    pub fn init_logging(&self) -> Result<(), ConfigError> {
        self.logging.init()
    }
}
