// src/domain/listing.rs

use crate::domain::detail::ListingDetail;
use crate::domain::status::ListingStatus;
use crate::errors::{ListingError, ListingResult};
use chrono::{NaiveDateTime, Utc};
use serde::Serialize;

/// Variant-specific attributes. The variant is chosen at creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ListingKind {
    Residential { bedrooms: u32 },
    Commercial { business_type: String },
}

impl ListingKind {
    pub fn is_residential(&self) -> bool {
        matches!(self, ListingKind::Residential { .. })
    }

    pub fn is_commercial(&self) -> bool {
        matches!(self, ListingKind::Commercial { .. })
    }
}

/// A single real-estate listing: the shared detail plus its variant.
///
/// Equality covers every field, so two listings are "the same listing" only
/// when address, price, status, timestamp and variant data all agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Listing {
    #[serde(flatten)]
    detail: ListingDetail,
    #[serde(flatten)]
    kind: ListingKind,
}

impl Listing {
    pub fn new(detail: ListingDetail, kind: ListingKind) -> ListingResult<Self> {
        if let ListingKind::Commercial { business_type } = &kind {
            if business_type.trim().is_empty() {
                return Err(ListingError::InvalidArgument(
                    "business type cannot be empty".to_string(),
                ));
            }
        }
        Ok(Self { detail, kind })
    }

    /// New available residential listing, timestamped now.
    pub fn residential(address: impl Into<String>, price: i64, bedrooms: u32) -> ListingResult<Self> {
        let detail = ListingDetail::new(address, price, ListingStatus::Available, None)?;
        Self::new(detail, ListingKind::Residential { bedrooms })
    }

    /// New available commercial listing, timestamped now.
    pub fn commercial(
        address: impl Into<String>,
        price: i64,
        business_type: impl Into<String>,
    ) -> ListingResult<Self> {
        let detail = ListingDetail::new(address, price, ListingStatus::Available, None)?;
        Self::new(
            detail,
            ListingKind::Commercial {
                business_type: business_type.into(),
            },
        )
    }

    /// Fallback listing handed out when a caller needs one and the store is empty.
    pub fn placeholder() -> Self {
        Self {
            detail: ListingDetail::unchecked(
                "Default Address".to_string(),
                100_000,
                ListingStatus::Available,
                Utc::now().naive_utc(),
            ),
            kind: ListingKind::Residential { bedrooms: 2 },
        }
    }

    pub fn with_status(mut self, status: ListingStatus) -> Self {
        self.update_status(status);
        self
    }

    pub fn detail(&self) -> &ListingDetail {
        &self.detail
    }

    pub fn kind(&self) -> &ListingKind {
        &self.kind
    }

    pub fn address(&self) -> &str {
        self.detail.address()
    }

    pub fn price(&self) -> i64 {
        self.detail.price()
    }

    pub fn status(&self) -> ListingStatus {
        self.detail.status()
    }

    pub fn listed_at(&self) -> NaiveDateTime {
        self.detail.listed_at()
    }

    pub fn bedrooms(&self) -> Option<u32> {
        match &self.kind {
            ListingKind::Residential { bedrooms } => Some(*bedrooms),
            ListingKind::Commercial { .. } => None,
        }
    }

    pub fn business_type(&self) -> Option<&str> {
        match &self.kind {
            ListingKind::Residential { .. } => None,
            ListingKind::Commercial { business_type } => Some(business_type),
        }
    }

    /// Fails with `InvalidPrice` before touching the current detail.
    pub fn update_price(&mut self, new_price: i64) -> ListingResult<()> {
        self.detail = self.detail.with_price(new_price)?;
        Ok(())
    }

    pub fn update_status(&mut self, new_status: ListingStatus) {
        self.detail = self.detail.with_status(new_status);
    }

    /// Locale-independent full record, used for logs, tests and text export.
    pub fn describe(&self) -> String {
        let base = format!(
            "Address: {}, Price: ${}, Status: {}, Added: {}",
            self.address(),
            self.price(),
            self.status(),
            self.listed_at().format("%Y-%m-%dT%H:%M:%S"),
        );
        match &self.kind {
            ListingKind::Residential { bedrooms } => format!("{base}, Bedrooms: {bedrooms}"),
            ListingKind::Commercial { business_type } => {
                format!("{base}, Business Type: {business_type}")
            }
        }
    }

    /// One-line listing text, worded per variant.
    pub fn summary(&self) -> String {
        match &self.kind {
            ListingKind::Residential { bedrooms } => format!(
                "Residential property at {} with {} bedrooms, priced at ${} [{}]",
                self.address(),
                bedrooms,
                self.price(),
                self.status()
            ),
            ListingKind::Commercial { business_type } => format!(
                "Commercial property for {} business at {}, priced at ${} [{}]",
                business_type,
                self.address(),
                self.price(),
                self.status()
            ),
        }
    }

    pub fn kind_label(&self) -> &'static str {
        match &self.kind {
            ListingKind::Residential { .. } => "Residential Property",
            ListingKind::Commercial { .. } => "Commercial Property",
        }
    }
}
