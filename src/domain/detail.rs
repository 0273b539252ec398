// src/domain/detail.rs

use crate::domain::status::ListingStatus;
use crate::errors::{ListingError, ListingResult};
use chrono::{NaiveDateTime, Utc};
use serde::Serialize;

/// The shared (address, price, status, listed-at) value every listing carries.
///
/// A detail is never edited in place. Price and status changes produce a new
/// detail via [`ListingDetail::with_price`] and [`ListingDetail::with_status`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ListingDetail {
    address: String,
    price: i64,
    status: ListingStatus,
    listed_at: NaiveDateTime,
}

impl ListingDetail {
    /// Validates the address and price. `listed_at` defaults to now (UTC).
    pub fn new(
        address: impl Into<String>,
        price: i64,
        status: ListingStatus,
        listed_at: Option<NaiveDateTime>,
    ) -> ListingResult<Self> {
        let address = address.into();
        if address.trim().is_empty() {
            return Err(ListingError::InvalidArgument(
                "address cannot be empty".to_string(),
            ));
        }
        validate_price(price)?;

        Ok(Self {
            address,
            price,
            status,
            listed_at: listed_at.unwrap_or_else(|| Utc::now().naive_utc()),
        })
    }

    /// Skips validation; only for values known to be valid.
    pub(crate) fn unchecked(
        address: String,
        price: i64,
        status: ListingStatus,
        listed_at: NaiveDateTime,
    ) -> Self {
        Self {
            address,
            price,
            status,
            listed_at,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn price(&self) -> i64 {
        self.price
    }

    pub fn status(&self) -> ListingStatus {
        self.status
    }

    pub fn listed_at(&self) -> NaiveDateTime {
        self.listed_at
    }

    /// A copy with a new price; address, status and timestamp are kept.
    pub fn with_price(&self, price: i64) -> ListingResult<Self> {
        validate_price(price)?;
        Ok(Self {
            price,
            ..self.clone()
        })
    }

    pub fn with_status(&self, status: ListingStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    /// Case-insensitive address comparison used by every address lookup.
    pub fn address_matches(&self, address: &str) -> bool {
        self.address.to_lowercase() == address.to_lowercase()
    }
}

pub(crate) fn validate_price(price: i64) -> ListingResult<()> {
    if price < 0 {
        return Err(ListingError::InvalidPrice(price));
    }
    Ok(())
}
