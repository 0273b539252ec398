// src/domain/status.rs

use crate::errors::ListingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Market status of a listing.
///
/// Transitions are unrestricted: any status may replace any other.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum ListingStatus {
    #[default]
    Available,
    Sold,
    Pending,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Available => "AVAILABLE",
            ListingStatus::Sold => "SOLD",
            ListingStatus::Pending => "PENDING",
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListingStatus {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AVAILABLE" => Ok(ListingStatus::Available),
            "SOLD" => Ok(ListingStatus::Sold),
            "PENDING" => Ok(ListingStatus::Pending),
            other => Err(ListingError::InvalidArgument(format!(
                "unknown listing status '{other}'"
            ))),
        }
    }
}
