//! POI category tags.
//!
//! The four labels are shared verbatim with the UI and CRUD collaborators, so
//! they are parsed and rendered byte-for-byte. Adding a fifth label is a
//! breaking change on both sides.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Closed set of POI categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum PoiCategory {
    /// Services.
    Layanan,
    /// Food and beverage.
    Kuliner,
    /// Shopping.
    Belanja,
    /// Tourism.
    Wisata,
}

impl PoiCategory {
    /// Every category, in display order.
    pub const ALL: [Self; 4] = [Self::Layanan, Self::Kuliner, Self::Belanja, Self::Wisata];

    /// Wire label for this category.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Layanan => "Layanan",
            Self::Kuliner => "Kuliner",
            Self::Belanja => "Belanja",
            Self::Wisata => "Wisata",
        }
    }
}

/// Error returned when a label is not one of the four categories.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown POI category: {label}")]
pub struct UnknownCategoryError {
    /// Label that failed to parse.
    pub label: String,
}

impl fmt::Display for PoiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PoiCategory {
    type Err = UnknownCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| UnknownCategoryError {
                label: value.to_owned(),
            })
    }
}
