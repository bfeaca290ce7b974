//! Point-of-interest records.
//!
//! Purpose: model the POI snapshot read by the search pipeline and written by
//! the CRUD collaborator. Records are immutable values; updates produce a new
//! record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Coordinate, CoordinateValidationError, PoiCategory};

/// Validation errors raised while building or updating a [`Poi`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PoiValidationError {
    /// Identifiers are assigned by the store and are always positive.
    #[error("poi id must be positive, got {value}")]
    InvalidId {
        /// Rejected identifier.
        value: i64,
    },
    /// The name is blank once trimmed.
    #[error("name must not be empty")]
    EmptyName,
    /// The coordinate is out of range.
    #[error(transparent)]
    Coordinate(#[from] CoordinateValidationError),
    /// The rating is outside `[0, 5]`.
    #[error("rating must be between 0 and 5, got {value}")]
    Rating {
        /// Rejected rating.
        value: f64,
    },
}

impl PoiValidationError {
    /// Name of the offending field.
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidId { .. } => "id",
            Self::EmptyName => "name",
            Self::Coordinate(error) => error.field(),
            Self::Rating { .. } => "rating",
        }
    }
}

/// Opaque POI identifier assigned at creation and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoiId(i64);

impl PoiId {
    /// Validate a raw identifier.
    pub fn new(value: i64) -> Result<Self, PoiValidationError> {
        if value <= 0 {
            return Err(PoiValidationError::InvalidId { value });
        }
        Ok(Self(value))
    }

    /// Raw identifier value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for PoiId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn default_active() -> bool {
    true
}

/// Unvalidated creation payload for a POI.
///
/// Also the wire shape of seed files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoiDraft {
    /// Display name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Category tag.
    pub category: PoiCategory,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Postal address.
    #[serde(default)]
    pub address: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Website URL.
    #[serde(default)]
    pub website: Option<String>,
    /// Rating on a 0 to 5 scale.
    #[serde(default)]
    pub rating: Option<f64>,
    /// Image URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Soft-delete marker; inactive records are hidden from listings.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// Partial update for a POI. `None` leaves a field untouched; for nullable
/// fields `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PoiPatch {
    /// New display name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<Option<String>>,
    /// New category.
    pub category: Option<PoiCategory>,
    /// New latitude.
    pub latitude: Option<f64>,
    /// New longitude.
    pub longitude: Option<f64>,
    /// New address.
    pub address: Option<Option<String>>,
    /// New phone number.
    pub phone: Option<Option<String>>,
    /// New website URL.
    pub website: Option<Option<String>>,
    /// New rating.
    pub rating: Option<Option<f64>>,
    /// New image URL.
    pub image_url: Option<Option<String>>,
    /// New active flag.
    pub is_active: Option<bool>,
}

/// Stored point of interest.
///
/// ## Invariants
/// - `name` is non-empty once trimmed.
/// - `rating`, when present, lies in `[0, 5]`.
/// - `website` and `image_url` are never empty strings.
#[derive(Debug, Clone, PartialEq)]
pub struct Poi {
    id: PoiId,
    name: String,
    description: Option<String>,
    category: PoiCategory,
    coordinate: Coordinate,
    address: Option<String>,
    phone: Option<String>,
    website: Option<String>,
    rating: Option<f64>,
    image_url: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn validate_name(name: &str) -> Result<(), PoiValidationError> {
    if name.trim().is_empty() {
        return Err(PoiValidationError::EmptyName);
    }
    Ok(())
}

fn validate_rating(rating: Option<f64>) -> Result<(), PoiValidationError> {
    match rating {
        Some(value) if !(0.0..=5.0).contains(&value) => Err(PoiValidationError::Rating { value }),
        _ => Ok(()),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}

impl PoiDraft {
    /// Check the draft without building a record.
    pub fn validate(&self) -> Result<(), PoiValidationError> {
        validate_name(&self.name)?;
        Coordinate::new(self.latitude, self.longitude)?;
        validate_rating(self.rating)
    }
}

impl Poi {
    /// Build a freshly created record; both timestamps are set to `now`.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use poi_finder::domain::{Poi, PoiCategory, PoiDraft, PoiId};
    ///
    /// let draft = PoiDraft {
    ///     name: "Warung Bu Ani".into(),
    ///     description: None,
    ///     category: PoiCategory::Kuliner,
    ///     latitude: -6.2088,
    ///     longitude: 106.8456,
    ///     address: None,
    ///     phone: None,
    ///     website: Some(String::new()),
    ///     rating: Some(4.5),
    ///     image_url: None,
    ///     is_active: true,
    /// };
    /// let poi = Poi::new(PoiId::new(1).expect("id"), draft, Utc::now()).expect("valid draft");
    /// assert_eq!(poi.website(), None);
    /// ```
    pub fn new(id: PoiId, draft: PoiDraft, now: DateTime<Utc>) -> Result<Self, PoiValidationError> {
        draft.validate()?;
        Ok(Self {
            id,
            coordinate: Coordinate::new(draft.latitude, draft.longitude)?,
            name: draft.name,
            description: draft.description,
            category: draft.category,
            address: draft.address,
            phone: draft.phone,
            website: non_empty(draft.website),
            rating: draft.rating,
            image_url: non_empty(draft.image_url),
            is_active: draft.is_active,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply a partial update, refreshing `updated_at`.
    pub fn with_patch(&self, patch: PoiPatch, now: DateTime<Utc>) -> Result<Self, PoiValidationError> {
        if let Some(name) = &patch.name {
            validate_name(name)?;
        }
        let coordinate = Coordinate::new(
            patch.latitude.unwrap_or(self.coordinate.latitude()),
            patch.longitude.unwrap_or(self.coordinate.longitude()),
        )?;
        if let Some(rating) = patch.rating {
            validate_rating(rating)?;
        }

        Ok(Self {
            id: self.id,
            name: patch.name.unwrap_or_else(|| self.name.clone()),
            description: patch.description.unwrap_or_else(|| self.description.clone()),
            category: patch.category.unwrap_or(self.category),
            coordinate,
            address: patch.address.unwrap_or_else(|| self.address.clone()),
            phone: patch.phone.unwrap_or_else(|| self.phone.clone()),
            website: patch.website.map_or_else(|| self.website.clone(), non_empty),
            rating: patch.rating.unwrap_or(self.rating),
            image_url: patch.image_url.map_or_else(|| self.image_url.clone(), non_empty),
            is_active: patch.is_active.unwrap_or(self.is_active),
            created_at: self.created_at,
            updated_at: now,
        })
    }

    /// Soft-deleted copy of this record.
    pub fn deactivated(&self, now: DateTime<Utc>) -> Self {
        Self {
            is_active: false,
            updated_at: now,
            ..self.clone()
        }
    }

    /// Stable identifier.
    pub const fn id(&self) -> PoiId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Free-form description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Category tag.
    pub const fn category(&self) -> PoiCategory {
        self.category
    }

    /// Location of the POI.
    pub const fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Postal address.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Contact phone number.
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Website URL.
    pub fn website(&self) -> Option<&str> {
        self.website.as_deref()
    }

    /// Rating on a 0 to 5 scale.
    pub const fn rating(&self) -> Option<f64> {
        self.rating
    }

    /// Image URL.
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Whether the record is visible to listings.
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Creation timestamp.
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last modification timestamp.
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
