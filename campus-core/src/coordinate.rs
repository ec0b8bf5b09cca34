//! Geographic coordinates and opaque place references.

use geo::Coord;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A WGS84 position expressed in decimal degrees.
///
/// Fields are private so every value has passed [`Coordinate::new`] or
/// range-checked deserialisation.
///
/// # Examples
///
/// ```
/// use campus_core::Coordinate;
///
/// # fn main() -> Result<(), campus_core::CoordinateError> {
/// let point = Coordinate::new(43.6629, -79.3957)?;
/// assert_eq!(point.lat(), 43.6629);
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

/// Errors returned by [`Coordinate::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    /// Latitude was non-finite or outside `[-90, 90]`.
    #[error("latitude {0} is outside [-90, 90]")]
    Latitude(f64),
    /// Longitude was non-finite or outside `[-180, 180]`.
    #[error("longitude {0} is outside [-180, 180]")]
    Longitude(f64),
}

impl Coordinate {
    /// Validates and constructs a [`Coordinate`].
    pub fn new(lat: f64, lng: f64) -> Result<Self, CoordinateError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinateError::Latitude(lat));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(CoordinateError::Longitude(lng));
        }
        Ok(Self { lat, lng })
    }

    /// Build a coordinate from degrees already known to be in range.
    pub(crate) const fn new_unchecked(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Latitude in `[-90, 90]`.
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in `[-180, 180]`.
    #[must_use]
    pub const fn lng(&self) -> f64 {
        self.lng
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(value: Coordinate) -> Self {
        Self {
            x: value.lng,
            y: value.lat,
        }
    }
}

#[derive(Deserialize)]
struct RawCoordinate {
    lat: f64,
    lng: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = CoordinateError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Self::new(raw.lat, raw.lng)
    }
}

/// Opaque identifier for a location supplied by the caller.
///
/// The identifier is usually an upstream place id. The optional description
/// is carried for display and logging only and never affects resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaceReference {
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl PlaceReference {
    /// Create a reference with no description.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: None,
        }
    }

    /// Attach a human-readable description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The opaque identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The human-readable description, if one was supplied.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl From<&str> for PlaceReference {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for PlaceReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.description {
            Some(description) => write!(f, "{} ({description})", self.id),
            None => f.write_str(&self.id),
        }
    }
}
