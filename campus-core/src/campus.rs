//! The two fixed campus anchors served by the inter-campus shuttle.
//!
//! A [`CampusConfig`] is built once (usually from [`CampusConfig::default`] or
//! a configuration file) and shared read-only by every request.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Coordinate, PlaceReference, Waypoint, distance_km};

/// A named campus location and the place references that alias it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampusAnchor {
    /// Stable identifier, e.g. `"st-george"`.
    pub id: String,
    /// Display name used in synthesized route text.
    pub title: String,
    /// Fixed position of the shuttle stop on this campus.
    pub coordinate: Coordinate,
    /// Place reference ids that resolve to this campus without a lookup.
    #[serde(default)]
    pub aliases: BTreeSet<String>,
}

impl CampusAnchor {
    /// Create an anchor with the given aliases.
    #[must_use]
    pub fn new<I, S>(
        id: impl Into<String>,
        title: impl Into<String>,
        coordinate: Coordinate,
        aliases: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            title: title.into(),
            coordinate,
            aliases: aliases.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `reference_id` is one of this campus's aliases.
    #[must_use]
    pub fn is_alias(&self, reference_id: &str) -> bool {
        self.aliases.contains(reference_id)
    }
}

/// Errors returned by [`CampusConfig::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CampusConfigError {
    /// Both anchors share the same identifier.
    #[error("campus anchors must have distinct ids, both are {0:?}")]
    DuplicateId(String),
    /// A reference id aliases both anchors.
    #[error("alias {0:?} is claimed by both campus anchors")]
    SharedAlias(String),
}

/// Immutable pair of campus anchors.
///
/// # Examples
///
/// ```
/// use campus_core::CampusConfig;
///
/// let campuses = CampusConfig::default();
/// let st_george = campuses.find_by_alias("utsg").expect("built-in alias");
/// assert_eq!(st_george.id, "st-george");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCampusConfig")]
pub struct CampusConfig {
    campuses: [CampusAnchor; 2],
}

#[derive(Deserialize)]
struct RawCampusConfig {
    campuses: [CampusAnchor; 2],
}

impl TryFrom<RawCampusConfig> for CampusConfig {
    type Error = CampusConfigError;

    fn try_from(raw: RawCampusConfig) -> Result<Self, Self::Error> {
        let [first, second] = raw.campuses;
        Self::new(first, second)
    }
}

impl CampusConfig {
    /// Validates and constructs a [`CampusConfig`].
    pub fn new(first: CampusAnchor, second: CampusAnchor) -> Result<Self, CampusConfigError> {
        if first.id == second.id {
            return Err(CampusConfigError::DuplicateId(first.id));
        }
        if let Some(alias) = first.aliases.intersection(&second.aliases).next() {
            return Err(CampusConfigError::SharedAlias(alias.clone()));
        }
        Ok(Self {
            campuses: [first, second],
        })
    }

    /// The first-listed campus. Distance ties resolve towards it.
    #[must_use]
    pub const fn first(&self) -> &CampusAnchor {
        let [first, _] = &self.campuses;
        first
    }

    /// The second-listed campus.
    #[must_use]
    pub const fn second(&self) -> &CampusAnchor {
        let [_, second] = &self.campuses;
        second
    }

    /// Both anchors in listing order.
    pub fn iter(&self) -> impl Iterator<Item = &CampusAnchor> {
        self.campuses.iter()
    }

    /// The campus aliased by `reference_id`, if any.
    #[must_use]
    pub fn find_by_alias(&self, reference_id: &str) -> Option<&CampusAnchor> {
        self.iter().find(|campus| campus.is_alias(reference_id))
    }

    /// How `reference` is sent upstream.
    ///
    /// A campus alias becomes that campus's anchor position. Any other
    /// reference passes through unchanged.
    #[must_use]
    pub fn waypoint<'a>(&self, reference: &'a PlaceReference) -> Waypoint<'a> {
        self.find_by_alias(reference.id())
            .map_or(Waypoint::Place(reference), |campus| {
                Waypoint::Location(campus.coordinate)
            })
    }

    /// The campus closest to `point`, preferring [`Self::first`] on ties.
    #[must_use]
    pub fn nearest(&self, point: Coordinate) -> &CampusAnchor {
        let first = self.first();
        let second = self.second();
        if distance_km(point, second.coordinate) < distance_km(point, first.coordinate) {
            second
        } else {
            first
        }
    }

    /// The campus that is not `campus`.
    #[must_use]
    pub fn other(&self, campus: &CampusAnchor) -> &CampusAnchor {
        if campus.id == self.first().id {
            self.second()
        } else {
            self.first()
        }
    }
}

impl Default for CampusConfig {
    /// The St. George and Mississauga campuses.
    fn default() -> Self {
        Self {
            campuses: [
                CampusAnchor::new(
                    "st-george",
                    "St. George Campus",
                    Coordinate::new_unchecked(43.6629, -79.3957),
                    ["utsg", "st-george", "uoft-st-george"],
                ),
                CampusAnchor::new(
                    "mississauga",
                    "Mississauga Campus",
                    Coordinate::new_unchecked(43.5483, -79.6627),
                    ["utm", "mississauga", "uoft-mississauga"],
                ),
            ],
        }
    }
}
