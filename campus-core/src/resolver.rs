//! Resolve place references to coordinates for the shuttle heuristic.

use log::debug;
use thiserror::Error;

use crate::{CampusConfig, Coordinate, PlaceDetailsProvider, PlaceReference};

/// A place reference that could not be turned into a coordinate.
///
/// The underlying upstream failure is flattened into `reason`; callers only
/// need to know that the shuttle cannot be planned for this request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("place {reference:?} could not be resolved: {reason}")]
pub struct PlaceNotFound {
    /// Identifier of the unresolved reference.
    pub reference: String,
    /// Description of the lookup failure.
    pub reason: String,
}

/// Resolves references using the campus alias table, then the place-detail
/// service.
#[derive(Debug)]
pub struct PlaceResolver<'a, P> {
    campuses: &'a CampusConfig,
    places: &'a P,
}

impl<'a, P: PlaceDetailsProvider> PlaceResolver<'a, P> {
    /// Create a resolver over `campuses` falling back to `places`.
    #[must_use]
    pub const fn new(campuses: &'a CampusConfig, places: &'a P) -> Self {
        Self { campuses, places }
    }

    /// Resolve `reference` to a coordinate.
    ///
    /// Campus aliases resolve immediately without a network call. Other
    /// references cost exactly one place-detail lookup; any failure becomes
    /// [`PlaceNotFound`].
    pub async fn resolve(&self, reference: &PlaceReference) -> Result<Coordinate, PlaceNotFound> {
        if let Some(campus) = self.campuses.find_by_alias(reference.id()) {
            debug!("{reference} resolved to campus {}", campus.id);
            return Ok(campus.coordinate);
        }

        self.places
            .place_location(reference)
            .await
            .map_err(|err| {
                debug!("place lookup for {reference} failed: {err}");
                PlaceNotFound {
                    reference: reference.id().to_owned(),
                    reason: err.to_string(),
                }
            })
    }
}
