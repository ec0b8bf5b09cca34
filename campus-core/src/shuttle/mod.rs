//! Inter-campus shuttle suggestions.
//!
//! The shuttle is not served by the upstream directions provider. Instead the
//! [`is_eligible`] heuristic decides whether a trip benefits from it and
//! [`synthesize`] generates a route object in the upstream shape so the UI
//! can render it like any other alternative.

mod eligibility;
mod format;
mod synthesis;
mod types;

pub use eligibility::{NEAR_CAMPUS_RADIUS_KM, SAME_CAMPUS_RADIUS_KM, is_eligible};
pub use synthesis::{SHUTTLE_MINUTES_PER_KM, WALKING_MINUTES_PER_KM, synthesize};
pub use types::{
    Bounds, Fare, Step, SyntheticLeg, SyntheticRoute, TransitAgency, TransitDetails, TransitLine,
    TransitStop, TransitVehicle, TravelMode,
};

use crate::{CampusConfig, Coordinate};

/// Shuttle itineraries to offer for a trip: one when eligible, none otherwise.
#[must_use]
pub fn plan(
    campuses: &CampusConfig,
    source: Option<Coordinate>,
    destination: Option<Coordinate>,
) -> Vec<SyntheticRoute> {
    if is_eligible(campuses, source, destination) {
        synthesize(campuses, source, destination)
    } else {
        Vec::new()
    }
}
