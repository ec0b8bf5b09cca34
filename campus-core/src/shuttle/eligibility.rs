//! Heuristic deciding whether the shuttle is worth suggesting.

use log::debug;

use crate::{CampusConfig, Coordinate, distance_km};

/// Both endpoints within this radius of one campus suppress the shuttle.
pub const SAME_CAMPUS_RADIUS_KM: f64 = 1.0;

/// An endpoint within this radius of a campus counts as "at" that campus.
pub const NEAR_CAMPUS_RADIUS_KM: f64 = 2.0;

/// Distances from both endpoints to both campuses.
#[derive(Debug, Clone, Copy)]
struct CampusDistances {
    source_first: f64,
    source_second: f64,
    destination_first: f64,
    destination_second: f64,
}

impl CampusDistances {
    fn measure(campuses: &CampusConfig, source: Coordinate, destination: Coordinate) -> Self {
        let first = campuses.first().coordinate;
        let second = campuses.second().coordinate;
        Self {
            source_first: distance_km(source, first),
            source_second: distance_km(source, second),
            destination_first: distance_km(destination, first),
            destination_second: distance_km(destination, second),
        }
    }

    fn same_campus(&self) -> bool {
        let at_first = self.source_first <= SAME_CAMPUS_RADIUS_KM
            && self.destination_first <= SAME_CAMPUS_RADIUS_KM;
        let at_second = self.source_second <= SAME_CAMPUS_RADIUS_KM
            && self.destination_second <= SAME_CAMPUS_RADIUS_KM;
        at_first || at_second
    }

    fn crosses_campuses(&self) -> bool {
        let near = |km: f64| km <= NEAR_CAMPUS_RADIUS_KM;
        (near(self.source_first) && self.destination_second < self.destination_first)
            || (near(self.source_second) && self.destination_first < self.destination_second)
            || (near(self.destination_first) && self.source_second < self.source_first)
            || (near(self.destination_second) && self.source_first < self.source_second)
    }
}

/// Decide whether a shuttle itinerary should be offered between two points.
///
/// Unresolved endpoints are never eligible. Trips that start and end within
/// [`SAME_CAMPUS_RADIUS_KM`] of the same campus are suppressed before the
/// cross-campus test runs. Otherwise the shuttle is offered when one endpoint
/// lies within [`NEAR_CAMPUS_RADIUS_KM`] of a campus and the other endpoint is
/// strictly closer to the opposite campus.
///
/// # Examples
///
/// ```
/// use campus_core::{CampusConfig, shuttle::is_eligible};
///
/// let campuses = CampusConfig::default();
/// let st_george = campuses.first().coordinate;
/// let mississauga = campuses.second().coordinate;
///
/// assert!(is_eligible(&campuses, Some(st_george), Some(mississauga)));
/// assert!(!is_eligible(&campuses, Some(st_george), Some(st_george)));
/// assert!(!is_eligible(&campuses, None, Some(mississauga)));
/// ```
#[must_use]
pub fn is_eligible(
    campuses: &CampusConfig,
    source: Option<Coordinate>,
    destination: Option<Coordinate>,
) -> bool {
    let (Some(source), Some(destination)) = (source, destination) else {
        debug!("shuttle not offered: an endpoint could not be resolved");
        return false;
    };

    let distances = CampusDistances::measure(campuses, source, destination);
    if distances.same_campus() {
        debug!("shuttle not offered: both endpoints are on the same campus");
        return false;
    }
    let eligible = distances.crosses_campuses();
    debug!("shuttle eligibility evaluated: {eligible} ({distances:?})");
    eligible
}
