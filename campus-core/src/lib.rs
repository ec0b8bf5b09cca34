//! Core domain for campus-aware directions.
//!
//! The crate combines upstream routes for driving, walking, cycling and
//! transit with a locally synthesized inter-campus shuttle itinerary. All I/O
//! sits behind the [`DirectionsProvider`] and [`PlaceDetailsProvider`]
//! traits so the aggregation logic can be exercised without a network.
//!
//! ```
//! use campus_core::{CampusConfig, distance_km, shuttle};
//!
//! let campuses = CampusConfig::default();
//! let km = distance_km(campuses.first().coordinate, campuses.second().coordinate);
//! assert!(km > 20.0);
//!
//! let routes = shuttle::plan(
//!     &campuses,
//!     Some(campuses.first().coordinate),
//!     Some(campuses.second().coordinate),
//! );
//! assert_eq!(routes.len(), 1);
//! ```

#![forbid(unsafe_code)]

mod campus;
mod coordinate;
pub mod directions;
mod geo_math;
mod resolver;
mod route;
pub mod shuttle;
pub mod test_support;
mod upstream;

pub use campus::{CampusAnchor, CampusConfig, CampusConfigError};
pub use coordinate::{Coordinate, CoordinateError, PlaceReference};
pub use directions::{
    AggregateError, AggregatorOptions, DEFAULT_TRANSIT_LIMIT, DirectionsAggregator, ModeFailure,
    ModeResult, fetch_mode,
};
pub use geo_math::{EARTH_RADIUS_KM, distance_km};
pub use resolver::{PlaceNotFound, PlaceResolver};
pub use route::{Measure, Route, RouteBundle, RouteLeg, RouteMode};
pub use shuttle::SyntheticRoute;
pub use upstream::{
    DirectionsProvider, DirectionsQuery, PlaceDetailsProvider, UpstreamError, Waypoint,
};
