//! Facade crate for campus-aware directions.
//!
//! This crate re-exports the core domain types and exposes the HTTP maps
//! client behind the `http` feature flag.

#![forbid(unsafe_code)]

pub use campus_core::{
    AggregateError, AggregatorOptions, CampusAnchor, CampusConfig, CampusConfigError, Coordinate,
    CoordinateError, DirectionsAggregator, DirectionsProvider, DirectionsQuery, ModeFailure,
    PlaceDetailsProvider, PlaceNotFound, PlaceReference, Route, RouteBundle, RouteMode,
    SyntheticRoute, UpstreamError, Waypoint, shuttle,
};

#[cfg(feature = "http")]
pub use campus_data::{ClientBuildError, HttpMapsClient, MapsClientConfig};
