//! Interfaces to the external mapping service.
//!
//! The aggregator only talks to the outside world through
//! [`DirectionsProvider`] and [`PlaceDetailsProvider`]. Concrete HTTP
//! implementations live in `campus-data`; test doubles live in
//! [`crate::test_support`].

mod error;
mod provider;

pub use error::UpstreamError;
pub use provider::{DirectionsProvider, DirectionsQuery, PlaceDetailsProvider, Waypoint};
