//! Test doubles for the maps backend and small filesystem helpers.

use std::fs;

use async_trait::async_trait;
use camino::Utf8Path;
use campus_core::test_support::{StubDirectionsProvider, StubPlaceDetailsProvider};
use campus_core::{
    Coordinate, DirectionsProvider, DirectionsQuery, PlaceDetailsProvider, PlaceReference, Route,
    UpstreamError,
};
use campus_data::MapsClientConfig;

use crate::CliError;
use crate::directions::{MapsBackend, MapsBackendBuilder};

/// Two-campus configuration that does not overlap the built-in anchors.
pub(super) const NORTH_SOUTH_CAMPUSES: &str = r#"{
    "campuses": [
        {
            "id": "north",
            "title": "North Campus",
            "coordinate": {"lat": 45.40, "lng": -75.70},
            "aliases": ["n", "north-campus"]
        },
        {
            "id": "south",
            "title": "South Campus",
            "coordinate": {"lat": 45.20, "lng": -75.70},
            "aliases": ["s"]
        }
    ]
}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write fixture");
}

/// Upstream stubs combined into one backend.
pub(super) struct StubBackend {
    directions: StubDirectionsProvider,
    places: StubPlaceDetailsProvider,
}

#[async_trait]
impl DirectionsProvider for StubBackend {
    async fn fetch_routes(&self, query: &DirectionsQuery<'_>) -> Result<Vec<Route>, UpstreamError> {
        self.directions.fetch_routes(query).await
    }
}

#[async_trait]
impl PlaceDetailsProvider for StubBackend {
    async fn place_location(
        &self,
        reference: &PlaceReference,
    ) -> Result<Coordinate, UpstreamError> {
        self.places.place_location(reference).await
    }
}

/// Builds a fresh [`StubBackend`] per invocation.
#[derive(Debug, Clone, Copy)]
pub(super) struct StubBackendBuilder {
    /// Routes returned for every mode; `None` makes every mode fail.
    pub(super) routes_per_mode: Option<u64>,
}

impl MapsBackendBuilder for StubBackendBuilder {
    fn build(&self, _config: &MapsClientConfig) -> Result<Box<dyn MapsBackend>, CliError> {
        let directions = self
            .routes_per_mode
            .map_or_else(StubDirectionsProvider::new, StubDirectionsProvider::all_modes);
        Ok(Box::new(StubBackend {
            directions,
            places: StubPlaceDetailsProvider::new(),
        }))
    }
}
