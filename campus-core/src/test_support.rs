//! Deterministic collaborator doubles used by unit and behaviour tests.
//!
//! Neither stub performs I/O. Responses are configured per mode or per place
//! reference, and call counters let tests assert how many upstream requests
//! were issued.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::{
    Coordinate, DirectionsProvider, DirectionsQuery, Measure, PlaceDetailsProvider,
    PlaceReference, Route, RouteLeg, RouteMode, UpstreamError,
};

/// Build a one-leg upstream route tagged with `summary`.
#[must_use]
pub fn sample_route(summary: &str, duration_secs: u64, distance_metres: u64) -> Route {
    let mut rest = Map::new();
    rest.insert("summary".to_owned(), Value::from(summary));
    Route {
        legs: vec![RouteLeg {
            duration: Measure {
                text: format!("{duration_secs} s"),
                value: duration_secs,
            },
            distance: Measure {
                text: format!("{distance_metres} m"),
                value: distance_metres,
            },
            rest: Map::new(),
        }],
        rest,
    }
}

/// Build `count` distinct routes for `mode`, in increasing duration order.
#[must_use]
pub fn sample_routes(mode: RouteMode, count: u64) -> Vec<Route> {
    (1..=count)
        .map(|n| sample_route(&format!("{mode} #{n}"), n * 60, n * 500))
        .collect()
}

/// The summary recorded by [`sample_route`].
#[must_use]
pub fn route_summary(route: &Route) -> Option<&str> {
    route.rest.get("summary").and_then(Value::as_str)
}

/// Stub `DirectionsProvider` answering from a per-mode table.
///
/// Modes without a configured answer fail with a `ZERO_RESULTS` service
/// error, mirroring an upstream that has nothing to offer.
#[derive(Debug, Default)]
pub struct StubDirectionsProvider {
    responses: HashMap<RouteMode, Result<Vec<Route>, UpstreamError>>,
    calls: AtomicUsize,
    requests: Mutex<Vec<String>>,
}

impl StubDirectionsProvider {
    /// Create a provider with no configured modes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider returning `count` sample routes for every upstream mode.
    #[must_use]
    pub fn all_modes(count: u64) -> Self {
        RouteMode::UPSTREAM
            .into_iter()
            .fold(Self::new(), |stub, mode| {
                stub.with_routes(mode, sample_routes(mode, count))
            })
    }

    /// Answer `mode` with `routes`.
    #[must_use]
    pub fn with_routes(mut self, mode: RouteMode, routes: Vec<Route>) -> Self {
        self.responses.insert(mode, Ok(routes));
        self
    }

    /// Answer `mode` with `error`.
    #[must_use]
    pub fn with_error(mut self, mode: RouteMode, error: UpstreamError) -> Self {
        self.responses.insert(mode, Err(error));
        self
    }

    /// Number of requests received so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Each request's endpoints as `"{origin} -> {destination}"`.
    #[must_use]
    pub fn requested_endpoints(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl DirectionsProvider for StubDirectionsProvider {
    async fn fetch_routes(&self, query: &DirectionsQuery<'_>) -> Result<Vec<Route>, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(format!("{} -> {}", query.origin, query.destination));
        }
        self.responses.get(&query.mode).cloned().unwrap_or_else(|| {
            Err(UpstreamError::Service {
                status: "ZERO_RESULTS".to_owned(),
                message: format!("no {} routes configured", query.mode),
            })
        })
    }
}

/// Stub `PlaceDetailsProvider` answering from a per-reference table.
///
/// Unknown references fail with a `NOT_FOUND` service error.
#[derive(Debug, Default)]
pub struct StubPlaceDetailsProvider {
    places: HashMap<String, Result<Coordinate, UpstreamError>>,
    lookups: AtomicUsize,
}

impl StubPlaceDetailsProvider {
    /// Create a provider that knows no places.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `reference_id` to `location`.
    #[must_use]
    pub fn with_place(mut self, reference_id: impl Into<String>, location: Coordinate) -> Self {
        self.places.insert(reference_id.into(), Ok(location));
        self
    }

    /// Fail lookups of `reference_id` with `error`.
    #[must_use]
    pub fn with_error(mut self, reference_id: impl Into<String>, error: UpstreamError) -> Self {
        self.places.insert(reference_id.into(), Err(error));
        self
    }

    /// Number of lookups received so far.
    #[must_use]
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlaceDetailsProvider for StubPlaceDetailsProvider {
    async fn place_location(
        &self,
        reference: &PlaceReference,
    ) -> Result<Coordinate, UpstreamError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.places.get(reference.id()).cloned().unwrap_or_else(|| {
            Err(UpstreamError::Service {
                status: "NOT_FOUND".to_owned(),
                message: format!("unknown place {}", reference.id()),
            })
        })
    }
}
