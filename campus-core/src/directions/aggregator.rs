//! Concurrent fan-out over every travel mode plus the shuttle path.

use futures_util::future::{join, join_all};
use log::{debug, error};
use thiserror::Error;

use super::fetcher::{ModeResult, fetch_mode};
use crate::shuttle::{self, SyntheticRoute};
use crate::{
    CampusConfig, DirectionsProvider, PlaceDetailsProvider, PlaceReference, PlaceResolver, Route,
    RouteBundle, RouteMode, UpstreamError,
};

/// Default number of transit alternatives kept in a bundle.
pub const DEFAULT_TRANSIT_LIMIT: usize = 3;

/// Tunables for [`DirectionsAggregator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregatorOptions {
    /// Maximum number of transit alternatives returned.
    pub transit_limit: usize,
}

impl Default for AggregatorOptions {
    fn default() -> Self {
        Self {
            transit_limit: DEFAULT_TRANSIT_LIMIT,
        }
    }
}

/// Why a single mode contributed nothing to the bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeFailure {
    /// The failed mode.
    pub mode: RouteMode,
    /// The upstream failure.
    pub error: UpstreamError,
}

/// Errors from [`DirectionsAggregator::aggregate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregateError {
    /// Every upstream mode failed, so there are no directions to show.
    #[error("directions unavailable: all {} travel modes failed", .failures.len())]
    DirectionsUnavailable {
        /// One entry per upstream mode, in request order.
        failures: Vec<ModeFailure>,
    },
}

/// Builds a [`RouteBundle`] for a source and destination.
///
/// The aggregator holds no per-request state: each call to
/// [`Self::aggregate`] is independent and may run concurrently with others.
#[derive(Debug)]
pub struct DirectionsAggregator<D, P> {
    directions: D,
    places: P,
    campuses: CampusConfig,
    options: AggregatorOptions,
}

impl<D, P> DirectionsAggregator<D, P>
where
    D: DirectionsProvider,
    P: PlaceDetailsProvider,
{
    /// Create an aggregator with default options.
    #[must_use]
    pub fn new(directions: D, places: P, campuses: CampusConfig) -> Self {
        Self {
            directions,
            places,
            campuses,
            options: AggregatorOptions::default(),
        }
    }

    /// Replace the default options.
    #[must_use]
    pub const fn with_options(mut self, options: AggregatorOptions) -> Self {
        self.options = options;
        self
    }

    /// Campus anchors used for shuttle planning.
    #[must_use]
    pub const fn campuses(&self) -> &CampusConfig {
        &self.campuses
    }

    /// Fetch every mode concurrently and assemble the bundle.
    ///
    /// The four upstream fetches and the shuttle path all run to completion
    /// before the bundle is assembled. Campus aliases are requested upstream
    /// by anchor position. Individual failures leave empty lists;
    /// only the failure of all four upstream modes is an error.
    pub async fn aggregate(
        &self,
        source: &PlaceReference,
        destination: &PlaceReference,
    ) -> Result<RouteBundle, AggregateError> {
        let origin = self.campuses.waypoint(source);
        let target = self.campuses.waypoint(destination);
        let fetches = join_all(RouteMode::UPSTREAM.into_iter().map(|mode| async move {
            (
                mode,
                fetch_mode(&self.directions, mode, origin, target).await,
            )
        }));
        let (outcomes, shuttle) = join(fetches, self.shuttle_routes(source, destination)).await;
        self.assemble(outcomes, shuttle)
    }

    /// Plan the shuttle alone: resolve both references, test eligibility and
    /// synthesize the itinerary. Any failure yields an empty list.
    pub async fn shuttle_routes(
        &self,
        source: &PlaceReference,
        destination: &PlaceReference,
    ) -> Vec<SyntheticRoute> {
        let resolver = PlaceResolver::new(&self.campuses, &self.places);
        let (source_point, destination_point) =
            join(resolver.resolve(source), resolver.resolve(destination)).await;
        let routes = shuttle::plan(&self.campuses, source_point.ok(), destination_point.ok());
        debug!(
            "{} shuttle route(s) planned from {source} to {destination}",
            routes.len()
        );
        routes
    }

    fn assemble(
        &self,
        outcomes: Vec<(RouteMode, ModeResult)>,
        shuttle: Vec<SyntheticRoute>,
    ) -> Result<RouteBundle, AggregateError> {
        let mut bundle = RouteBundle {
            shuttle,
            ..RouteBundle::default()
        };
        let mut failures = Vec::new();

        for (mode, outcome) in outcomes {
            match outcome {
                ModeResult::Available(routes) if mode == RouteMode::Transit => {
                    bundle.set_routes(mode, keep_first(routes, self.options.transit_limit));
                }
                ModeResult::Available(routes) => bundle.set_routes(mode, routes),
                ModeResult::Unavailable(error) => failures.push(ModeFailure { mode, error }),
            }
        }

        if failures.len() == RouteMode::UPSTREAM.len() {
            error!("directions unavailable: every travel mode failed");
            return Err(AggregateError::DirectionsUnavailable { failures });
        }
        Ok(bundle)
    }
}

/// Keep at most `limit` routes, preserving order.
fn keep_first(mut routes: Vec<Route>, limit: usize) -> Vec<Route> {
    routes.truncate(limit);
    routes
}
