//! Collaborator traits for the upstream directions and place-detail services.

use async_trait::async_trait;

use crate::{Coordinate, PlaceReference, Route, RouteMode};

use super::error::UpstreamError;

/// One end of a directions request.
///
/// Campus aliases are local names the upstream service does not know, so they
/// travel as the anchor position. Every other reference is passed through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Waypoint<'a> {
    /// A place the upstream service identifies by reference.
    Place(&'a PlaceReference),
    /// A fixed position.
    Location(Coordinate),
}

impl<'a> From<&'a PlaceReference> for Waypoint<'a> {
    fn from(reference: &'a PlaceReference) -> Self {
        Self::Place(reference)
    }
}

impl std::fmt::Display for Waypoint<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Place(reference) => write!(f, "{reference}"),
            Self::Location(point) => write!(f, "{},{}", point.lat(), point.lng()),
        }
    }
}

/// One directions request for a single travel mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionsQuery<'a> {
    /// Where the trip starts.
    pub origin: Waypoint<'a>,
    /// Where the trip ends.
    pub destination: Waypoint<'a>,
    /// Requested travel mode; never [`RouteMode::Shuttle`].
    pub mode: RouteMode,
    /// Whether alternative routes should be returned.
    pub alternatives: bool,
}

/// Fetch routes for one travel mode.
///
/// Implementations perform a single request with no retries. A successful
/// response with no routes may be reported as `Ok(vec![])`; callers decide how
/// to treat it.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use campus_core::{DirectionsProvider, DirectionsQuery, Route, UpstreamError};
///
/// struct NoRoutes;
///
/// #[async_trait]
/// impl DirectionsProvider for NoRoutes {
///     async fn fetch_routes(
///         &self,
///         query: &DirectionsQuery<'_>,
///     ) -> Result<Vec<Route>, UpstreamError> {
///         Err(UpstreamError::Service {
///             status: "ZERO_RESULTS".to_owned(),
///             message: format!("no {} routes", query.mode),
///         })
///     }
/// }
/// ```
#[async_trait]
pub trait DirectionsProvider: Send + Sync {
    /// Return the upstream routes for `query`, in upstream order.
    async fn fetch_routes(&self, query: &DirectionsQuery<'_>) -> Result<Vec<Route>, UpstreamError>;
}

/// Look up the position of a place reference.
#[async_trait]
pub trait PlaceDetailsProvider: Send + Sync {
    /// Return the coordinate of `reference`.
    async fn place_location(
        &self,
        reference: &PlaceReference,
    ) -> Result<Coordinate, UpstreamError>;
}

#[async_trait]
impl<T: DirectionsProvider + ?Sized> DirectionsProvider for &T {
    async fn fetch_routes(&self, query: &DirectionsQuery<'_>) -> Result<Vec<Route>, UpstreamError> {
        (**self).fetch_routes(query).await
    }
}

#[async_trait]
impl<T: PlaceDetailsProvider + ?Sized> PlaceDetailsProvider for &T {
    async fn place_location(
        &self,
        reference: &PlaceReference,
    ) -> Result<Coordinate, UpstreamError> {
        (**self).place_location(reference).await
    }
}
