//! Single-mode directions fetch with failure normalisation.

use log::warn;

use crate::{DirectionsProvider, DirectionsQuery, Route, RouteMode, UpstreamError, Waypoint};

/// Outcome of one mode fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum ModeResult {
    /// At least one route was returned, in upstream order.
    Available(Vec<Route>),
    /// The mode could not be served for this request.
    Unavailable(UpstreamError),
}

/// Fetch routes for `mode` with alternatives enabled.
///
/// Exactly one request is issued. Every failure, including an `OK` answer
/// with no routes, is logged and reported as [`ModeResult::Unavailable`].
pub async fn fetch_mode<D>(
    provider: &D,
    mode: RouteMode,
    origin: Waypoint<'_>,
    destination: Waypoint<'_>,
) -> ModeResult
where
    D: DirectionsProvider + ?Sized,
{
    let query = DirectionsQuery {
        origin,
        destination,
        mode,
        alternatives: true,
    };
    match provider.fetch_routes(&query).await {
        Ok(routes) if routes.is_empty() => {
            warn!("{mode} directions from {origin} to {destination} returned no routes");
            ModeResult::Unavailable(UpstreamError::Service {
                status: "ZERO_RESULTS".to_owned(),
                message: "response contained no routes".to_owned(),
            })
        }
        Ok(routes) => ModeResult::Available(routes),
        Err(err) => {
            warn!("{mode} directions from {origin} to {destination} unavailable: {err}");
            ModeResult::Unavailable(err)
        }
    }
}
