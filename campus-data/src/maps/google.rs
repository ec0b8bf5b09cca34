//! Response envelopes for the Directions and Place Details web services.
//!
//! Both services answer HTTP 200 with a `status` field; anything other than
//! `"OK"` is a service-level failure.

use campus_core::{Coordinate, Route, UpstreamError};
use serde::Deserialize;

const STATUS_OK: &str = "OK";

/// Directions API response.
#[derive(Debug, Deserialize)]
pub struct DirectionsResponse {
    /// Status code, e.g. `"OK"` or `"ZERO_RESULTS"`.
    pub status: String,
    /// Optional explanation when `status` is not `"OK"`.
    pub error_message: Option<String>,
    /// Routes in upstream order; absent on most failures.
    #[serde(default)]
    pub routes: Vec<Route>,
}

impl DirectionsResponse {
    /// Check if the response indicates success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Routes on success, or the service failure.
    pub fn into_routes(self) -> Result<Vec<Route>, UpstreamError> {
        if !self.is_ok() {
            return Err(service_error(self.status, self.error_message));
        }
        Ok(self.routes)
    }
}

/// Place Details API response restricted to `fields=geometry`.
#[derive(Debug, Deserialize)]
pub struct PlaceDetailsResponse {
    /// Status code, e.g. `"OK"` or `"NOT_FOUND"`.
    pub status: String,
    /// Optional explanation when `status` is not `"OK"`.
    pub error_message: Option<String>,
    /// The place, present on success.
    pub result: Option<PlaceResult>,
}

/// The requested subset of a place record.
#[derive(Debug, Deserialize)]
pub struct PlaceResult {
    /// Geometry of the place; missing for some place types.
    pub geometry: Option<PlaceGeometry>,
}

/// Place geometry.
#[derive(Debug, Deserialize)]
pub struct PlaceGeometry {
    /// Representative point.
    pub location: Coordinate,
}

impl PlaceDetailsResponse {
    /// Check if the response indicates success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// The place location on success, or why it is unavailable.
    pub fn into_location(self) -> Result<Coordinate, UpstreamError> {
        if !self.is_ok() {
            return Err(service_error(self.status, self.error_message));
        }
        self.result
            .and_then(|place| place.geometry)
            .map(|geometry| geometry.location)
            .ok_or_else(|| UpstreamError::Parse {
                message: "place details response missing geometry.location".to_owned(),
            })
    }
}

fn service_error(status: String, message: Option<String>) -> UpstreamError {
    UpstreamError::Service {
        status,
        message: message.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn directions_success_keeps_upstream_fields() {
        let json = r#"{
            "status": "OK",
            "geocoded_waypoints": [],
            "routes": [{
                "summary": "QEW",
                "warnings": [],
                "legs": [{
                    "duration": {"text": "35 mins", "value": 2100},
                    "distance": {"text": "31.2 km", "value": 31200},
                    "steps": []
                }]
            }]
        }"#;

        let response: DirectionsResponse = serde_json::from_str(json).expect("should deserialise");
        let routes = response.into_routes().expect("status OK");

        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].legs[0].duration.value, 2100);
        assert_eq!(routes[0].rest["summary"], "QEW");
    }

    #[rstest]
    fn directions_ok_without_routes_is_empty() {
        let response: DirectionsResponse =
            serde_json::from_str(r#"{"status": "OK"}"#).expect("should deserialise");

        assert!(response.into_routes().expect("status OK").is_empty());
    }

    #[rstest]
    #[case("ZERO_RESULTS", None, "")]
    #[case("REQUEST_DENIED", Some("The provided API key is invalid."), "The provided API key is invalid.")]
    fn directions_failure_status_is_service_error(
        #[case] status: &str,
        #[case] message: Option<&str>,
        #[case] expected_message: &str,
    ) {
        let response = DirectionsResponse {
            status: status.to_owned(),
            error_message: message.map(str::to_owned),
            routes: Vec::new(),
        };

        let err = response.into_routes().expect_err("should fail");

        assert_eq!(
            err,
            UpstreamError::Service {
                status: status.to_owned(),
                message: expected_message.to_owned(),
            }
        );
    }

    #[rstest]
    fn place_details_success_yields_location() {
        let json = r#"{
            "status": "OK",
            "result": {"geometry": {"location": {"lat": 43.6645, "lng": -79.3996}}}
        }"#;

        let response: PlaceDetailsResponse =
            serde_json::from_str(json).expect("should deserialise");
        let location = response.into_location().expect("status OK");

        assert_eq!(
            location,
            Coordinate::new(43.6645, -79.3996).expect("valid coordinate")
        );
    }

    #[rstest]
    fn place_details_missing_geometry_is_parse_error() {
        let response: PlaceDetailsResponse =
            serde_json::from_str(r#"{"status": "OK", "result": {}}"#)
                .expect("should deserialise");

        assert!(matches!(
            response.into_location(),
            Err(UpstreamError::Parse { .. })
        ));
    }

    #[rstest]
    fn place_details_out_of_range_location_is_rejected() {
        let json = r#"{
            "status": "OK",
            "result": {"geometry": {"location": {"lat": 143.0, "lng": 0.0}}}
        }"#;

        assert!(serde_json::from_str::<PlaceDetailsResponse>(json).is_err());
    }

    #[rstest]
    fn place_details_not_found_is_service_error() {
        let response: PlaceDetailsResponse =
            serde_json::from_str(r#"{"status": "NOT_FOUND"}"#).expect("should deserialise");

        assert!(matches!(
            response.into_location(),
            Err(UpstreamError::Service { ref status, .. }) if status == "NOT_FOUND"
        ));
    }
}
