//! Upstream route objects and the per-mode result bundle.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::shuttle::SyntheticRoute;

/// Travel method offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteMode {
    /// Private vehicle.
    Driving,
    /// On foot.
    Walking,
    /// Bicycle.
    Bicycling,
    /// Public transit.
    Transit,
    /// The free inter-campus shuttle, synthesized locally.
    Shuttle,
}

impl RouteMode {
    /// Modes requested from the upstream directions service, in bundle order.
    pub const UPSTREAM: [Self; 4] = [Self::Driving, Self::Walking, Self::Bicycling, Self::Transit];

    /// Lower-case wire name, e.g. `"bicycling"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
            Self::Bicycling => "bicycling",
            Self::Transit => "transit",
            Self::Shuttle => "shuttle",
        }
    }
}

impl std::fmt::Display for RouteMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A quantity paired with its display text, e.g. `{ "text": "5 mins", "value": 300 }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measure {
    /// Human-readable rendering.
    pub text: String,
    /// Raw value: seconds for durations, metres for distances.
    pub value: u64,
}

/// One leg of an upstream route.
///
/// Only `duration` and `distance` are interpreted; every other field is kept
/// verbatim so the leg re-serialises in the upstream shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    /// Travel time for the leg.
    pub duration: Measure,
    /// Travel distance for the leg.
    pub distance: Measure,
    /// Uninterpreted upstream fields.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// A route returned by the upstream directions service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Route legs; requests without waypoints yield exactly one.
    pub legs: Vec<RouteLeg>,
    /// Uninterpreted upstream fields (bounds, polyline, summary, fare, ...).
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Route {
    /// The first leg, which carries the route's headline duration and distance.
    #[must_use]
    pub fn first_leg(&self) -> Option<&RouteLeg> {
        self.legs.first()
    }
}

/// Directions for every mode, as returned to the HTTP layer.
///
/// Every field is always present; a mode with no usable routes is an empty
/// list rather than a missing key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RouteBundle {
    /// Driving alternatives in upstream order.
    pub driving: Vec<Route>,
    /// Walking alternatives in upstream order.
    pub walking: Vec<Route>,
    /// Cycling alternatives in upstream order.
    pub bicycling: Vec<Route>,
    /// Transit alternatives, trimmed to the configured limit.
    pub transit: Vec<Route>,
    /// Zero or one synthesized shuttle itinerary.
    pub shuttle: Vec<SyntheticRoute>,
}

impl RouteBundle {
    /// Upstream routes stored for `mode`; empty for [`RouteMode::Shuttle`].
    #[must_use]
    pub const fn routes(&self, mode: RouteMode) -> &[Route] {
        match mode {
            RouteMode::Driving => self.driving.as_slice(),
            RouteMode::Walking => self.walking.as_slice(),
            RouteMode::Bicycling => self.bicycling.as_slice(),
            RouteMode::Transit => self.transit.as_slice(),
            RouteMode::Shuttle => &[],
        }
    }

    fn slot_mut(&mut self, mode: RouteMode) -> Option<&mut Vec<Route>> {
        match mode {
            RouteMode::Driving => Some(&mut self.driving),
            RouteMode::Walking => Some(&mut self.walking),
            RouteMode::Bicycling => Some(&mut self.bicycling),
            RouteMode::Transit => Some(&mut self.transit),
            RouteMode::Shuttle => None,
        }
    }

    /// Store upstream routes for `mode`. Shuttle routes are ignored here.
    pub(crate) fn set_routes(&mut self, mode: RouteMode, routes: Vec<Route>) {
        if let Some(slot) = self.slot_mut(mode) {
            *slot = routes;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const UPSTREAM_ROUTE: &str = r#"{
        "summary": "Bloor St W",
        "overview_polyline": {"points": "abc"},
        "legs": [{
            "duration": {"text": "12 mins", "value": 720},
            "distance": {"text": "3.4 km", "value": 3400},
            "start_address": "Somewhere"
        }]
    }"#;

    #[rstest]
    fn route_preserves_unknown_fields() {
        let route: Route = serde_json::from_str(UPSTREAM_ROUTE).expect("valid route");
        let leg = route.first_leg().expect("one leg");
        assert_eq!(leg.duration.value, 720);
        assert_eq!(leg.distance.value, 3400);
        assert_eq!(leg.rest.get("start_address"), Some(&Value::from("Somewhere")));

        let reencoded = serde_json::to_value(&route).expect("serialise");
        let original: Value = serde_json::from_str(UPSTREAM_ROUTE).expect("valid json");
        assert_eq!(reencoded, original);
    }

    #[rstest]
    fn route_without_leg_measures_is_rejected() {
        let json = r#"{"legs": [{"duration": {"text": "1 min", "value": 60}}]}"#;
        assert!(serde_json::from_str::<Route>(json).is_err());
    }

    #[rstest]
    fn empty_bundle_serialises_every_mode_as_array() {
        let value = serde_json::to_value(RouteBundle::default()).expect("serialise");
        let object = value.as_object().expect("bundle is an object");
        assert_eq!(object.len(), 5);
        for key in ["driving", "walking", "bicycling", "transit", "shuttle"] {
            assert_eq!(object.get(key), Some(&Value::Array(Vec::new())), "{key}");
        }
    }

    #[rstest]
    #[case(RouteMode::Driving, "\"driving\"")]
    #[case(RouteMode::Bicycling, "\"bicycling\"")]
    #[case(RouteMode::Shuttle, "\"shuttle\"")]
    fn modes_serialise_lower_case(#[case] mode: RouteMode, #[case] expected: &str) {
        assert_eq!(serde_json::to_string(&mode).expect("serialise"), expected);
        assert_eq!(format!("\"{mode}\""), expected);
    }
}
