//! Route objects synthesized for the shuttle, shaped like upstream routes.

use serde::{Deserialize, Serialize};

use crate::{Coordinate, Measure};

/// Minimal axis-aligned box covering a route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Maximum latitude and longitude.
    pub northeast: Coordinate,
    /// Minimum latitude and longitude.
    pub southwest: Coordinate,
}

impl Bounds {
    /// Whether `point` lies inside or on the edge of the box.
    #[must_use]
    pub fn contains(&self, point: Coordinate) -> bool {
        (self.southwest.lat()..=self.northeast.lat()).contains(&point.lat())
            && (self.southwest.lng()..=self.northeast.lng()).contains(&point.lng())
    }
}

/// How a single step is travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TravelMode {
    /// On foot.
    Walking,
    /// Aboard the shuttle.
    Transit,
}

/// Operator of a transit line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitAgency {
    /// Agency name.
    pub name: String,
}

/// Vehicle operating a transit line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitVehicle {
    /// Vehicle category, e.g. `"BUS"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Display name of the vehicle category.
    pub name: String,
}

/// Descriptor of the shuttle line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitLine {
    /// Operating agencies.
    pub agencies: Vec<TransitAgency>,
    /// Full line name.
    pub name: String,
    /// Abbreviated line name.
    pub short_name: String,
    /// Line colour as `#RRGGBB`.
    pub color: String,
    /// Text colour used on top of [`Self::color`].
    pub text_color: String,
    /// Operating vehicle.
    pub vehicle: TransitVehicle,
}

/// A boarding or alighting stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitStop {
    /// Stop name.
    pub name: String,
    /// Stop position.
    pub location: Coordinate,
}

/// Details attached to the transit step of a shuttle itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitDetails {
    /// Line descriptor.
    pub line: TransitLine,
    /// Where the shuttle is boarded.
    pub departure_stop: TransitStop,
    /// Where the shuttle is left.
    pub arrival_stop: TransitStop,
    /// Number of stops travelled.
    pub num_stops: u32,
    /// Direction shown on the vehicle.
    pub headsign: String,
}

/// One step of a synthesized leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// How the step is travelled.
    pub travel_mode: TravelMode,
    /// Step distance in metres.
    pub distance: Measure,
    /// Step duration in seconds, rounded to whole minutes.
    pub duration: Measure,
    /// Where the step begins.
    pub start_location: Coordinate,
    /// Where the step ends.
    pub end_location: Coordinate,
    /// Instruction shown to the user.
    pub html_instructions: String,
    /// Present on the transit step only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transit_details: Option<TransitDetails>,
}

/// The single leg of a synthesized route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticLeg {
    /// Sum of the step durations.
    pub duration: Measure,
    /// Sum of the step distances.
    pub distance: Measure,
    /// Route origin.
    pub start_location: Coordinate,
    /// Route destination.
    pub end_location: Coordinate,
    /// Walk, shuttle, walk.
    pub steps: Vec<Step>,
}

/// Price of the itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fare {
    /// ISO 4217 currency code.
    pub currency: String,
    /// Amount in `currency`.
    pub value: u32,
    /// Display text.
    pub text: String,
}

/// A walk, shuttle, walk itinerary generated locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticRoute {
    /// Box covering both endpoints and both campuses.
    pub bounds: Bounds,
    /// Exactly one leg.
    pub legs: Vec<SyntheticLeg>,
    /// Total duration, equal to the leg duration.
    pub duration: Measure,
    /// Total distance, equal to the leg distance.
    pub distance: Measure,
    /// Always free.
    pub fare: Fare,
    /// Short label for the route list.
    pub summary: String,
    /// Caveats shown with the route.
    pub warnings: Vec<String>,
}

impl SyntheticRoute {
    /// Steps of the only leg.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        self.legs
            .first()
            .map(|leg| leg.steps.as_slice())
            .unwrap_or_default()
    }
}
