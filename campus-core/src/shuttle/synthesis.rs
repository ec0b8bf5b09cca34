//! Builds the walk, shuttle, walk itinerary between two points.

use geo::{Coord, Rect};

use super::format::{distance_text, duration_text};
use super::types::{
    Bounds, Fare, Step, SyntheticLeg, SyntheticRoute, TransitAgency, TransitDetails, TransitLine,
    TransitStop, TransitVehicle, TravelMode,
};
use crate::{CampusAnchor, CampusConfig, Coordinate, Measure, distance_km};

/// Walking pace of 5 km/h.
pub const WALKING_MINUTES_PER_KM: f64 = 12.0;

/// Shuttle pace of 30 km/h.
pub const SHUTTLE_MINUTES_PER_KM: f64 = 2.0;

const AGENCY_NAME: &str = "University of Toronto";
const LINE_NAME: &str = "Inter-Campus Shuttle";
const LINE_SHORT_NAME: &str = "ICS";
const LINE_COLOR: &str = "#1E3765";
const LINE_TEXT_COLOR: &str = "#FFFFFF";
const FARE_CURRENCY: &str = "CAD";
const FARE_TEXT: &str = "Free";
const SCHEDULE_WARNING: &str =
    "Shuttle times are estimated from distance; check the published schedule before travelling.";

/// Distance and rounded travel time for one step.
#[derive(Debug, Clone, Copy)]
struct LegPlan {
    from: Coordinate,
    to: Coordinate,
    metres: u64,
    minutes: u64,
}

impl LegPlan {
    fn new(from: Coordinate, to: Coordinate, minutes_per_km: f64) -> Self {
        let km = distance_km(from, to);
        Self {
            from,
            to,
            metres: whole(km * 1000.0),
            minutes: whole(km * minutes_per_km),
        }
    }

    fn distance(&self) -> Measure {
        Measure {
            text: distance_text(self.metres),
            value: self.metres,
        }
    }

    fn duration(&self) -> Measure {
        Measure {
            text: duration_text(self.minutes),
            value: self.minutes * 60,
        }
    }

    fn step(&self, travel_mode: TravelMode, html_instructions: String) -> Step {
        Step {
            travel_mode,
            distance: self.distance(),
            duration: self.duration(),
            start_location: self.from,
            end_location: self.to,
            html_instructions,
            transit_details: None,
        }
    }
}

/// Round a non-negative finite quantity to the nearest integer.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "inputs are non-negative distances far below u64::MAX"
)]
fn whole(value: f64) -> u64 {
    value.round().max(0.0) as u64
}

/// Synthesize the shuttle itinerary from `source` to `destination`.
///
/// Each endpoint walks to (or from) its nearest campus and the shuttle links
/// the two campuses. Durations are rounded to whole minutes per step and the
/// totals are the sums of the rounded steps. Returns an empty vector when
/// either endpoint is unresolved.
///
/// # Examples
///
/// ```
/// use campus_core::{CampusConfig, shuttle::synthesize};
///
/// let campuses = CampusConfig::default();
/// let routes = synthesize(
///     &campuses,
///     Some(campuses.first().coordinate),
///     Some(campuses.second().coordinate),
/// );
/// assert_eq!(routes.len(), 1);
/// assert_eq!(routes[0].steps().len(), 3);
/// assert_eq!(routes[0].fare.value, 0);
/// ```
#[must_use]
pub fn synthesize(
    campuses: &CampusConfig,
    source: Option<Coordinate>,
    destination: Option<Coordinate>,
) -> Vec<SyntheticRoute> {
    let (Some(source), Some(destination)) = (source, destination) else {
        return Vec::new();
    };
    vec![build_route(campuses, source, destination)]
}

fn build_route(
    campuses: &CampusConfig,
    source: Coordinate,
    destination: Coordinate,
) -> SyntheticRoute {
    let boarding = campuses.nearest(source);
    let alighting = campuses.nearest(destination);

    let walk_in = LegPlan::new(source, boarding.coordinate, WALKING_MINUTES_PER_KM);
    let ride = LegPlan::new(
        boarding.coordinate,
        alighting.coordinate,
        SHUTTLE_MINUTES_PER_KM,
    );
    let walk_out = LegPlan::new(alighting.coordinate, destination, WALKING_MINUTES_PER_KM);

    let total_metres = walk_in.metres + ride.metres + walk_out.metres;
    let total_minutes = walk_in.minutes + ride.minutes + walk_out.minutes;
    let distance = Measure {
        text: distance_text(total_metres),
        value: total_metres,
    };
    let duration = Measure {
        text: duration_text(total_minutes),
        value: total_minutes * 60,
    };

    let mut ride_step = ride.step(
        TravelMode::Transit,
        format!("{LINE_NAME} towards {}", alighting.title),
    );
    ride_step.transit_details = Some(transit_details(boarding, alighting));

    let steps = vec![
        walk_in.step(
            TravelMode::Walking,
            format!("Walk to the {} shuttle stop", boarding.title),
        ),
        ride_step,
        walk_out.step(TravelMode::Walking, "Walk to your destination".to_owned()),
    ];

    SyntheticRoute {
        bounds: covering_bounds(&[
            source,
            destination,
            campuses.first().coordinate,
            campuses.second().coordinate,
        ]),
        legs: vec![SyntheticLeg {
            duration: duration.clone(),
            distance: distance.clone(),
            start_location: source,
            end_location: destination,
            steps,
        }],
        duration,
        distance,
        fare: Fare {
            currency: FARE_CURRENCY.to_owned(),
            value: 0,
            text: FARE_TEXT.to_owned(),
        },
        summary: format!(
            "Free {LINE_NAME}: {} to {}",
            boarding.title, alighting.title
        ),
        warnings: vec![SCHEDULE_WARNING.to_owned()],
    }
}

fn transit_details(boarding: &CampusAnchor, alighting: &CampusAnchor) -> TransitDetails {
    TransitDetails {
        line: TransitLine {
            agencies: vec![TransitAgency {
                name: AGENCY_NAME.to_owned(),
            }],
            name: LINE_NAME.to_owned(),
            short_name: LINE_SHORT_NAME.to_owned(),
            color: LINE_COLOR.to_owned(),
            text_color: LINE_TEXT_COLOR.to_owned(),
            vehicle: TransitVehicle {
                kind: "BUS".to_owned(),
                name: "Bus".to_owned(),
            },
        },
        departure_stop: TransitStop {
            name: format!("{} Shuttle Stop", boarding.title),
            location: boarding.coordinate,
        },
        arrival_stop: TransitStop {
            name: format!("{} Shuttle Stop", alighting.title),
            location: alighting.coordinate,
        },
        num_stops: 1,
        headsign: alighting.title.clone(),
    }
}

/// Smallest box containing every point.
fn covering_bounds(points: &[Coordinate]) -> Bounds {
    let rect = points
        .iter()
        .map(|&point| Coord::from(point))
        .fold(None::<Rect<f64>>, |acc, coord| {
            Some(acc.map_or_else(
                || Rect::new(coord, coord),
                |rect| {
                    Rect::new(
                        Coord {
                            x: rect.min().x.min(coord.x),
                            y: rect.min().y.min(coord.y),
                        },
                        Coord {
                            x: rect.max().x.max(coord.x),
                            y: rect.max().y.max(coord.y),
                        },
                    )
                },
            ))
        });

    rect.map_or(
        Bounds {
            northeast: Coordinate::new_unchecked(0.0, 0.0),
            southwest: Coordinate::new_unchecked(0.0, 0.0),
        },
        |rect| Bounds {
            northeast: Coordinate::new_unchecked(rect.max().y, rect.max().x),
            southwest: Coordinate::new_unchecked(rect.min().y, rect.min().x),
        },
    )
}
