//! Behavioural tests running [`DirectionsAggregator`] over [`HttpMapsClient`].
//!
//! A loopback maps service answers every request with the same canned body,
//! so the scenarios observe exactly what the client puts on the wire.

use std::cell::RefCell;
use std::time::Duration;

use campus_core::{AggregateError, CampusConfig, DirectionsAggregator, PlaceReference, RouteBundle};
use campus_data::maps::{HttpMapsClient, MapsClientConfig};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tokio::runtime::Runtime;

mod support;

use support::MapsService;

const TWO_ROUTES: &str = r#"{
    "status": "OK",
    "routes": [
        {"summary": "first", "legs": [{"duration": {"text": "10 mins", "value": 600}, "distance": {"text": "5 km", "value": 5000}}]},
        {"summary": "second", "legs": [{"duration": {"text": "12 mins", "value": 720}, "distance": {"text": "6 km", "value": 6000}}]}
    ]
}"#;

const DENIED: &str = r#"{"status": "REQUEST_DENIED", "error_message": "bad key"}"#;

#[derive(Debug)]
struct MapsWorld {
    runtime: Runtime,
    service: RefCell<Option<MapsService>>,
    result: RefCell<Option<Result<RouteBundle, AggregateError>>>,
}

impl MapsWorld {
    fn start_service(&self, body: &'static str) {
        let service = self.runtime.block_on(MapsService::start("200 OK", body));
        *self.service.borrow_mut() = Some(service);
    }

    fn directions_requests(&self) -> Vec<String> {
        self.service
            .borrow()
            .as_ref()
            .expect("maps service started")
            .directions_requests()
    }

    fn bundle(&self) -> RouteBundle {
        match self.result.borrow().as_ref() {
            Some(Ok(bundle)) => bundle.clone(),
            other => panic!("expected a bundle, got {other:?}"),
        }
    }
}

#[fixture]
fn world() -> MapsWorld {
    MapsWorld {
        runtime: tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("test runtime"),
        service: RefCell::new(None),
        result: RefCell::new(None),
    }
}

// --- Given steps ---

#[given("a maps service answering every request with two routes")]
fn service_with_routes(#[from(world)] world: &MapsWorld) {
    world.start_service(TWO_ROUTES);
}

#[given("a maps service denying every request")]
fn service_denying(#[from(world)] world: &MapsWorld) {
    world.start_service(DENIED);
}

// --- When steps ---

#[when("I request directions from {source} to {destination}")]
fn request_directions(source: String, destination: String, #[from(world)] world: &MapsWorld) {
    let base_url = world
        .service
        .borrow()
        .as_ref()
        .expect("maps service started")
        .base_url()
        .to_owned();
    let origin = PlaceReference::new(source.trim_matches('"'));
    let target = PlaceReference::new(destination.trim_matches('"'));

    let result = world.runtime.block_on(async {
        let config = MapsClientConfig::new("test-key")
            .with_base_url(base_url)
            .with_timeout(Duration::from_secs(5));
        let client = HttpMapsClient::with_config(config).expect("client should build");
        let aggregator = DirectionsAggregator::new(&client, &client, CampusConfig::default());
        aggregator.aggregate(&origin, &target).await
    });
    *world.result.borrow_mut() = Some(result);
}

// --- Then steps ---

#[then("four directions requests name both campuses by position")]
fn campuses_by_position(#[from(world)] world: &MapsWorld) {
    let requests = world.directions_requests();
    assert_eq!(requests.len(), 4, "{requests:?}");
    for line in &requests {
        assert!(line.contains("origin=43.6629%2C-79.3957"), "{line}");
        assert!(line.contains("destination=43.5483%2C-79.6627"), "{line}");
        assert!(!line.contains("place_id"), "{line}");
    }
}

#[then("four directions requests name both places by id")]
fn places_by_id(#[from(world)] world: &MapsWorld) {
    let requests = world.directions_requests();
    assert_eq!(requests.len(), 4, "{requests:?}");
    for line in &requests {
        assert!(line.contains("origin=place_id%3AChIJorigin"), "{line}");
        assert!(line.contains("destination=place_id%3AChIJdest"), "{line}");
    }
}

#[then("every mode lists two routes")]
fn two_routes_each(#[from(world)] world: &MapsWorld) {
    let bundle = world.bundle();
    assert_eq!(bundle.driving.len(), 2);
    assert_eq!(bundle.walking.len(), 2);
    assert_eq!(bundle.bicycling.len(), 2);
    assert_eq!(bundle.transit.len(), 2);
}

#[then("one shuttle route is offered")]
fn one_shuttle(#[from(world)] world: &MapsWorld) {
    assert_eq!(world.bundle().shuttle.len(), 1);
}

#[then("no shuttle route is offered")]
fn no_shuttle(#[from(world)] world: &MapsWorld) {
    assert!(world.bundle().shuttle.is_empty());
}

#[then("directions are unavailable for all four modes")]
fn all_unavailable(#[from(world)] world: &MapsWorld) {
    let borrowed = world.result.borrow();
    let Some(Err(AggregateError::DirectionsUnavailable { failures })) = borrowed.as_ref() else {
        panic!("expected DirectionsUnavailable, got {borrowed:?}");
    };
    assert_eq!(failures.len(), 4);
}

// --- Scenario registrations ---

macro_rules! register_scenario {
    ($fn_name:ident, $title:literal) => {
        #[scenario(path = "tests/features/maps_directions.feature", name = $title)]
        fn $fn_name(world: MapsWorld) {
            let _ = world;
        }
    };
}

register_scenario!(
    campus_aliases_by_position,
    "campus aliases are requested by anchor position"
);
register_scenario!(places_by_place_id, "other references are requested by place id");
register_scenario!(
    denied_service_leaves_no_directions,
    "a service denying every request leaves no directions"
);
