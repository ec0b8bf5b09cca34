//! Directions aggregation across every supported travel mode.

mod aggregator;
mod fetcher;

pub use aggregator::{
    AggregateError, AggregatorOptions, DEFAULT_TRANSIT_LIMIT, DirectionsAggregator, ModeFailure,
};
pub use fetcher::{ModeResult, fetch_mode};
