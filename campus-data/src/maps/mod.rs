//! HTTP client for a Google-compatible maps web service.
//!
//! [`HttpMapsClient`] implements both [`campus_core::DirectionsProvider`] and
//! [`campus_core::PlaceDetailsProvider`] so a single client can be shared by
//! the aggregator for route fetches and place lookups.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use campus_core::{CampusConfig, DirectionsAggregator, PlaceReference};
//! use campus_data::maps::{HttpMapsClient, MapsClientConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MapsClientConfig::new("my-api-key").with_timeout(Duration::from_secs(10));
//! let client = HttpMapsClient::with_config(config)?;
//! let aggregator = DirectionsAggregator::new(&client, &client, CampusConfig::default());
//!
//! let bundle = aggregator
//!     .aggregate(&PlaceReference::new("utsg"), &PlaceReference::new("utm"))
//!     .await?;
//! assert!(bundle.shuttle.len() <= 1);
//! # Ok(())
//! # }
//! ```

mod client;
mod google;

pub use client::{
    ClientBuildError, DEFAULT_BASE_URL, DEFAULT_USER_AGENT, HttpMapsClient, MapsClientConfig,
};
