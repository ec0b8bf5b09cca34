//! Adapters connecting `campus-core` to external mapping services.
//!
//! Responsibilities:
//! - Implement the core collaborator traits over HTTP.
//! - Decode upstream payloads into core types.
//!
//! Boundaries:
//! - Do not encode aggregation or shuttle rules (live in `campus-core`).
//! - Never log or report the API key.

pub mod maps;

pub use maps::{
    ClientBuildError, DEFAULT_BASE_URL, DEFAULT_USER_AGENT, HttpMapsClient, MapsClientConfig,
};
