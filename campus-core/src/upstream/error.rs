use thiserror::Error;

/// Failures reported by the upstream mapping collaborators.
///
/// Both [`crate::DirectionsProvider`] and [`crate::PlaceDetailsProvider`]
/// report this type. The aggregator treats every variant identically: the
/// affected mode or place is simply unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    /// The request could not reach the service.
    #[error("network error contacting {url}: {message}")]
    Network {
        /// Request URL with credentials removed.
        url: String,
        /// Transport error description.
        message: String,
    },
    /// The request exceeded the client timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Request URL with credentials removed.
        url: String,
        /// Configured timeout.
        timeout_secs: u64,
    },
    /// The service answered with an HTTP error status.
    #[error("HTTP {status} from {url}: {message}")]
    Http {
        /// Request URL with credentials removed.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error description.
        message: String,
    },
    /// The service answered with a non-`OK` status field.
    #[error("service returned {status}: {message}")]
    Service {
        /// Status code from the payload, e.g. `"ZERO_RESULTS"`.
        status: String,
        /// Optional explanation from the payload.
        message: String,
    },
    /// The payload could not be decoded or lacked required fields.
    #[error("malformed response: {message}")]
    Parse {
        /// Decoder error description.
        message: String,
    },
}
