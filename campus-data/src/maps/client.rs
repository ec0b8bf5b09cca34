//! Reqwest-backed implementation of the upstream collaborator traits.

use std::time::Duration;

use async_trait::async_trait;
use campus_core::{
    Coordinate, DirectionsProvider, DirectionsQuery, PlaceDetailsProvider, PlaceReference, Route,
    UpstreamError, Waypoint,
};
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use super::google::{DirectionsResponse, PlaceDetailsResponse};

/// Default service root for the Google Maps web services.
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Default user agent for maps requests.
pub const DEFAULT_USER_AGENT: &str = "campus-directions/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Error type for [`HttpMapsClient`] construction failures.
#[derive(Debug, Error)]
pub enum ClientBuildError {
    /// No API key was configured.
    #[error("a maps API key is required")]
    MissingApiKey,
    /// The base URL could not be parsed or cannot carry a path.
    #[error("invalid maps base URL {url:?}: {message}")]
    BaseUrl {
        /// The rejected URL.
        url: String,
        /// Why it was rejected.
        message: String,
    },
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Configuration for [`HttpMapsClient`].
#[derive(Clone)]
pub struct MapsClientConfig {
    /// Service root, e.g. `"https://maps.googleapis.com/maps/api"`.
    pub base_url: String,
    /// Credential appended to every request as the `key` parameter.
    pub api_key: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl std::fmt::Debug for MapsClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapsClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl MapsClientConfig {
    /// Create a configuration for the default service with `api_key`.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Point the client at a different service root.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// HTTP client for the Directions and Place Details services.
///
/// Each trait call issues exactly one GET request with no retries. Request
/// URLs quoted in errors and logs never include the API key.
#[derive(Debug)]
pub struct HttpMapsClient {
    client: Client,
    config: MapsClientConfig,
    base_url: String,
}

impl HttpMapsClient {
    /// Create a client for the default service.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty or the HTTP client fails to build.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ClientBuildError> {
        Self::with_config(MapsClientConfig::new(api_key))
    }

    /// Create a client with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty, the base URL is unusable, or the
    /// HTTP client fails to build.
    pub fn with_config(config: MapsClientConfig) -> Result<Self, ClientBuildError> {
        if config.api_key.trim().is_empty() {
            return Err(ClientBuildError::MissingApiKey);
        }
        let base_url = config.base_url.trim_end_matches('/').to_owned();
        let parsed = Url::parse(&base_url).map_err(|err| ClientBuildError::BaseUrl {
            url: config.base_url.clone(),
            message: err.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ClientBuildError::BaseUrl {
                url: config.base_url.clone(),
                message: "URL cannot carry a path".to_owned(),
            });
        }
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ClientBuildError::HttpClient)?;
        Ok(Self {
            client,
            config,
            base_url,
        })
    }

    /// Directions request URL without credentials.
    ///
    /// The format is `{base_url}/directions/json?origin=..&destination=..&mode=..&alternatives=..`
    /// where each endpoint is `place_id:<id>` or `<lat>,<lng>`.
    fn directions_url(&self, query: &DirectionsQuery<'_>) -> Result<Url, UpstreamError> {
        self.endpoint(
            "directions/json",
            &[
                ("origin", waypoint_param(query.origin)),
                ("destination", waypoint_param(query.destination)),
                ("mode", query.mode.as_str().to_owned()),
                ("alternatives", query.alternatives.to_string()),
            ],
        )
    }

    /// Place details request URL without credentials.
    fn place_details_url(&self, reference: &PlaceReference) -> Result<Url, UpstreamError> {
        self.endpoint(
            "place/details/json",
            &[
                ("place_id", reference.id().to_owned()),
                ("fields", "geometry".to_owned()),
            ],
        )
    }

    fn endpoint(&self, path: &str, params: &[(&str, String)]) -> Result<Url, UpstreamError> {
        let raw = format!("{}/{path}", self.base_url);
        Url::parse_with_params(&raw, params).map_err(|err| UpstreamError::Network {
            url: raw,
            message: err.to_string(),
        })
    }

    /// Issue a GET for `url` with the key attached and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, UpstreamError> {
        let shown = url.as_str();
        debug!("GET {shown}");

        let mut signed = url.clone();
        signed
            .query_pairs_mut()
            .append_pair("key", &self.config.api_key);

        let response = self
            .client
            .get(signed)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, shown))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, shown))?;

        response.json().await.map_err(|err| UpstreamError::Parse {
            message: strip_key(&err.to_string(), &self.config.api_key),
        })
    }

    /// Convert a reqwest error to an `UpstreamError`.
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> UpstreamError {
        let message = strip_key(&error.to_string(), &self.config.api_key);

        if error.is_timeout() {
            return UpstreamError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return UpstreamError::Http {
                url: url.to_owned(),
                status: status.as_u16(),
                message,
            };
        }

        UpstreamError::Network {
            url: url.to_owned(),
            message,
        }
    }
}

fn waypoint_param(waypoint: Waypoint<'_>) -> String {
    match waypoint {
        Waypoint::Place(reference) => format!("place_id:{}", reference.id()),
        Waypoint::Location(point) => format!("{},{}", point.lat(), point.lng()),
    }
}

/// Remove any occurrence of the API key from `text`.
fn strip_key(text: &str, key: &str) -> String {
    if key.is_empty() {
        return text.to_owned();
    }
    text.replace(key, "<redacted>")
}

#[async_trait]
impl DirectionsProvider for HttpMapsClient {
    async fn fetch_routes(&self, query: &DirectionsQuery<'_>) -> Result<Vec<Route>, UpstreamError> {
        let url = self.directions_url(query)?;
        let response: DirectionsResponse = self.get_json(&url).await?;
        response.into_routes()
    }
}

#[async_trait]
impl PlaceDetailsProvider for HttpMapsClient {
    async fn place_location(
        &self,
        reference: &PlaceReference,
    ) -> Result<Coordinate, UpstreamError> {
        let url = self.place_details_url(reference)?;
        let response: PlaceDetailsResponse = self.get_json(&url).await?;
        response.into_location()
    }
}
