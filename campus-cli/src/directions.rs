//! Directions command implementation for the campus CLI.

use std::io::Write;
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use campus_core::{
    AggregatorOptions, CampusConfig, DEFAULT_TRANSIT_LIMIT, DirectionsAggregator,
    DirectionsProvider, PlaceDetailsProvider, PlaceReference, RouteBundle,
};
use campus_data::{DEFAULT_BASE_URL, HttpMapsClient, MapsClientConfig};
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_API_KEY, ARG_CAMPUS_CONFIG, ARG_DESTINATION, ARG_MAPS_BASE_URL, ARG_SOURCE,
    ARG_TIMEOUT_SECS, ARG_TRANSIT_LIMIT, CliError, ENV_API_KEY, ENV_DESTINATION, ENV_SOURCE,
};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// CLI arguments for the `directions` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "directions",
    long_about = "Fetch driving, walking, cycling and transit directions \
                 between two place references and suggest the free \
                 inter-campus shuttle when the trip links the two campuses. \
                 The result is printed as a JSON route bundle.",
    about = "Fetch directions for every travel mode"
)]
#[ortho_config(prefix = "CAMPUS")]
pub(crate) struct DirectionsArgs {
    /// Place reference for the start of the trip.
    #[arg(value_name = "place")]
    #[serde(default)]
    pub(crate) source: Option<String>,
    /// Place reference for the end of the trip.
    #[arg(value_name = "place")]
    #[serde(default)]
    pub(crate) destination: Option<String>,
    /// API key for the maps service.
    #[arg(long = ARG_API_KEY, value_name = "key")]
    #[serde(default)]
    pub(crate) api_key: Option<String>,
    /// Root URL of the maps web service.
    #[arg(long = ARG_MAPS_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) maps_base_url: Option<String>,
    /// Per-request timeout in seconds.
    #[arg(long = ARG_TIMEOUT_SECS, value_name = "secs")]
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    /// JSON file describing the two campus anchors.
    #[arg(long = ARG_CAMPUS_CONFIG, value_name = "path")]
    #[serde(default)]
    pub(crate) campus_config: Option<Utf8PathBuf>,
    /// Maximum number of transit alternatives to print.
    #[arg(long = ARG_TRANSIT_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) transit_limit: Option<usize>,
}

impl DirectionsArgs {
    pub(crate) fn into_config(self) -> Result<DirectionsConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        DirectionsConfig::try_from(merged)
    }
}

/// Resolved `directions` command configuration.
#[derive(Debug, Clone)]
pub(crate) struct DirectionsConfig {
    pub(crate) source: PlaceReference,
    pub(crate) destination: PlaceReference,
    /// Maps client settings, including the API key.
    pub(crate) maps: MapsClientConfig,
    /// Optional campus anchor file; the built-in anchors are used otherwise.
    pub(crate) campus_config: Option<Utf8PathBuf>,
    pub(crate) options: AggregatorOptions,
}

impl TryFrom<DirectionsArgs> for DirectionsConfig {
    type Error = CliError;

    fn try_from(args: DirectionsArgs) -> Result<Self, Self::Error> {
        let source = required(args.source, ARG_SOURCE, ENV_SOURCE)?;
        let destination = required(args.destination, ARG_DESTINATION, ENV_DESTINATION)?;
        let api_key = required(args.api_key, ARG_API_KEY, ENV_API_KEY)?;

        let timeout_secs = args.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(CliError::InvalidArgument {
                field: ARG_TIMEOUT_SECS,
                reason: "must be at least one second",
            });
        }
        let transit_limit = args.transit_limit.unwrap_or(DEFAULT_TRANSIT_LIMIT);
        if transit_limit == 0 {
            return Err(CliError::InvalidArgument {
                field: ARG_TRANSIT_LIMIT,
                reason: "must be at least one",
            });
        }

        let maps = MapsClientConfig::new(api_key)
            .with_base_url(
                args.maps_base_url
                    .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            )
            .with_timeout(Duration::from_secs(timeout_secs));

        Ok(Self {
            source: PlaceReference::new(source),
            destination: PlaceReference::new(destination),
            maps,
            campus_config: args.campus_config,
            options: AggregatorOptions { transit_limit },
        })
    }
}

fn required(
    value: Option<String>,
    field: &'static str,
    env: &'static str,
) -> Result<String, CliError> {
    value
        .filter(|text| !text.trim().is_empty())
        .ok_or(CliError::MissingArgument { field, env })
}

/// Both upstream collaborators behind one object.
pub(crate) trait MapsBackend: DirectionsProvider + PlaceDetailsProvider {}

impl<T: DirectionsProvider + PlaceDetailsProvider> MapsBackend for T {}

/// Builds the maps backend for the current directions invocation.
pub(super) trait MapsBackendBuilder {
    fn build(&self, config: &MapsClientConfig) -> Result<Box<dyn MapsBackend>, CliError>;
}

pub(super) struct HttpMapsBackendBuilder;

impl MapsBackendBuilder for HttpMapsBackendBuilder {
    fn build(&self, config: &MapsClientConfig) -> Result<Box<dyn MapsBackend>, CliError> {
        let client = HttpMapsClient::with_config(config.clone()).map_err(|source| {
            CliError::BuildMapsClient {
                base_url: config.base_url.clone(),
                source,
            }
        })?;
        Ok(Box::new(client))
    }
}

pub(super) async fn run_directions(args: DirectionsArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let mut stdout = std::io::stdout().lock();
    run_directions_with(&config, &HttpMapsBackendBuilder, &mut stdout).await
}

pub(super) async fn run_directions_with(
    config: &DirectionsConfig,
    builder: &dyn MapsBackendBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let bundle = execute_directions(config, builder).await?;
    write_bundle(writer, &bundle)
}

async fn execute_directions(
    config: &DirectionsConfig,
    builder: &dyn MapsBackendBuilder,
) -> Result<RouteBundle, CliError> {
    let campuses = match &config.campus_config {
        Some(path) => load_campus_config(path)?,
        None => CampusConfig::default(),
    };
    let backend = builder.build(&config.maps)?;
    let aggregator =
        DirectionsAggregator::new(&*backend, &*backend, campuses).with_options(config.options);
    debug!(
        "requesting directions from {} to {}",
        config.source, config.destination
    );
    let bundle = aggregator
        .aggregate(&config.source, &config.destination)
        .await?;
    Ok(bundle)
}

/// Loads and validates a JSON campus configuration file.
pub(super) fn load_campus_config(path: &Utf8Path) -> Result<CampusConfig, CliError> {
    require_file(path, ARG_CAMPUS_CONFIG)?;
    let contents =
        campus_fs::read_to_string(path).map_err(|source| CliError::ReadCampusConfig {
            path: path.to_path_buf(),
            source,
        })?;
    serde_json::from_str(&contents).map_err(|source| CliError::ParseCampusConfig {
        path: path.to_path_buf(),
        source,
    })
}

fn require_file(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match campus_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn write_bundle(writer: &mut dyn Write, bundle: &RouteBundle) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(bundle).map_err(CliError::SerializeDirections)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteDirectionsOutput)?;
    writer
        .write_all(b"\n")
        .map_err(CliError::WriteDirectionsOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<DirectionsConfig, CliError> {
    let merged = DirectionsArgs::merge_from_layers(layers).map_err(CliError::from)?;
    DirectionsConfig::try_from(merged)
}
