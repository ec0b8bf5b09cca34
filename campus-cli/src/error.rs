//! Error types emitted by the campus CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use campus_core::AggregateError;
use campus_data::ClientBuildError;
use thiserror::Error;

/// Errors emitted by the campus CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// An option was present but unusable.
    #[error("invalid {field}: {reason}")]
    InvalidArgument {
        field: &'static str,
        reason: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Reading the campus configuration file failed.
    #[error("failed to read campus configuration at {path:?}: {source}")]
    ReadCampusConfig {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Campus configuration JSON could not be decoded or validated.
    #[error("failed to parse campus configuration at {path:?}: {source}")]
    ParseCampusConfig {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Constructing the maps client failed.
    #[error("failed to build maps client for {base_url:?}: {source}")]
    BuildMapsClient {
        base_url: String,
        #[source]
        source: ClientBuildError,
    },
    /// No travel mode produced directions.
    #[error(transparent)]
    Directions(#[from] AggregateError),
    /// Serializing the route bundle failed.
    #[error("failed to serialize directions: {0}")]
    SerializeDirections(#[source] serde_json::Error),
    /// Writing the directions output failed.
    #[error("failed to write directions output: {0}")]
    WriteDirectionsOutput(#[source] std::io::Error),
}
