//! Centralized error types for capstan
//!
//! Uses thiserror for typed errors that can be matched on,
//! while still being compatible with anyhow for propagation.

use thiserror::Error;

/// Top-level error type for bootstrap operations
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("Option error: {0}")]
    Option(#[from] OptionError),

    #[error("Artifact error: {0}")]
    Artifact(#[from] ArtifactError),

    #[error("Fabric error: {0}")]
    Fabric(#[from] FabricError),
}

/// Option resolution errors
///
/// Any of these is terminal for the invocation: usage text is printed and
/// no discovery configuration or deployment is attempted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    #[error("Required option missing: {name}")]
    Missing { name: &'static str },

    #[error("Invalid numeric value for {name}: {value}")]
    InvalidNumeric { name: &'static str, value: String },

    #[error("Both a bundle name and a local unit were supplied; pick one deployment mode")]
    AmbiguousDeploymentMode,

    #[error("No deployment target supplied; provide a bundle name, or a unit path with a classpath root")]
    MissingDeploymentTarget,
}

/// Artifact location and transfer errors
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Malformed artifact URL for bundle {bundle}: {message}")]
    MalformedUrl { bundle: String, message: String },

    #[error("Cannot build a resource reference from path: {path}")]
    MalformedLocation { path: String },

    #[error("Download failed for {url}")]
    DownloadFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to write bundle to {path}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Messaging fabric errors
#[derive(Error, Debug)]
pub enum FabricError {
    /// The runtime reported a failed deployment. The cause may wrap further
    /// causes from the underlying runtime; the coordinator reports every
    /// level before surfacing this.
    #[error("Deployment failed: {cause}")]
    DeploymentFailed { cause: anyhow::Error },
}
