//! Artifact location and transfer.
//!
//! Bundles are fetched from the artifact repository over HTTP; local units
//! are addressed in place with a `file://` reference and never touch the
//! network. Downloaded bundles are not integrity-checked.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::Serialize;
use tracing::info;
use url::Url;

use crate::config::{DeploymentMode, DeploymentRequest};
use crate::error::ArtifactError;

/// Connect timeout for bundle downloads.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Read timeout for bundle downloads.
const READ_TIMEOUT: Duration = Duration::from_secs(30);

/// Default artifact repository base URL.
pub const DEFAULT_ARTIFACT_REPO: &str = "https://s3-eu-west-1.amazonaws.com/deploy.capstan.dev/bundles";

/// A resolved deployable artifact.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case", tag = "kind")]
pub enum ArtifactRef {
    /// A bundle downloaded from the artifact repository.
    RemoteBundle {
        bundle: String,
        url: String,
        local_path: PathBuf,
    },
    /// A unit executed from the local filesystem.
    LocalUnit {
        unit_path: String,
        classpath_url: String,
    },
}

/// Resolves deployment requests against the artifact repository.
pub struct ArtifactStore {
    base_url: String,
    client: reqwest::Client,
}

impl ArtifactStore {
    /// Create a store against the given repository base URL.
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .read_timeout(READ_TIMEOUT)
            .build()
            .context("Failed to build the artifact transfer client")?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// URL the bundle will be fetched from: `<base>/<bundle>.zip`.
    pub fn bundle_url(&self, bundle: &str) -> Result<Url, ArtifactError> {
        let raw = format!("{}/{}.zip", self.base_url.trim_end_matches('/'), bundle);
        Url::parse(&raw).map_err(|e| ArtifactError::MalformedUrl {
            bundle: bundle.to_string(),
            message: e.to_string(),
        })
    }

    /// Resolve a request into a deployable artifact, downloading if the
    /// request names a remote bundle.
    pub async fn resolve(&self, request: &DeploymentRequest) -> Result<ArtifactRef, ArtifactError> {
        match &request.mode {
            DeploymentMode::RemoteBundle { bundle } => self.fetch_bundle(bundle).await,
            DeploymentMode::LocalUnit {
                unit_path,
                classpath_root,
            } => locate_unit(unit_path, classpath_root),
        }
    }

    async fn fetch_bundle(&self, bundle: &str) -> Result<ArtifactRef, ArtifactError> {
        let url = self.bundle_url(bundle)?;
        let local_path = PathBuf::from(format!("{bundle}.zip"));

        info!("Downloading bundle {} from {}", bundle, url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|source| ArtifactError::DownloadFailed {
                url: url.to_string(),
                source,
            })?;

        let bytes = response
            .bytes()
            .await
            .map_err(|source| ArtifactError::DownloadFailed {
                url: url.to_string(),
                source,
            })?;

        tokio::fs::write(&local_path, &bytes)
            .await
            .map_err(|source| ArtifactError::WriteFailed {
                path: local_path.display().to_string(),
                source,
            })?;

        info!("Downloaded {} bytes to {}", bytes.len(), local_path.display());

        Ok(ArtifactRef::RemoteBundle {
            bundle: bundle.to_string(),
            url: url.to_string(),
            local_path,
        })
    }
}

/// Turn a local unit path and classpath root into a resource reference.
///
/// The classpath root must be an absolute path, otherwise it cannot be
/// expressed as a `file://` URL.
fn locate_unit(unit_path: &str, classpath_root: &str) -> Result<ArtifactRef, ArtifactError> {
    let classpath_url = Url::from_file_path(Path::new(classpath_root)).map_err(|_| {
        ArtifactError::MalformedLocation {
            path: classpath_root.to_string(),
        }
    })?;

    Ok(ArtifactRef::LocalUnit {
        unit_path: unit_path.to_string(),
        classpath_url: classpath_url.to_string(),
    })
}
