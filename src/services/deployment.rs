//! Deployment coordination.
//!
//! Submits a resolved artifact to the cluster runtime and reports the
//! single-fire outcome. One request per process invocation; once submitted,
//! a deployment cannot be withdrawn and no retries are made.

use anyhow::anyhow;
use tracing::{error, info};

use crate::error::FabricError;
use crate::infrastructure::artifact::ArtifactRef;
use crate::infrastructure::fabric::{ClusterRuntime, DeploymentOutcome};

/// Submit the artifact and wait for the runtime's completion signal.
///
/// Returns the deployment identifier on success. On failure every level of
/// the cause chain is reported before the outermost failure is returned.
/// The completion signal fires exactly once: a runtime that drops its end
/// without answering is mapped to a synthesized failure.
pub async fn submit_and_report<R: ClusterRuntime>(
    runtime: &R,
    artifact: ArtifactRef,
    instance_count: u32,
) -> Result<String, FabricError> {
    info!("Submitting deployment ({} instance(s))", instance_count);

    let completion = runtime.deploy(artifact, instance_count);

    let outcome = completion.await.unwrap_or_else(|_| DeploymentOutcome::Failure {
        cause: anyhow!("Runtime dropped the completion signal without reporting an outcome"),
    });

    match outcome {
        DeploymentOutcome::Success { deployment_id } => {
            info!("Deployment ID is {}", deployment_id);
            Ok(deployment_id)
        }
        DeploymentOutcome::Failure { cause } => {
            for (depth, level) in cause.chain().enumerate() {
                error!("Deployment failure [{}]: {}", depth, level);
            }
            Err(FabricError::DeploymentFailed { cause })
        }
    }
}
