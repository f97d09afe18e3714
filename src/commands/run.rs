//! The `run` command: resolve options, derive peer discovery, locate the
//! artifact, submit the deployment and report its outcome.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info};

use crate::config::{self, PeerDiscoveryConfig, RawOptions};
use crate::error::BootstrapError;
use crate::infrastructure::artifact::ArtifactStore;
use crate::infrastructure::fabric::{FabricConfig, FabricRuntime};
use crate::services::deployment;
use crate::ui;

pub async fn execute(opts: RawOptions, artifact_repo: String) -> Result<()> {
    ui::print_header("Capstan - Cluster Bootstrap");

    // Resolve and validate everything before any network configuration is
    // built. A bad option set never produces a partial configuration.
    let (identity, request) = match config::resolve(&opts) {
        Ok(resolved) => resolved,
        Err(err) => {
            ui::print_error(&err.to_string());
            ui::print_usage();
            return Err(BootstrapError::from(err).into());
        }
    };

    info!(
        "Node identity: public={} local={} cluster_port={} event_bus_port={}",
        identity.public_address,
        identity.local_address,
        identity.cluster_port,
        identity.event_bus_port
    );

    let discovery = PeerDiscoveryConfig::derive(&identity);
    info!(
        "Peer discovery: static list, seeds {:?}, multicast disabled",
        discovery.seed_members
    );

    let store = ArtifactStore::new(artifact_repo)?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message("Resolving artifact...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let artifact = match store.resolve(&request).await {
        Ok(artifact) => {
            pb.finish_with_message("Artifact resolved");
            artifact
        }
        Err(err) => {
            pb.finish_and_clear();
            ui::print_error(&err.to_string());
            let err = anyhow::Error::new(BootstrapError::from(err));
            for (depth, level) in err.chain().enumerate() {
                error!("Artifact failure [{}]: {}", depth, level);
            }
            return Err(err);
        }
    };

    let runtime = FabricRuntime::new(FabricConfig::assemble(&identity, discovery));
    info!("Fabric control endpoint: {}", runtime.endpoint());

    let deployment_id =
        deployment::submit_and_report(&runtime, artifact, request.instance_count)
            .await
            .map_err(BootstrapError::from)?;

    ui::print_success(&format!("Deployment ID is {}", deployment_id));
    Ok(())
}
