//! Messaging fabric runtime handle.
//!
//! The fabric daemon owns gossip, heartbeats and event-bus routing; this
//! module only hands it a fully-formed configuration and submits deployment
//! requests over its control API. The public host/port advertisement
//! travels inside the submission payload rather than through process-wide
//! properties.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;
use tracing::debug;

use crate::config::{NodeIdentity, PeerDiscoveryConfig};
use crate::infrastructure::artifact::ArtifactRef;

/// Configuration handed to the fabric runtime in one piece.
#[derive(Debug, Clone, Serialize)]
pub struct FabricConfig {
    /// Host peers use to reach this node's event bus.
    pub public_host: String,
    /// Host the fabric binds inside the container.
    pub bind_host: String,
    /// Cluster membership port.
    pub cluster_port: u16,
    /// Event bus port, advertised to peers and serving the control API.
    pub event_bus_port: u16,
    /// Static-list membership configuration.
    pub discovery: PeerDiscoveryConfig,
}

impl FabricConfig {
    /// Assemble the fabric hand-off from the resolved identity and the
    /// derived discovery configuration.
    pub fn assemble(identity: &NodeIdentity, discovery: PeerDiscoveryConfig) -> Self {
        Self {
            public_host: identity.public_address.clone(),
            bind_host: identity.local_address.clone(),
            cluster_port: identity.cluster_port,
            event_bus_port: identity.event_bus_port,
            discovery,
        }
    }
}

/// Result of a submitted deployment, delivered exactly once.
#[derive(Debug)]
pub enum DeploymentOutcome {
    Success { deployment_id: String },
    Failure { cause: anyhow::Error },
}

/// A cluster-aware runtime that accepts deployment submissions.
///
/// Implementations must resolve the returned channel exactly once per call.
pub trait ClusterRuntime {
    /// Submit an artifact for deployment. Returns immediately; the outcome
    /// arrives later on the single-fire channel.
    fn deploy(
        &self,
        artifact: ArtifactRef,
        instance_count: u32,
    ) -> oneshot::Receiver<DeploymentOutcome>;
}

/// Production handle talking to the local fabric daemon over HTTP.
pub struct FabricRuntime {
    endpoint: String,
    config: FabricConfig,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct Submission<'a> {
    artifact: &'a ArtifactRef,
    instance_count: u32,
    fabric: &'a FabricConfig,
}

#[derive(Deserialize)]
struct SubmissionReply {
    deployment_id: String,
}

impl FabricRuntime {
    /// Construct a handle from the explicit fabric configuration.
    pub fn new(config: FabricConfig) -> Self {
        let endpoint = format!(
            "http://{}:{}/deployments",
            config.bind_host, config.event_bus_port
        );
        Self {
            endpoint,
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Control API endpoint deployments are submitted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn submit(
        client: &reqwest::Client,
        endpoint: &str,
        config: &FabricConfig,
        artifact: &ArtifactRef,
        instance_count: u32,
    ) -> anyhow::Result<String> {
        debug!("Submitting deployment to {}", endpoint);

        let reply: SubmissionReply = client
            .post(endpoint)
            .json(&Submission {
                artifact,
                instance_count,
                fabric: config,
            })
            .send()
            .await
            .context("Fabric daemon unreachable")?
            .error_for_status()
            .context("Fabric daemon rejected the submission")?
            .json()
            .await
            .context("Malformed submission reply")?;

        Ok(reply.deployment_id)
    }
}

impl ClusterRuntime for FabricRuntime {
    fn deploy(
        &self,
        artifact: ArtifactRef,
        instance_count: u32,
    ) -> oneshot::Receiver<DeploymentOutcome> {
        let (tx, rx) = oneshot::channel();
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        let config = self.config.clone();

        tokio::spawn(async move {
            let outcome =
                match Self::submit(&client, &endpoint, &config, &artifact, instance_count).await {
                    Ok(deployment_id) => DeploymentOutcome::Success { deployment_id },
                    Err(cause) => DeploymentOutcome::Failure { cause },
                };
            // A dropped receiver means nobody is waiting; nothing to do.
            let _ = tx.send(outcome);
        });

        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NodeIdentity;

    fn identity() -> NodeIdentity {
        NodeIdentity {
            public_address: "1.2.3.4".to_string(),
            local_address: "10.0.0.2".to_string(),
            remote_address: Some("1.2.3.5".to_string()),
            cluster_port: 5701,
            event_bus_port: 5702,
        }
    }

    #[test]
    fn test_assemble_maps_identity_fields() {
        let id = identity();
        let discovery = PeerDiscoveryConfig::derive(&id);
        let config = FabricConfig::assemble(&id, discovery);
        assert_eq!(config.public_host, "1.2.3.4");
        assert_eq!(config.bind_host, "10.0.0.2");
        assert_eq!(config.cluster_port, 5701);
        assert_eq!(config.event_bus_port, 5702);
        assert!(config.discovery.seed_members.contains("1.2.3.5"));
    }

    #[test]
    fn test_endpoint_uses_bind_host_and_event_bus_port() {
        let id = identity();
        let discovery = PeerDiscoveryConfig::derive(&id);
        let runtime = FabricRuntime::new(FabricConfig::assemble(&id, discovery));
        assert_eq!(runtime.endpoint(), "http://10.0.0.2:5702/deployments");
    }

    #[test]
    fn test_submission_payload_shape() {
        let id = identity();
        let discovery = PeerDiscoveryConfig::derive(&id);
        let config = FabricConfig::assemble(&id, discovery);
        let artifact = ArtifactRef::LocalUnit {
            unit_path: "/app/main.unit".to_string(),
            classpath_url: "file:///app/lib".to_string(),
        };
        let payload = serde_json::to_value(Submission {
            artifact: &artifact,
            instance_count: 2,
            fabric: &config,
        })
        .unwrap();
        assert_eq!(payload["instance_count"], 2);
        assert_eq!(payload["fabric"]["public_host"], "1.2.3.4");
        assert_eq!(payload["fabric"]["discovery"]["mode"], "static-list");
        assert_eq!(payload["artifact"]["kind"], "local-unit");
    }
}
