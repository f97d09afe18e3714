//! Peer discovery configuration.
//!
//! Container networks have no broadcast domain, so multicast discovery can
//! never work there; membership is formed from a static seed list instead.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::config::NodeIdentity;

/// Seconds a seed connection attempt may take before it is abandoned.
pub const CONNECTION_TIMEOUT_SECS: u64 = 15;

/// Peer discovery mechanism handed to the membership layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiscoveryMode {
    /// Dial a fixed list of seed members.
    StaticList,
}

/// Static-list membership configuration derived from a [`NodeIdentity`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeerDiscoveryConfig {
    pub mode: DiscoveryMode,
    /// Addresses proactively dialed during cluster formation. Always
    /// contains `self_address`, so a node with no remote peer still forms a
    /// single-member cluster.
    pub seed_members: BTreeSet<String>,
    pub self_address: String,
    pub multicast_enabled: bool,
    /// Peers must reach this node at exactly the configured port; the
    /// membership layer is never allowed to shift to an adjacent one.
    pub port_auto_increment: bool,
    pub connection_timeout_secs: u64,
}

impl PeerDiscoveryConfig {
    /// Derive the discovery configuration for this node.
    ///
    /// Produces a configuration value only; no network I/O happens here.
    pub fn derive(identity: &NodeIdentity) -> Self {
        let self_address = identity.public_address.clone();

        let mut seed_members = BTreeSet::new();
        seed_members.insert(self_address.clone());
        if let Some(remote) = identity.remote_address.as_deref() {
            if !remote.is_empty() {
                seed_members.insert(remote.to_string());
            }
        }

        Self {
            mode: DiscoveryMode::StaticList,
            seed_members,
            self_address,
            multicast_enabled: false,
            port_auto_increment: false,
            connection_timeout_secs: CONNECTION_TIMEOUT_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(remote: Option<&str>) -> NodeIdentity {
        NodeIdentity {
            public_address: "1.2.3.4".to_string(),
            local_address: "10.0.0.2".to_string(),
            remote_address: remote.map(str::to_string),
            cluster_port: 5701,
            event_bus_port: 5702,
        }
    }

    #[test]
    fn test_mode_is_always_static_list() {
        let config = PeerDiscoveryConfig::derive(&identity(None));
        assert_eq!(config.mode, DiscoveryMode::StaticList);
        assert!(!config.multicast_enabled);
    }

    #[test]
    fn test_mode_serializes_as_static_list() {
        let config = PeerDiscoveryConfig::derive(&identity(None));
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["mode"], "static-list");
    }

    #[test]
    fn test_lone_node_seeds_itself() {
        let config = PeerDiscoveryConfig::derive(&identity(None));
        assert_eq!(config.self_address, "1.2.3.4");
        assert_eq!(config.seed_members.len(), 1);
        assert!(config.seed_members.contains("1.2.3.4"));
    }

    #[test]
    fn test_empty_remote_address_seeds_self_only() {
        let config = PeerDiscoveryConfig::derive(&identity(Some("")));
        assert_eq!(config.seed_members.len(), 1);
        assert!(config.seed_members.contains("1.2.3.4"));
    }

    #[test]
    fn test_remote_address_joins_the_seed_set() {
        let config = PeerDiscoveryConfig::derive(&identity(Some("1.2.3.5")));
        assert_eq!(config.seed_members.len(), 2);
        assert!(config.seed_members.contains("1.2.3.4"));
        assert!(config.seed_members.contains("1.2.3.5"));
    }

    #[test]
    fn test_fixed_policies() {
        let config = PeerDiscoveryConfig::derive(&identity(Some("1.2.3.5")));
        assert!(!config.port_auto_increment);
        assert_eq!(config.connection_timeout_secs, 15);
    }
}
