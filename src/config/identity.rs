//! Node identity resolution.

use serde::Serialize;

use crate::config::options::RawOptions;
use crate::error::OptionError;

/// Network identity of this container instance.
///
/// Immutable once resolved; every downstream configuration value is derived
/// from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeIdentity {
    /// Address other hosts use to reach this node.
    pub public_address: String,
    /// Address bound inside the container (eth0).
    pub local_address: String,
    /// Remote peer to join, if any.
    pub remote_address: Option<String>,
    /// Cluster membership port.
    pub cluster_port: u16,
    /// Event bus port.
    pub event_bus_port: u16,
}

impl NodeIdentity {
    /// Resolve and validate the identity from raw options.
    ///
    /// Pure validation: no side effects, no network I/O.
    pub fn resolve(opts: &RawOptions) -> Result<Self, OptionError> {
        Ok(Self {
            public_address: opts.require("public_address")?.to_string(),
            local_address: opts.require("local_address")?.to_string(),
            remote_address: opts.get("remote_address").map(str::to_string),
            cluster_port: opts.require_port("cluster_port")?,
            event_bus_port: opts.require_port("event_bus_port")?,
        })
    }
}
