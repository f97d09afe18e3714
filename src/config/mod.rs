//! # Bootstrap Configuration
//!
//! Everything the orchestrator needs is resolved once, up front, from the
//! raw option set: the node's network identity, the peer discovery
//! configuration derived from it, and the deployment request. All of it is
//! immutable after resolution.

mod deployment;
mod discovery;
mod identity;
mod options;

pub use deployment::{DeploymentMode, DeploymentRequest};
pub use discovery::{DiscoveryMode, PeerDiscoveryConfig, CONNECTION_TIMEOUT_SECS};
pub use identity::NodeIdentity;
pub use options::RawOptions;

use crate::error::OptionError;

/// Resolve the full configuration for one invocation.
///
/// Fails before any network configuration is built: a missing or malformed
/// option never produces a partial result.
pub fn resolve(opts: &RawOptions) -> Result<(NodeIdentity, DeploymentRequest), OptionError> {
    let identity = NodeIdentity::resolve(opts)?;
    let request = DeploymentRequest::resolve(opts)?;
    Ok((identity, request))
}
