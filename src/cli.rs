//! CLI definitions for capstan
//!
//! This module contains all CLI argument parsing structures using clap.
//! clap only tokenizes; option presence and numeric validation live in
//! `config`, so the resolver can name the exact option that failed.

use clap::{Parser, Subcommand};

use crate::infrastructure::artifact::DEFAULT_ARTIFACT_REPO;

#[derive(Parser)]
#[command(
    name = "capstan",
    version,
    about = "Cluster bootstrap orchestrator for containerized nodes",
    long_about = "Configures static peer discovery for container networks where\nbroadcast and multicast are unavailable, then deploys an execution\nunit to the messaging fabric."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the identifying version string
    Version,

    /// Configure peer discovery and deploy an execution unit
    Run {
        /// Public address of the host; the address other hosts connect to
        #[arg(long = "public_address", value_name = "ADDRESS")]
        public_address: Option<String>,

        /// Local address inside the container (eth0)
        #[arg(long = "local_address", value_name = "ADDRESS")]
        local_address: Option<String>,

        /// Public address of the remote host to join
        #[arg(long = "remote_address", value_name = "ADDRESS")]
        remote_address: Option<String>,

        /// Port for the cluster membership layer
        #[arg(long = "cluster_port", value_name = "PORT")]
        cluster_port: Option<String>,

        /// Port for the event bus
        #[arg(long = "event_bus_port", value_name = "PORT")]
        event_bus_port: Option<String>,

        /// Name of the bundle to download and deploy (remote-bundle mode)
        #[arg(long = "bundle", value_name = "NAME")]
        bundle: Option<String>,

        /// Path of the execution unit to deploy (local-unit mode)
        #[arg(long = "unit", value_name = "PATH")]
        unit: Option<String>,

        /// Classpath root directory for local-unit mode
        #[arg(long = "classpath", value_name = "DIR")]
        classpath: Option<String>,

        /// Number of instances to deploy
        #[arg(long = "instances", value_name = "COUNT")]
        instances: Option<String>,

        /// Artifact repository base URL
        #[arg(
            long = "artifact_repo",
            env = "CAPSTAN_ARTIFACT_REPO",
            default_value = DEFAULT_ARTIFACT_REPO,
            value_name = "URL"
        )]
        artifact_repo: String,
    },
}
