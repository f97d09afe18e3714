use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod infrastructure;
mod services;
mod ui;

use cli::{Cli, Commands};
use config::RawOptions;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with LOGGING env var support
    // LOGGING=debug,info,warn,error or just LOGGING=debug
    let log_level = std::env::var("LOGGING")
        .or_else(|_| std::env::var("LOG_LEVEL"))
        .unwrap_or_else(|_| {
            if cli.verbose {
                "debug".to_string()
            } else {
                "info".to_string()
            }
        });

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(false)
        .init();

    match cli.command {
        Commands::Version => {
            println!("capstan {}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Run {
            public_address,
            local_address,
            remote_address,
            cluster_port,
            event_bus_port,
            bundle,
            unit,
            classpath,
            instances,
            artifact_repo,
        } => {
            let mut opts = RawOptions::new();
            opts.set_opt("public_address", public_address);
            opts.set_opt("local_address", local_address);
            opts.set_opt("remote_address", remote_address);
            opts.set_opt("cluster_port", cluster_port);
            opts.set_opt("event_bus_port", event_bus_port);
            opts.set_opt("bundle", bundle);
            opts.set_opt("unit", unit);
            opts.set_opt("classpath", classpath);
            opts.set_opt("instances", instances);

            commands::run::execute(opts, artifact_repo).await?;
        }
    }

    Ok(())
}
