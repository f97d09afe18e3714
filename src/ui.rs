// Terminal UI utilities

use colored::Colorize;

pub fn print_header(title: &str) {
    println!();
    println!(
        "{}",
        "╔════════════════════════════════════════════════════════════╗".bright_blue()
    );
    println!("{}", format!("║  {:<58}║", title).bright_blue());
    println!(
        "{}",
        "╚════════════════════════════════════════════════════════════╝".bright_blue()
    );
    println!();
}

pub fn print_success(message: &str) {
    println!("{}", format!("✅ {}", message).bright_green().bold());
}

pub fn print_error(message: &str) {
    eprintln!("{}", format!("❌ {}", message).bright_red().bold());
}

/// Usage text for the `run` command, printed whenever option resolution
/// fails.
pub fn print_usage() {
    println!(
        r#"
capstan run [options]
    Configure static peer discovery for the cluster membership layer and
    deploy an execution unit to the messaging fabric.

    Required options:
      --public_address   public address of the host running the container;
                         the address other hosts connect to
      --local_address    local address inside the container (eth0)
      --cluster_port     port for the cluster membership layer
      --event_bus_port   port for the event bus

    Optional:
      --remote_address   public address of the remote host to join
      --instances        number of instances to deploy (default 1)
      --artifact_repo    artifact repository base URL

    Deployment target (exactly one):
      --bundle           name of the bundle to download and deploy
      --unit + --classpath
                         path of a local execution unit and its classpath
                         root directory
"#
    );
}
