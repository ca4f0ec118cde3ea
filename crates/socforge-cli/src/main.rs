mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "socforge",
    about = "Install a single-host SOC stack — Wazuh, Graylog, MISP, Shuffle, DFIR-IRIS",
    version,
    propagate_version = true
)]
struct Cli {
    /// Deployment root containing the install scripts and compose projects
    /// (default: auto-detect from socforge.yaml or status.json)
    #[arg(long, global = true, env = "SOCFORGE_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the deployment plan once, resuming from the status file
    Run,

    /// Show per-step deployment status
    Status,

    /// Delete the status file, forcing the next run to start from scratch
    Reset,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        None => cmd::menu::run(&root),
        Some(Commands::Run) => cmd::deploy::run(&root),
        Some(Commands::Status) => cmd::status::run(&root, cli.json),
        Some(Commands::Reset) => cmd::reset::run(&root),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
