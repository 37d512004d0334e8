use clap::Parser;
use sakura_dns_domain::CliOverrides;
use std::path::Path;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

mod bootstrap;
mod commands;
mod di;
mod duration;

use commands::Command;

#[derive(Parser)]
#[command(name = "sakura-dns")]
#[command(version)]
#[command(about = "Manage Sakura Cloud DNS records and wait for them to propagate")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Port used to reach nameservers that do not name one
    #[arg(long, global = true)]
    dns_port: Option<u16>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::Version = cli.command {
        println!("{}", commands::version());
        return Ok(());
    }

    let env_file = Path::new(bootstrap::ENV_FILE);
    let env_loaded = bootstrap::load_env_file(env_file)?;

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        dns_port: cli.dns_port,
    };
    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    if env_loaded {
        info!(path = %env_file.display(), "Loaded environment file");
    }

    if let Some(path) = cli.config.as_deref().or_else(|| sakura_dns_domain::Config::get_config_path()) {
        info!(path, "Loaded configuration");
    }

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                warn!("Interrupted, stopping");
                on_interrupt.cancel();
            }
            Err(e) => warn!(error = %e, "Failed to listen for Ctrl-C"),
        }
    });

    commands::run(cli.command, &config, &cancel).await
}
