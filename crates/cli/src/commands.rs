use crate::di::UseCases;
use crate::duration::parse_duration;
use clap::{Args, Subcommand};
use sakura_dns_application::use_cases::{RecordChange, WaitOptions};
use sakura_dns_domain::{Config, RecordType};
use serde::Serialize;
use std::io::Write;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

const DEFAULT_TTL: u32 = 300;

#[derive(Subcommand)]
pub enum Command {
    /// List every DNS zone of the account
    List,

    /// Show the zone with exactly this name
    Zone(ZoneArgs),

    /// Print the most specific zone hosting a record name
    Fzone(ZoneArgs),

    /// Add a record
    Radd(RecordArgs),

    /// Replace the records sharing a name and type
    Rset(RecordArgs),

    /// Delete a record
    Rdelete(DeleteArgs),

    /// Print the version
    Version,
}

#[derive(Args)]
pub struct ZoneArgs {
    #[arg(long = "name", value_name = "NAME", conflicts_with = "positional")]
    name: Option<String>,

    #[arg(value_name = "NAME")]
    positional: Option<String>,
}

impl ZoneArgs {
    fn name(&self) -> anyhow::Result<&str> {
        self.name
            .as_deref()
            .or(self.positional.as_deref())
            .ok_or_else(|| anyhow::anyhow!("a name is required"))
    }
}

#[derive(Args)]
pub struct RecordArgs {
    /// Zone name, e.g. example.com
    #[arg(long)]
    zone: String,

    #[arg(long, default_value_t = DEFAULT_TTL)]
    ttl: u32,

    /// Relative name, @ for the apex, or a fully-qualified name ending in a dot
    #[arg(long)]
    name: String,

    #[arg(long = "type", value_name = "TYPE")]
    record_type: RecordType,

    #[arg(long)]
    data: String,

    /// Wait until the authoritative nameservers serve the record (TXT and CNAME only)
    #[arg(long)]
    wait: bool,

    /// Give up waiting after this long, e.g. 60s, 2m, 500ms
    #[arg(long, value_name = "DURATION", value_parser = parse_duration)]
    wait_timeout: Option<Duration>,
}

impl RecordArgs {
    fn change(&self) -> RecordChange {
        RecordChange {
            zone: self.zone.clone(),
            name: self.name.clone(),
            record_type: self.record_type,
            data: self.data.clone(),
            ttl: self.ttl,
        }
    }

    fn wait_options(&self, config: &Config) -> Option<WaitOptions> {
        self.wait.then(|| WaitOptions {
            timeout: self
                .wait_timeout
                .unwrap_or_else(|| config.propagation.default_timeout()),
        })
    }
}

#[derive(Args)]
pub struct DeleteArgs {
    #[arg(long)]
    zone: String,

    #[arg(long)]
    name: String,

    #[arg(long = "type", value_name = "TYPE")]
    record_type: RecordType,

    #[arg(long)]
    data: String,
}

impl DeleteArgs {
    fn change(&self) -> RecordChange {
        RecordChange {
            zone: self.zone.clone(),
            name: self.name.clone(),
            record_type: self.record_type,
            data: self.data.clone(),
            ttl: DEFAULT_TTL,
        }
    }
}

pub async fn run(
    command: Command,
    config: &Config,
    cancel: &CancellationToken,
) -> anyhow::Result<()> {
    let use_cases = UseCases::new(config)?;

    match command {
        Command::List => print_json(&use_cases.list_zones.execute().await?),
        Command::Zone(args) => print_json(&use_cases.describe_zone.execute(args.name()?).await?),
        Command::Fzone(args) => {
            let zone = use_cases.find_zone.execute(args.name()?).await?;
            print_line(&zone.fqdn)
        }
        Command::Radd(args) => {
            let zone = use_cases
                .add_record
                .execute(&args.change(), args.wait_options(config), cancel)
                .await?;
            print_json(&zone)
        }
        Command::Rset(args) => {
            let zone = use_cases
                .set_record
                .execute(&args.change(), args.wait_options(config), cancel)
                .await?;
            print_json(&zone)
        }
        Command::Rdelete(args) => print_json(&use_cases.delete_record.execute(&args.change()).await?),
        Command::Version => print_line(&version()),
    }
}

pub fn version() -> String {
    format!("sakura-dns {}", env!("CARGO_PKG_VERSION"))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

fn print_line(line: &str) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", line)?;
    Ok(())
}
