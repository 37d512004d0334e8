use sakura_dns_domain::config::LogFormat;
use sakura_dns_domain::{CliOverrides, Config, LoggingConfig};
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub const ENV_FILE: &str = ".env";

/// Noisy HTTP internals stay at warn unless `RUST_LOG` says otherwise.
const QUIET_DEPENDENCIES: &str = "hyper=warn,hyper_util=warn,reqwest=warn,rustls=warn,h2=warn";

/// Exports the variables of a dotenv file without replacing ones already set.
///
/// Returns `false` when the file does not exist.
pub fn load_env_file(path: &Path) -> anyhow::Result<bool> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(anyhow::anyhow!("failed to load {}: {}", path.display(), e)),
    }
}

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}

/// Logs go to stderr so that stdout carries only command output.
pub fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},{}", logging.level, QUIET_DEPENDENCIES)));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    match logging.format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Text => subscriber.init(),
    }
}
