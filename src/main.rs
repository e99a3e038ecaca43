use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::warn;

use server_versions::auth::{CredentialStore, EnvCredentialStore};
use server_versions::config::Config;
use server_versions::fetch::{FetchClient, FetchError};
use server_versions::poller::{EventSink, Poller};
use server_versions::version::snapshot::Snapshot;
use server_versions::version::trackers::JiraReleases;
use server_versions::{config, logging};

#[derive(Parser)]
#[command(name = "server-versions")]
#[command(version, about = "Polls release metadata and live server versions, reporting drift")]
struct Cli {
    /// Path to the JSON configuration file
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    /// Log to a daily-rolling file in the default data directory
    /// instead of stderr
    #[arg(long)]
    log_to_file: bool,

    /// Directory for log files (implies --log-to-file)
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

/// Prints each cycle outcome as a JSON line on stdout
struct StdoutSink;

impl EventSink for StdoutSink {
    fn data(&self, snapshot: Snapshot) {
        match serde_json::to_string(&snapshot) {
            Ok(line) => println!("{}", line),
            Err(e) => tracing::error!("Failed to serialize snapshot: {}", e),
        }
    }

    fn error(&self, error: FetchError) {
        println!("{}", serde_json::json!({ "error": error.to_string() }));
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_dir = cli
        .log_dir
        .or_else(|| cli.log_to_file.then(config::log_dir));
    let _guard = logging::init(log_dir.as_deref()).context("initializing logging")?;

    let config = Config::from_file(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    let credential = config
        .auth
        .as_deref()
        .and_then(|key| EnvCredentialStore.get(key));
    if config.auth.is_some() && credential.is_none() {
        warn!("No credential found for configured auth key; tracker requests go out unauthenticated");
    }

    let client = FetchClient::new(
        &format!("{}/rest/api/2", config.host.trim_end_matches('/')),
        credential,
        config.timeout,
    );
    let poller = Poller::new(JiraReleases::new(client.clone()), client, &config);

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(poller.run(StdoutSink));

    Ok(())
}
