//! Command-line plumbing shared by the sample binaries

use crate::api::{BizCommClient, Credentials};
use crate::config::Config;
use crate::logging::{self, LogLevel};
use crate::samples::SampleSettings;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_appender::non_blocking::WorkerGuard;

/// Flags every sample accepts
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Service account key file
    /// [default: resources/bc-agent-service-account-credentials.json]
    #[arg(long, env = "BC_CREDENTIALS_FILE", value_name = "PATH")]
    pub credentials: Option<PathBuf>,

    /// Bearer token to use instead of a key file
    #[arg(long, env = "BC_ACCESS_TOKEN", hide_env_values = true, value_name = "TOKEN")]
    pub access_token: Option<String>,

    /// API base URL
    #[arg(long, env = "BC_ENDPOINT", value_name = "URL")]
    pub endpoint: Option<String>,

    /// Seconds to wait between steps [default: 3]
    #[arg(long, env = "BC_PAUSE_SECS", value_name = "SECS")]
    pub pause_secs: Option<u64>,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off")]
    pub log_level: LogLevel,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// A configured client plus the settings resolved for this run
pub struct Session {
    pub client: BizCommClient,
    pub pause: Duration,
    _log_guard: Option<WorkerGuard>,
}

impl Session {
    pub fn settings(&self, delete: bool) -> SampleSettings {
        SampleSettings {
            pause: self.pause,
            delete,
        }
    }
}

/// Set up logging, resolve configuration (flag/env > config file > default)
/// and load credentials
pub fn start(args: &CommonArgs) -> Result<Session> {
    let log_guard = logging::setup_logging(args.log_level, args.log_file.as_deref())?;

    let config = Config::load();

    let endpoint = args
        .endpoint
        .clone()
        .unwrap_or_else(|| config.effective_endpoint());
    let pause = args
        .pause_secs
        .map(Duration::from_secs)
        .unwrap_or_else(|| config.effective_pause());

    let credentials = match &args.access_token {
        Some(token) => {
            tracing::info!("Using supplied access token");
            Credentials::from_access_token(token.clone())
        }
        None => {
            let path = args
                .credentials
                .clone()
                .unwrap_or_else(|| config.effective_credentials_file());
            tracing::info!("Using service account key {}", path.display());
            Credentials::from_service_account_file(&path)?
        }
    };

    let client = BizCommClient::new(credentials, &endpoint).context("Failed to create API client")?;
    tracing::info!("Using endpoint {}", client.endpoint());

    Ok(Session {
        client,
        pause,
        _log_guard: log_guard,
    })
}

/// Print the full error chain and pick the exit code
pub fn report_failure(err: &anyhow::Error) -> ExitCode {
    tracing::error!("{:#}", err);
    eprintln!("Error: {:#}", err);
    ExitCode::FAILURE
}
