//! Location sample: creates a location for an existing agent, updates and
//! lists it, then deletes it unless `NO-DELETE` is given.

use bizcomm::api::names;
use bizcomm::cli::{self, CommonArgs};
use bizcomm::samples::{location, Reporter, NO_DELETE};
use clap::Parser;
use std::process::ExitCode;

/// Create, update, list and delete a Business Messages location
#[derive(Parser, Debug)]
#[command(name = "location_sample", version, about, long_about = None)]
struct Args {
    /// Agent serving the location, e.g. brands/1234/agents/5678
    #[arg(value_name = "AGENT_NAME", value_parser = names::parse_agent_name)]
    agent_name: String,

    /// Keep the created location
    #[arg(value_name = "NO-DELETE", value_parser = [NO_DELETE])]
    no_delete: Option<String>,

    #[command(flatten)]
    common: CommonArgs,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => cli::report_failure(&err),
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let session = cli::start(&args.common)?;
    let settings = session.settings(args.no_delete.is_none());
    let mut reporter = Reporter::new(std::io::stdout());

    let outcome =
        location::run(&session.client, &args.agent_name, &settings, &mut reporter).await?;
    tracing::info!("Location sample finished: {:?}", outcome);

    Ok(())
}
