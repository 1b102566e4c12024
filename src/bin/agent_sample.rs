//! Agent sample: creates an agent under an existing brand, walks through the
//! common updates, lists the brand's agents and deletes the new agent unless
//! `NO-DELETE` is given.

use bizcomm::api::names;
use bizcomm::cli::{self, CommonArgs};
use bizcomm::samples::{agent, Reporter, NO_DELETE};
use clap::Parser;
use std::process::ExitCode;

/// Create, update, list and delete a Business Messages agent
#[derive(Parser, Debug)]
#[command(name = "agent_sample", version, about, long_about = None)]
struct Args {
    /// Brand that owns the agent, e.g. brands/1234
    #[arg(value_name = "BRAND_NAME", value_parser = names::parse_brand_name)]
    brand_name: String,

    /// Keep the created agent
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

    let outcome = agent::run(&session.client, &args.brand_name, &settings, &mut reporter).await?;
    tracing::info!("Agent sample finished: {:?}", outcome);

    Ok(())
}
