//! Brand sample: creates "Test Brand", reads it back, renames it, lists all
//! brands and deletes it again unless `NO-DELETE` is given.

use bizcomm::cli::{self, CommonArgs};
use bizcomm::samples::{brand, Reporter, NO_DELETE};
use clap::Parser;
use std::process::ExitCode;

/// Create, update, list and delete a Business Messages brand
#[derive(Parser, Debug)]
#[command(name = "brand_sample", version, about, long_about = None)]
struct Args {
    /// Keep the created brand
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

    let outcome = brand::run(&session.client, &settings, &mut reporter).await?;
    tracing::info!("Brand sample finished: {:?}", outcome);

    Ok(())
}
