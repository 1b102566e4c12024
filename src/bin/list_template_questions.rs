//! Lists the template CSAT survey questions available to agents.

use bizcomm::cli::{self, CommonArgs};
use bizcomm::samples::{survey_questions, Reporter};
use clap::Parser;
use std::process::ExitCode;

/// List Business Messages template survey questions
#[derive(Parser, Debug)]
#[command(name = "list_template_questions", version, about, long_about = None)]
struct Args {
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
    let mut reporter = Reporter::new(std::io::stdout());

    let questions = survey_questions::run(&session.client, &mut reporter).await?;
    tracing::info!("Listed {} template questions", questions.len());

    Ok(())
}
