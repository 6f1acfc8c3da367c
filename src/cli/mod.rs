use crate::client::HttpBackend;
use crate::options::{Options, OptionsBuilder};
use crate::{constants, loader, pipeline, report};
use anyhow::Result;
use clap::{Parser, ValueHint};
use std::path::PathBuf;

mod logger;

#[derive(Parser)]
#[command(name = constants::BINARY_NAME)]
#[command(version = constants::VERSION)]
#[command(about = "Reconcile files stuck as aborted chunked uploads")]
#[command(
    long_about = "Reconcile storage records stuck as incomplete chunked uploads.

Reads a file of <unix-timestamp> <file-identifier> lines produced by the
upstream detection tool, classifies each record against the backend, and
for every record whose current size is a chunk multiple looks for the
newest complete version to roll back to.

By default only the repair plan is printed; pass --execute to perform the
rollbacks. Unrepairable records are listed for manual follow-up."
)]
pub struct Cli {
    /// Backend endpoint address
    #[arg(long, default_value = constants::DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// User role to execute against the backend
    #[arg(long, default_value = constants::DEFAULT_ROLE)]
    pub user: String,

    /// Group role to execute against the backend
    #[arg(long, default_value = constants::DEFAULT_ROLE)]
    pub group: String,

    /// Perform the rollbacks instead of only printing the plan
    #[arg(long)]
    pub execute: bool,

    /// File containing the stuck-upload records
    #[arg(long, default_value = constants::DEFAULT_INPUT, value_hint = ValueHint::FilePath)]
    pub file: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    fn into_options(self) -> Options {
        OptionsBuilder::new()
            .endpoint(self.endpoint)
            .user(self.user)
            .group(self.group)
            .execute(self.execute)
            .input(self.file)
            .build()
    }
}

pub fn run(cli: Cli) -> Result<()> {
    logger::init_logger(cli.verbose, cli.quiet);
    let quiet = cli.quiet;

    let options = cli.into_options();
    let records = loader::load_records(&options.input)?;
    let backend = HttpBackend::new(&options)?;

    let run_report = pipeline::run(&backend, &options, records, quiet)?;
    report::print_report(&run_report);

    Ok(())
}
