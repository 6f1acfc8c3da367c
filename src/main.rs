use anyhow::Result;
use clap::Parser;
use unchunk::cli::{self, Cli};

fn main() -> Result<()> {
    cli::run(Cli::parse())
}
