use clap::Parser;
use gridsketch::cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    run(Cli::parse())
}
