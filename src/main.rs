//! CLI entry point for writing identicon PNG files

use clap::Parser;
use identicon::io::cli::{BatchRunner, Cli};

fn main() -> identicon::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut runner = BatchRunner::new(cli);
    runner.run().map(drop)
}
