use anyhow::{Context, Result};
use clap::Parser;

use covbadge::cli::Cli;
use covbadge::github;
use covbadge::run::{run, Outcome};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.into_config().context("Invalid configuration")?;

    match run(&config)? {
        Outcome::Computed { coverage, .. } => {
            github::set_outputs(&coverage).context("Failed to set workflow outputs")?;
        }
        Outcome::Skipped => {}
    }
    Ok(())
}
