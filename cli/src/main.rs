mod cli;
mod commands;

use cli::Cli;
use commands::extract;

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level())).init();
    extract::run(&cli)
}

fn main() -> anyhow::Result<()> { run() }
