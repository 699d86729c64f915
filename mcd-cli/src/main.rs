//! MCD CLI - render the music catalog dashboard and its charts to static files.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "mcd-cli",
    version,
    about = "Music catalog dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: mcd_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let result = mcd_cmd::run(cli.command);
    if let Err(e) = &result {
        log::error!("mcd-cli: {:#}", e);
    }
    result
}
