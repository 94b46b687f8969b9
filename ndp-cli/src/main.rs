//! NDP CLI - Command line tool for querying the disaster prediction service.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "ndp-cli",
    version,
    about = "U.S. natural disaster prediction toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: ndp_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    ndp_cmd::run(cli.command).await
}
