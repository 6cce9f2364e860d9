//! Yatra CLI - Command line tool for syncing the destination catalog fixture.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "yatra-cli",
    version,
    about = "Yatra destination catalog toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: yatra_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    yatra_cmd::run(cli.command).await
}
