mod cli;
mod config;
mod generate;
mod marvel;
mod render;
mod select;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("comicpage=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    let config = config::ResolvedConfig::resolve()?;
    let client = marvel::Client::new(&config.gateway, config.credentials);

    generate::generate(&client, cli.lookup(), &cli.out).await
}
