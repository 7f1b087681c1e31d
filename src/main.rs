use clap::Parser;
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

mod api_client;
mod cached_client;
mod client;
mod cmd;
mod config;
mod error;
mod fixtures;
mod i18n;
mod render;
mod store;
mod table;
#[cfg(test)]
mod testing;
mod types;
mod widget;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    cmd::Cli::parse().run().await
}
