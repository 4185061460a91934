use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use catalog::Catalog;
use config::Config;
use server::{GRAPHQL_PATH, make_app};

mod catalog;
mod config;
mod datamodel;
mod error;
mod server;

#[cfg(test)]
mod client;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = make_app(Catalog::seeded());

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        "Server running at http://localhost:{}{GRAPHQL_PATH}",
        config.port
    );

    axum::serve(listener, app).await?;
    Ok(())
}
