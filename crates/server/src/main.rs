//! QuoteForge Server - HTTP REST API for contract management
//!
//! Binary entry point: loads configuration from environment and
//! optional `server.*` config file, then runs the HTTP service until
//! shutdown.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up a local .env when present, for development
    dotenvy::dotenv().ok();

    let config = ServerConfig::load()?;

    server::start_server(config).await?;

    Ok(())
}
