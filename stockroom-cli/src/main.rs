//! stockroom - inventory tracking HTTP service
//!
//! Opens (or creates) the SQLite database, ensures the schema, and serves
//! supplier and item CRUD until terminated.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use stockroom_server::db::{create_pool, migrations};
use stockroom_server::http::{run_server, ServerConfig};

#[derive(Parser, Debug)]
#[command(
    name = "stockroom",
    author,
    version,
    about = "Inventory tracking HTTP service over SQLite"
)]
struct Cli {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "0.0.0.0:8000")]
    bind: SocketAddr,

    /// Database URL
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://inventory.db")]
    database_url: String,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let pool = create_pool(&cli.database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to set up inventory schema")?;

    tracing::info!("Starting stockroom server on {}", cli.bind);

    let config = ServerConfig {
        bind_addr: cli.bind,
    };

    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
