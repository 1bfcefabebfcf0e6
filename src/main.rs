//! Schema bootstrap binary.
//!
//! Connects to the configured database and creates any missing tables from
//! the entity definitions. The registration site itself (HTTP routing, auth)
//! runs in a separate service that links this crate as a library.

use cococs_core::config;
use cococs_core::errors::Result;
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing as early as possible
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load .env non-fatally; env vars can be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    let pages = config::categories::load_default_pages()
        .inspect_err(|e| error!("Failed to load category page configuration: {e}"))?;
    info!(
        language = pages.language.len(),
        enrichment = pages.enrichment.len(),
        "Category page orders loaded."
    );

    let db = config::database::create_connection()
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;

    config::database::create_tables(&db)
        .await
        .inspect(|_| info!("Database schema is up to date."))
        .inspect_err(|e| error!("Failed to create tables: {e}"))?;

    Ok(())
}
