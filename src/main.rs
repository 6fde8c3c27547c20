use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use forum_store::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Load configuration
    let config = Config::load()?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting forum store");

    // Initialize the application
    let app = App::new(&config).await?;

    let snapshot = match app.snapshot().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("Failed to read store: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Store holds {} users and {} boards",
        snapshot.users.len(),
        snapshot.boards.len()
    );
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
