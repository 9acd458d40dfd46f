use anyhow::Result;
use tracing::{error, info};

use board_blog::core::app::App;
use board_blog::core::config::Config;
use board_blog::core::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Load configuration
    let config = Config::load()?;

    // Initialize logging
    logging::init(&config.logging);

    info!("Starting board blog");

    // Initialize the application
    let app = App::new(config).await?;

    // Start the application
    if let Err(e) = app.run().await {
        error!("Application error: {}", e);
        return Err(e);
    }

    Ok(())
}
