use std::sync::Arc;

use tracing::info;

use skillshelf::{Config, Database, WebServer};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    // Initialize logging
    if let Err(e) = skillshelf::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        skillshelf::logging::init_console_only(&config.logging.level);
    }

    info!("Skillshelf - content-management backend");

    let db = match Database::connect(&config.database).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to set up storage: {}", e);
            std::process::exit(1);
        }
    };

    let server = WebServer::new(&config.server, Arc::new(db));
    info!("Server configured on {}", server.addr());

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
