use seating_server::{Config, Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. .env + logging
    setup_environment();

    print_banner();

    tracing::info!("🍽️ Seating Server starting...");

    // 2. configuration
    let config = Config::from_env();

    // 3. catalog, registry, meal service
    let state = ServerState::initialize(&config)?;

    // 4. serve until Ctrl+C
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
