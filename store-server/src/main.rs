use store_server::{Config, Server, ServerState, print_banner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (.env, logging)
    dotenv::dotenv().ok();

    let config = Config::from_env();
    store_server::init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    print_banner();
    tracing::info!("Store server starting...");

    // 2. Initialize state (database, admin seed, services)
    let state = ServerState::initialize(&config).await?;

    // 3. Run the HTTP server until ctrl-c
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}

