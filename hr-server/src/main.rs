use hr_server::{Config, Server, ServerState, etl, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (dotenv, logging)
    setup_environment()?;

    print_banner();

    tracing::info!("Acme HR Server starting...");

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize server state (work dir, embedded database)
    let state = ServerState::initialize(&config).await?;

    // 4. Run the CSV loader before accepting requests. A partially
    //    loaded data set must not be served, so any loader error is fatal.
    match etl::run(&state.db, std::path::Path::new(&config.data_dir)).await {
        Ok(summary) => summary.log(),
        Err(e) => {
            tracing::error!("ETL load failed: {}", e);
            std::process::exit(1);
        }
    }

    // 5. Start the HTTP server
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
