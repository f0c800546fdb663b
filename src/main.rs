// Start of file: src/main.rs

use axum::{Router, serve};
use tokio::net::TcpListener;

use algopark_api::config::state::AppState;
use algopark_api::core::{logging::init_tracing, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let state: AppState = AppState::from_env()?;
    tracing::debug!("Loaded environment configuration: {:#?}", state.environment);

    let listener: TcpListener = server::setup_listener(&state.environment).await?;
    tracing::info!(
        environment = %state.environment.environment,
        authenticator = ?state.authenticator,
        "Server listening on: {}",
        listener.local_addr()?
    );

    let app: Router = server::create_app(state);

    serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

// End of file: src/main.rs
