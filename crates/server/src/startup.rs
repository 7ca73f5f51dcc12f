use configs::AppConfig;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::{errors::StartupError, routes, state::ServerState};

/// Any origin, any method, any header: the record endpoints are public.
pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open the configured record store and wrap it in handler state.
pub async fn build_state(cfg: &AppConfig) -> Result<ServerState, StartupError> {
    let repo = service::student::open_repository(&cfg.database).await?;
    Ok(ServerState::new(repo, cfg.server.error_status))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(event = "signal_error", error = %e, "cannot listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
}

/// Public entry: build the app and run the HTTP server until Ctrl+C.
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    let state = build_state(&cfg).await?;
    let backend = state.students.backend();
    let app = routes::build_router(state, build_cors());

    let bind = cfg.server.bind_addr();
    let listener = TcpListener::bind(&bind)
        .await
        .map_err(|e| StartupError::Runtime(format!("cannot bind {bind}: {e}")))?;
    let addr = listener
        .local_addr()
        .map_err(|e| StartupError::Runtime(e.to_string()))?;
    info!(%addr, backend, error_status = ?cfg.server.error_status, "record service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| StartupError::Runtime(format!("server error: {e}")))?;
    Ok(())
}
