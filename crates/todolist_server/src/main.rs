//! Server entry point.
//!
//! Startup order is strict: logging, configuration, database (migrations
//! applied), then the listener. A failure at any step exits nonzero before
//! the process starts serving traffic; there is no retry.

#![forbid(unsafe_code)]

use log::{error, info};
use std::process::ExitCode;
use todolist_core::db::open_db;
use todolist_core::{core_version, init_logging};
use todolist_server::{build_router, AppState, ServerConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            // Logging may not be up yet, so mirror the failure to stderr.
            error!("event=app_exit module=server status=error error={message}");
            eprintln!("todolist-server: {message}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), String> {
    let config = ServerConfig::from_env().map_err(|err| err.to_string())?;

    init_logging(&config.log_level, &config.log_target)?;
    info!(
        "event=server_start module=server status=start core_version={} db_path={}",
        core_version(),
        config.db_path.display()
    );

    let conn = open_db(&config.db_path)
        .map_err(|err| format!("failed to open database `{}`: {err}", config.db_path.display()))?;

    let state = AppState::new(conn);
    let app = build_router(state.clone(), config.static_dir.clone());

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|err| format!("failed to bind {bind_addr}: {err}"))?;
    info!("event=server_listen module=server status=ok addr={bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| format!("server failed: {err}"))?;

    // Explicit lifecycle: the connection opened at startup is dropped here,
    // after the listener has drained.
    drop(state);
    info!("event=server_stop module=server status=ok");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("event=shutdown_signal module=server status=error error={err}");
        return;
    }
    info!("event=shutdown_signal module=server status=ok");
}
