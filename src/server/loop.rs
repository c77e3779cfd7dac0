// Server loop module
// Accepts connections until shutdown, then drains open ones

use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::time::Instant;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

const DRAIN_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Accept connections on `listener` until [`AppState::request_shutdown`] is
/// called, then wait up to `performance.shutdown_timeout` seconds for open
/// connections to finish.
pub async fn run_server(listener: TcpListener, state: Arc<AppState>) {
    let shutdown = Arc::clone(&state.shutdown);
    // Registered before the flag check so a concurrent request_shutdown is not lost
    let notified = shutdown.notified();
    tokio::pin!(notified);

    if !state.is_shutting_down() {
        loop {
            tokio::select! {
                accept_result = listener.accept() => {
                    match accept_result {
                        Ok((stream, peer_addr)) => accept_connection(stream, peer_addr, &state),
                        Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
                    }
                }
                () = &mut notified => break,
            }
        }
    }

    drop(listener);
    drain_connections(&state).await;
}

async fn drain_connections(state: &AppState) {
    logger::log_shutdown_started(state.connection_count());

    let deadline =
        Instant::now() + Duration::from_secs(state.config.performance.shutdown_timeout);
    while state.connection_count() > 0 && Instant::now() < deadline {
        tokio::time::sleep(DRAIN_POLL_INTERVAL).await;
    }

    logger::log_shutdown_complete(state.connection_count());
}
