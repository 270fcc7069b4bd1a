// Server loop module
// Accept loop feeding connections to per-connection tasks

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

use tokio::net::TcpListener;

use super::connection::accept_connection;
use crate::config::Config;
use crate::logger;

/// Run the accept loop on an already-bound listener.
///
/// Accept errors are logged and the loop continues. In normal operation the
/// loop never returns; the process runs until externally terminated.
pub async fn run(
    listener: TcpListener,
    config: Arc<Config>,
    active_connections: Arc<AtomicUsize>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                accept_connection(stream, peer_addr, &config, &active_connections);
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}
