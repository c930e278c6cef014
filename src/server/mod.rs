// Server module entry
// Listener setup and the accept loop.

pub mod connection;
pub mod listener;

use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::logger;

/// Accept connections forever, handing each to its own task.
///
/// Accept errors are transient (peer reset mid-handshake, fd pressure);
/// they are logged and the loop keeps going. This function never returns.
pub async fn serve(listener: TcpListener, served_root: Arc<PathBuf>) {
    loop {
        match listener.accept().await {
            Ok((stream, _peer_addr)) => {
                connection::spawn(stream, Arc::clone(&served_root));
            }
            Err(e) => logger::log_accept_error(&e),
        }
    }
}
