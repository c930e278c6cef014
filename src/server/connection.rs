// Connection handling module
// Serves HTTP/1.1 requests on a single accepted stream.

use std::path::PathBuf;
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpStream;

use crate::handler;
use crate::logger;

/// Serve one connection in a spawned task.
///
/// Connection-level failures (client hangup, malformed request line) are
/// logged and die with the task; they never reach the accept loop.
pub fn spawn(stream: TcpStream, served_root: Arc<PathBuf>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let mut builder = http1::Builder::new();
        builder.keep_alive(true);

        let conn = builder.serve_connection(
            io,
            service_fn(move |req| {
                let root = Arc::clone(&served_root);
                async move { handler::handle_request(req, root).await }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
