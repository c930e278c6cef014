use std::env;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

mod error;
mod handler;
mod http;
mod logger;
mod server;

use error::StartupError;

/// TCP port the listener binds on, all interfaces.
const PORT: u16 = 8080;

/// Subdirectory of the working directory whose contents are served.
const SERVED_SUBDIR: &str = "src";

fn main() {
    if let Err(err) = run() {
        logger::log_startup_error(&err);
        process::exit(1);
    }
}

/// Startup sequence: resolve the served directory, build the runtime,
/// announce the serving URL, bind, then hand off to the accept loop for
/// the rest of the process lifetime.
///
/// The served directory is not checked for existence here; a missing
/// directory surfaces as a 404 on each request that hits it.
fn run() -> Result<(), StartupError> {
    let cwd = env::current_dir().map_err(StartupError::Environment)?;
    let served_root: Arc<PathBuf> = Arc::new(cwd.join(SERVED_SUBDIR));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(StartupError::Runtime)?;

    runtime.block_on(async {
        logger::log_server_start(&served_root, PORT);

        let listener = server::listener::bind(PORT).map_err(StartupError::Bind)?;

        // Blocks until the process is killed.
        server::serve(listener, served_root).await;
        Ok(())
    })
}
