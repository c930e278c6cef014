//! Fatal startup errors.
//!
//! Only the startup sequence can kill the process. Per-request failures
//! (missing files, refused paths) are answered with ordinary HTTP error
//! responses by the handler and never reach this type.

use std::fmt;
use std::io;

/// Error raised before the accept loop starts running.
#[derive(Debug)]
pub enum StartupError {
    /// The current working directory could not be determined.
    Environment(io::Error),
    /// The Tokio runtime could not be built.
    Runtime(io::Error),
    /// The TCP listener could not be established (port in use, privilege).
    Bind(io::Error),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Environment(e) => write!(f, "failed to resolve working directory: {e}"),
            Self::Runtime(e) => write!(f, "failed to build async runtime: {e}"),
            Self::Bind(e) => write!(f, "failed to bind listener: {e}"),
        }
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Environment(e) | Self::Runtime(e) | Self::Bind(e) => Some(e),
        }
    }
}
