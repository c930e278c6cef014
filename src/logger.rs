//! Logging utilities.
//!
//! Informational lines go to stdout, warnings and errors to stderr, all
//! timestamped. There is no per-request access log; only lifecycle events
//! and failures are reported.

use chrono::Local;
use std::path::Path;

fn write_info(message: &str) {
    println!("[{}] {message}", Local::now().format("%Y-%m-%d %H:%M:%S"));
}

fn write_error(message: &str) {
    eprintln!("[{}] {message}", Local::now().format("%Y-%m-%d %H:%M:%S"));
}

/// Startup banner naming the serving URL and the served directory.
pub fn log_server_start(served_root: &Path, port: u16) {
    write_info("======================================");
    write_info("Static file server");
    write_info(&format!("Serving directory: {}", served_root.display()));
    write_info(&format!("Listening on: http://localhost:{port}/"));
    write_info("Using Tokio runtime for concurrency");
    write_info("======================================");
}

/// Fatal startup condition; the caller exits right after this.
pub fn log_startup_error(err: &crate::error::StartupError) {
    write_error(&format!("[FATAL] {err}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_accept_error(err: &std::io::Error) {
    write_error(&format!("[ERROR] Failed to accept connection: {err}"));
}
