//! Logger module
//!
//! Server lifecycle logging, per-request access logging, and error/warning
//! output. Lines go to stdout/stderr until `init` wires up file sinks.

mod format;
pub mod writer;

pub use format::AccessRecord;

use crate::config::Config;
use std::net::SocketAddr;

/// Initialize log sinks from configuration; call once at startup
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_access(message),
        None => println!("{message}"),
    }
}

fn write_error_line(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info("======================================");
    write_info("Nexus Backend started");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Serving assets from: {}", config.static_files.root));
    if config.health.enabled {
        write_info(&format!("Health check: {}", config.health.path));
    }
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info("======================================\n");
}

/// Write a completed-request record to the access log
pub fn log_access(record: &AccessRecord, format: &str) {
    write_info(&record.render(format));
}

pub fn log_error(message: &str) {
    write_error_line(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error_line(&format!("[WARN] {message}"));
}

pub fn log_accept_error(err: &std::io::Error) {
    write_error_line(&format!("[ERROR] Failed to accept connection: {err}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error_line(&format!("[ERROR] Failed to serve connection: {err:?}"));
}
