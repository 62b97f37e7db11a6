//! Nexus Backend
//!
//! Static web server for the NexusMind single-page app. Serves the bundle
//! from a configurable directory, answers a fixed JSON health check, and
//! returns the entry document for every unmatched route so client-side
//! routing can take over.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
