//! # Greeting Server
//!
//! A single-route HTTP/1.1 server: `GET /` returns a fixed HTML greeting,
//! every other request gets the default 404 page.
//!
//! The crate is split into small modules:
//! - `config`: layered configuration (defaults, optional file, environment)
//! - `server`: listener construction, accept loop, per-connection serving
//! - `handler`: request dispatch and the greeting route
//! - `http`: response builders and cache validation helpers
//! - `logger`: startup banner, error logging, and the access log
//!
//! The binary in `main.rs` wires these together; integration tests drive
//! the same server loop in-process through this library crate.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
