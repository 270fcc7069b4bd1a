// Server module entry point
// Listener construction, accept loop, and per-connection serving

pub mod connection;
pub mod listener;

// Rust does not allow `loop` as a module name (keyword), so map the file in
#[path = "loop.rs"]
pub mod server_loop;

pub use listener::create_listener;
pub use server_loop::run;
