//! HTTP protocol layer module
//!
//! Response builders and cache validation helpers, decoupled from the
//! routing logic.

pub mod cache;
pub mod response;

// Re-export commonly used builders
pub use response::{build_304_response, build_404_response, build_greeting_response};
