//! Request handler module
//!
//! Responsible for request dispatch and the greeting route.

pub mod greeting;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
