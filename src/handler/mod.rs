//! Request handler module
//!
//! Routes incoming requests to the author endpoint and the health probes.

pub mod router;

// Re-export main entry point
pub use router::handle_request;
