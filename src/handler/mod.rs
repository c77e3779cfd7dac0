//! Request handler module
//!
//! Routes requests to the JSON API, sitemap and probe handlers.

pub mod router;

pub use router::handle_request;
