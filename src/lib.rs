//! docroot - Minimal static file server
//!
//! Serves files from a fixed document root, one request per connection.

pub mod config;
pub mod error;
pub mod http;
pub mod server;
