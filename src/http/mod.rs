//! HTTP request handling.
//!
//! Each client connection carries exactly one request and one response.
//!
//! # Architecture
//!
//! - **`connection`**: the per-connection state machine
//! - **`parser`**: request-line tokenizer and h2c upgrade scan
//! - **`request`**: the parsed request line and supported methods
//! - **`resolve`**: maps a URI onto the document root
//! - **`response`**: status codes and the fixed response templates
//! - **`writer`**: writes templates and streams file bodies
//!
//! # Connection State Machine
//!
//! ```text
//!   Reading ──(0 bytes / error)──────────────────────────────┐
//!      │                                                     │
//!   Parsing ──(< 3 tokens)───────────────┐                   │
//!      │                                 │                   │
//!   Validating ──(version/h2c/method/uri)┤ fixed 400/501/404 │
//!      │                                 │                   │
//!   Resolving                            │                   │
//!      │                                 │                   │
//!   Opening ──(missing/dir/unreadable)───┤                   │
//!      │                                 ▼                   │
//!   Responding ◄─────────────────────────┘                   │
//!      │                                                     │
//!   Closed ◄─────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use docroot::config::Config;
//! use docroot::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let cfg = Config::default();
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let cfg = cfg.clone();
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, &cfg);
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod parser;
pub mod request;
pub mod resolve;
pub mod response;
pub mod writer;
