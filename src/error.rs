//! Per-connection failure taxonomy.
//!
//! Every variant ends the connection. All but the read failure are answered
//! with a fixed response; none of the detail carried here reaches the client.

use crate::http::parser::ParseError;
use crate::http::response::StatusCode;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum RequestError {
    /// The client sent nothing or the read failed
    TransportReadFailure,
    MalformedRequestLine(ParseError),
    UnsupportedVersion(String),
    /// `Upgrade:` and `h2c` both present
    UpgradeRejected,
    UnsupportedMethod(String),
    InvalidUri(String),
    /// Missing, a directory, or not openable
    NotFound(PathBuf),
}

impl RequestError {
    /// Status sent to the client, or `None` when nothing is sent.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RequestError::TransportReadFailure => None,
            RequestError::MalformedRequestLine(_)
            | RequestError::UnsupportedVersion(_)
            | RequestError::UpgradeRejected
            | RequestError::InvalidUri(_) => Some(StatusCode::BadRequest),
            RequestError::UnsupportedMethod(_) => Some(StatusCode::NotImplemented),
            RequestError::NotFound(_) => Some(StatusCode::NotFound),
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::TransportReadFailure => write!(f, "no data read from client"),
            RequestError::MalformedRequestLine(e) => write!(f, "malformed request line: {}", e),
            RequestError::UnsupportedVersion(v) => write!(f, "unsupported HTTP version: {}", v),
            RequestError::UpgradeRejected => write!(f, "HTTP/2 upgrade requested"),
            RequestError::UnsupportedMethod(m) => write!(f, "unsupported method: {}", m),
            RequestError::InvalidUri(u) => write!(f, "invalid URI: {}", u),
            RequestError::NotFound(p) => write!(f, "file not found: {}", p.display()),
        }
    }
}

impl std::error::Error for RequestError {}

impl From<ParseError> for RequestError {
    fn from(e: ParseError) -> Self {
        RequestError::MalformedRequestLine(e)
    }
}
