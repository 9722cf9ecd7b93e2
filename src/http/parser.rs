use std::fmt;

use crate::http::request::Request;

pub const MAX_METHOD_LEN: usize = 15;
pub const MAX_URI_LEN: usize = 255;
pub const MAX_VERSION_LEN: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Fewer than three tokens on the request line
    MissingToken,
    /// A token is longer than its bound
    TokenTooLong,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingToken => write!(f, "fewer than three tokens"),
            ParseError::TokenTooLong => write!(f, "token exceeds its length bound"),
        }
    }
}

/// Parses `METHOD SP URI SP VERSION` from the first line of `buf`.
///
/// Tokens are split on ASCII whitespace and kept as raw bytes. Anything
/// after the third token, including the remaining header lines, is ignored.
pub fn parse_request_line(buf: &[u8]) -> Result<Request, ParseError> {
    let line_end = buf.iter().position(|&b| b == b'\n').unwrap_or(buf.len());
    let line = &buf[..line_end];

    let mut tokens = line
        .split(|b| b.is_ascii_whitespace())
        .filter(|t| !t.is_empty());

    let method = bounded_token(tokens.next(), MAX_METHOD_LEN)?;
    let uri = bounded_token(tokens.next(), MAX_URI_LEN)?;
    let version = bounded_token(tokens.next(), MAX_VERSION_LEN)?;

    Ok(Request::new(method, uri, version))
}

fn bounded_token(token: Option<&[u8]>, max: usize) -> Result<&[u8], ParseError> {
    let token = token.ok_or(ParseError::MissingToken)?;
    if token.len() > max {
        return Err(ParseError::TokenTooLong);
    }
    Ok(token)
}

/// Detects an HTTP/2 cleartext upgrade attempt.
///
/// This is a raw substring scan over the whole buffer; headers are not
/// parsed, so `Upgrade:` and `h2c` may appear anywhere.
pub fn is_h2c_upgrade(buf: &[u8]) -> bool {
    contains(buf, b"Upgrade:") && contains(buf, b"h2c")
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}
