use tokio::fs::File;

/// Header block sent before a file body.
pub const HTTP_200: &[u8] = b"HTTP/1.0 200 OK\r\nContent-Type: text/html\r\n\r\n";
pub const HTTP_400: &[u8] = b"HTTP/1.0 400 Bad Request\r\nContent-Type: text/html\r\n\r\n<html><body><h1>400 Bad Request</h1></body></html>\r\n";
pub const HTTP_404: &[u8] = b"HTTP/1.0 404 Not Found\r\nContent-Type: text/html\r\n\r\n<html><body><h1>404 Not Found</h1></body></html>\r\n";
pub const HTTP_501: &[u8] = b"HTTP/1.0 501 Not Implemented\r\nContent-Type: text/html\r\n\r\n<html><body><h1>501 Not Implemented</h1></body></html>\r\n";

/// HTTP status codes the server can answer with.
///
/// - `Ok` (200): file served
/// - `BadRequest` (400): malformed line, bad version, h2c upgrade or bad URI
/// - `NotFound` (404): missing, directory or unreadable
/// - `NotImplemented` (501): method other than GET/HEAD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 501 Not Implemented
    NotImplemented,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// ```
    /// # use docroot::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotImplemented.as_u16(), 501);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::NotImplemented => 501,
        }
    }

    /// The exact bytes written for this status.
    ///
    /// For `Ok` this is only the header block; the file body follows it.
    /// Every other status is a complete response.
    pub fn template(&self) -> &'static [u8] {
        match self {
            StatusCode::Ok => HTTP_200,
            StatusCode::BadRequest => HTTP_400,
            StatusCode::NotFound => HTTP_404,
            StatusCode::NotImplemented => HTTP_501,
        }
    }
}

/// The single response produced for a connection.
#[derive(Debug)]
pub enum Response {
    /// A fixed response with no file attached
    Status(StatusCode),
    /// 200 OK backed by an open file; the body is only sent when `send_body`
    File { file: File, send_body: bool },
}

impl Response {
    pub fn status(&self) -> StatusCode {
        match self {
            Response::Status(status) => *status,
            Response::File { .. } => StatusCode::Ok,
        }
    }
}
