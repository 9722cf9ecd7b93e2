use std::borrow::Cow;

/// Methods the server implements.
///
/// Anything else is answered with 501 Not Implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Send headers and the file body
    GET,
    /// HEAD - Like GET but without the response body
    HEAD,
}

/// Versions accepted on the request line.
pub const SUPPORTED_VERSIONS: [&[u8]; 2] = [b"HTTP/1.0", b"HTTP/1.1"];

/// The request line of a client request.
///
/// Fields are the raw bytes the client sent; they need not be UTF-8.
/// Headers and body are not modeled, validation happens afterwards in a
/// fixed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The method token (e.g. "GET")
    pub method: Vec<u8>,
    /// The request URI (e.g. "/index.html")
    pub uri: Vec<u8>,
    /// The version token (e.g. "HTTP/1.1")
    pub version: Vec<u8>,
}

impl Method {
    /// Parses a method token. Matching is case-sensitive.
    ///
    /// ```
    /// # use docroot::http::request::Method;
    /// assert_eq!(Method::from_bytes(b"GET"), Some(Method::GET));
    /// assert_eq!(Method::from_bytes(b"get"), None);
    /// assert_eq!(Method::from_bytes(b"POST"), None);
    /// ```
    pub fn from_bytes(s: &[u8]) -> Option<Self> {
        match s {
            b"GET" => Some(Method::GET),
            b"HEAD" => Some(Method::HEAD),
            _ => None,
        }
    }

    /// Whether the response carries the file body.
    pub fn sends_body(&self) -> bool {
        matches!(self, Method::GET)
    }
}

impl Request {
    pub fn new(
        method: impl Into<Vec<u8>>,
        uri: impl Into<Vec<u8>>,
        version: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            method: method.into(),
            uri: uri.into(),
            version: version.into(),
        }
    }

    pub fn has_supported_version(&self) -> bool {
        SUPPORTED_VERSIONS.contains(&self.version.as_slice())
    }

    pub fn parsed_method(&self) -> Option<Method> {
        Method::from_bytes(&self.method)
    }

    /// Only origin-form URIs are served.
    pub fn has_valid_uri(&self) -> bool {
        self.uri.first() == Some(&b'/')
    }

    pub fn method_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.method)
    }

    pub fn uri_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.uri)
    }

    pub fn version_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.version)
    }
}
