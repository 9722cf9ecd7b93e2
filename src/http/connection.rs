use std::path::{Path, PathBuf};

use bytes::{Bytes, BytesMut};
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::RequestError;
use crate::http::parser::{is_h2c_upgrade, parse_request_line};
use crate::http::request::{Method, Request};
use crate::http::resolve::resolve_path;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// Handles exactly one request on one client stream.
pub struct Connection<S> {
    stream: S,
    root: PathBuf,
    max_request_bytes: usize,
    chunk_size: usize,
    state: ConnectionState,
}

/// Linear pipeline; any failure jumps to `Responding` with a fixed status,
/// or straight to `Closed` when nothing was read.
#[derive(Debug)]
pub enum ConnectionState {
    Reading,
    Parsing(Bytes),
    Validating(Request, Bytes),
    Resolving(Request, Method),
    Opening(PathBuf, Method),
    Responding(Response),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, cfg: &Config) -> Self {
        Self {
            stream,
            root: cfg.static_files.root.clone(),
            max_request_bytes: cfg.server.max_request_bytes,
            chunk_size: cfg.static_files.chunk_size,
            state: ConnectionState::Reading,
        }
    }

    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    /// Drives the pipeline to `Closed`. The stream is shut down on every path.
    ///
    /// Only failures while writing the response are returned.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let result = self.drive().await;

        if let Err(e) = self.stream.shutdown().await {
            debug!(error = %e, "Shutdown after response failed");
        }
        self.state = ConnectionState::Closed;

        result
    }

    async fn drive(&mut self) -> anyhow::Result<()> {
        loop {
            let state = std::mem::replace(&mut self.state, ConnectionState::Closed);
            self.state = match state {
                ConnectionState::Reading => match self.read_request().await {
                    Ok(raw) => ConnectionState::Parsing(raw),
                    Err(e) => Self::fail(e),
                },

                ConnectionState::Parsing(raw) => match parse_request_line(&raw) {
                    Ok(request) => {
                        info!(
                            method = %request.method_lossy(),
                            uri = %request.uri_lossy(),
                            version = %request.version_lossy(),
                            "Client request"
                        );
                        ConnectionState::Validating(request, raw)
                    }
                    Err(e) => Self::fail(e.into()),
                },

                ConnectionState::Validating(request, raw) => match Self::validate(&request, &raw) {
                    Ok(method) => ConnectionState::Resolving(request, method),
                    Err(e) => Self::fail(e),
                },

                ConnectionState::Resolving(request, method) => {
                    let path = resolve_path(&self.root, &request.uri);
                    info!(path = %path.display(), "Resolved file path");
                    ConnectionState::Opening(path, method)
                }

                ConnectionState::Opening(path, method) => match Self::open(&path).await {
                    Ok(file) => {
                        info!(status = 200, path = %path.display(), "File served");
                        ConnectionState::Responding(Response::File {
                            file,
                            send_body: method.sends_body(),
                        })
                    }
                    Err(e) => Self::fail(e),
                },

                ConnectionState::Responding(response) => {
                    let mut writer = ResponseWriter::new(self.chunk_size);
                    writer.write_to_stream(response, &mut self.stream).await?;
                    debug!(bytes = writer.written(), "Response sent");
                    ConnectionState::Closed
                }

                ConnectionState::Closed => return Ok(()),
            };
        }
    }

    /// Single read, bounded by `max_request_bytes`.
    async fn read_request(&mut self) -> Result<Bytes, RequestError> {
        let mut buf = BytesMut::zeroed(self.max_request_bytes);
        match self.stream.read(&mut buf[..]).await {
            Ok(0) => Err(RequestError::TransportReadFailure),
            Ok(n) => {
                buf.truncate(n);
                Ok(buf.freeze())
            }
            Err(e) => {
                debug!(error = %e, "Read from client failed");
                Err(RequestError::TransportReadFailure)
            }
        }
    }

    /// Version, upgrade, method and URI checks, in that order.
    fn validate(request: &Request, raw: &[u8]) -> Result<Method, RequestError> {
        if !request.has_supported_version() {
            return Err(RequestError::UnsupportedVersion(request.version_lossy().into_owned()));
        }
        if is_h2c_upgrade(raw) {
            return Err(RequestError::UpgradeRejected);
        }
        let method = request
            .parsed_method()
            .ok_or_else(|| RequestError::UnsupportedMethod(request.method_lossy().into_owned()))?;
        if !request.has_valid_uri() {
            return Err(RequestError::InvalidUri(request.uri_lossy().into_owned()));
        }
        Ok(method)
    }

    async fn open(path: &Path) -> Result<File, RequestError> {
        match tokio::fs::metadata(path).await {
            Ok(meta) if !meta.is_dir() => {}
            _ => return Err(RequestError::NotFound(path.to_path_buf())),
        }

        File::open(path).await.map_err(|e| {
            debug!(error = %e, path = %path.display(), "Error opening file");
            RequestError::NotFound(path.to_path_buf())
        })
    }

    fn fail(err: RequestError) -> ConnectionState {
        match err.status() {
            Some(status) => {
                warn!(status = status.as_u16(), reason = %err, "Request rejected");
                ConnectionState::Responding(Response::Status(status))
            }
            None => {
                warn!(reason = %err, "Closing connection without response");
                ConnectionState::Closed
            }
        }
    }
}
