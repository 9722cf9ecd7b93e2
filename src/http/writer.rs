use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;

/// Writes a `Response` to the client.
///
/// File bodies are streamed: each chunk is written as soon as it is read,
/// so a response never holds more than `chunk_size` bytes of the file.
pub struct ResponseWriter {
    chunk_size: usize,
    written: u64,
}

impl ResponseWriter {
    pub fn new(chunk_size: usize) -> Self {
        Self {
            chunk_size,
            written: 0,
        }
    }

    /// Bytes written so far, headers included.
    pub fn written(&self) -> u64 {
        self.written
    }

    pub async fn write_to_stream<W>(
        &mut self,
        response: Response,
        stream: &mut W,
    ) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let header = response.status().template();
        stream.write_all(header).await?;
        self.written += header.len() as u64;

        if let Response::File {
            mut file,
            send_body: true,
        } = response
        {
            self.copy_body(&mut file, stream).await?;
        }

        stream.flush().await?;
        Ok(())
    }

    async fn copy_body<R, W>(&mut self, file: &mut R, stream: &mut W) -> anyhow::Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut chunk = BytesMut::zeroed(self.chunk_size);
        loop {
            let n = file.read(&mut chunk[..]).await?;
            if n == 0 {
                return Ok(());
            }
            stream.write_all(&chunk[..n]).await?;
            self.written += n as u64;
        }
    }
}
