use std::sync::Arc;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket};
use tracing::{info, warn};

use crate::config::Config;
use crate::http::connection::Connection;

/// The platform's maximum listen backlog.
const LISTEN_BACKLOG: u32 = libc::SOMAXCONN as u32;

pub async fn run(cfg: Config) -> anyhow::Result<()> {
    let listener = bind(&cfg.server.listen_addr).await?;
    info!(
        "Listening on {} serving {}",
        listener.local_addr()?,
        cfg.static_files.root.display()
    );

    serve(listener, Arc::new(cfg)).await
}

/// Binds `addr` with `SO_REUSEADDR` and the maximum backlog.
pub async fn bind(addr: &str) -> anyhow::Result<TcpListener> {
    let addr = tokio::net::lookup_host(addr)
        .await
        .with_context(|| format!("resolving listen address {}", addr))?
        .next()
        .with_context(|| format!("no address found for {}", addr))?;

    let socket = if addr.is_ipv4() {
        TcpSocket::new_v4()?
    } else {
        TcpSocket::new_v6()?
    };
    socket.set_reuseaddr(true)?;
    socket
        .bind(addr)
        .with_context(|| format!("binding {}", addr))?;

    Ok(socket.listen(LISTEN_BACKLOG)?)
}

/// Accepts forever, one detached task per connection.
///
/// Accept failures are logged and skipped.
pub async fn serve(listener: TcpListener, cfg: Arc<Config>) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!(error = %e, "Error accepting connection");
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let cfg = Arc::clone(&cfg);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, &cfg);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
