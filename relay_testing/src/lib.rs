//! Fake implementations of the external services the relay talks to, for
//! integration tests and local development.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use url::Url;

pub mod ip_echo;
pub mod telegram;

/// Serve `router` on `host:port` until the process is stopped.
pub async fn serve(router: Router, host: IpAddr, port: u16) -> anyhow::Result<()> {
    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router)
        .await
        .context("Failed to start HTTP server")
}

/// Serve `router` on an ephemeral port on localhost in a background task and
/// return its base url.
pub async fn spawn(router: Router) -> anyhow::Result<Url> {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .await
        .context("Failed to bind to ephemeral port")?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, router).await {
            tracing::error!("Test server on {addr} failed: {err}");
        }
    });

    base_url(addr)
}

/// Return the base url of a local port that nothing listens on.
pub async fn unreachable_url() -> anyhow::Result<Url> {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await?;
    let addr = listener.local_addr()?;
    drop(listener);
    base_url(addr)
}

fn base_url(addr: SocketAddr) -> anyhow::Result<Url> {
    format!("http://{addr}/")
        .parse()
        .context("Failed to build base url")
}
