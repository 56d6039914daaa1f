//! A fake ip echo service compatible with <https://api.ipify.org>.

use std::net::IpAddr;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use url::Url;

/// Start the fake ip echo service on an ephemeral port and return its url.
pub async fn start(ip: IpAddr) -> anyhow::Result<Url> {
    crate::spawn(router(ip)).await
}

pub async fn start_server(host: IpAddr, port: u16, ip: IpAddr) -> anyhow::Result<()> {
    info!("Starting ip echo testing server on {host}:{port}");
    info!("Reported ip address: {ip}");

    crate::serve(router(ip), host, port).await
}

fn router(ip: IpAddr) -> Router<()> {
    Router::new()
        .route("/", routing::get(echo))
        .with_state(ip)
}

#[derive(Deserialize)]
struct EchoQuery {
    format: Option<String>,
}

async fn echo(State(ip): State<IpAddr>, Query(query): Query<EchoQuery>) -> Response {
    match query.format.as_deref() {
        Some("json") => Json(json!({ "ip": ip })).into_response(),
        _ => ip.to_string().into_response(),
    }
}
