use std::{net::IpAddr, sync::Arc};

use axum::{extract::State, routing, Json, Router};
use relay_core_diagnostics_contracts::DiagnosticsFeatureService;
use serde::Serialize;

pub fn router(service: Arc<impl DiagnosticsFeatureService>) -> Router<()> {
    Router::new()
        .route("/test-dns", routing::get(test_dns))
        .route("/test-network", routing::get(test_network))
        .with_state(service)
}

/// Outcome of a diagnostics check. Failures are reported in the body, the
/// status code is always `200 OK`.
#[derive(Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum DiagnosticsResponse<T> {
    Success(T),
    Error { details: String },
}

impl<T> From<anyhow::Result<T>> for DiagnosticsResponse<T> {
    fn from(value: anyhow::Result<T>) -> Self {
        match value {
            Ok(data) => Self::Success(data),
            Err(err) => Self::Error {
                details: format!("{err:#}"),
            },
        }
    }
}

#[derive(Serialize)]
struct DnsData {
    ip: IpAddr,
}

#[derive(Serialize)]
struct NetworkData {
    data: serde_json::Value,
}

async fn test_dns(
    service: State<Arc<impl DiagnosticsFeatureService>>,
) -> Json<DiagnosticsResponse<DnsData>> {
    let result = service.test_dns().await.map(|probe| DnsData { ip: probe.ip });
    Json(result.into())
}

async fn test_network(
    service: State<Arc<impl DiagnosticsFeatureService>>,
) -> Json<DiagnosticsResponse<NetworkData>> {
    let result = service.test_network().await.map(|data| NetworkData { data });
    Json(result.into())
}
