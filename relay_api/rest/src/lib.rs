use std::net::IpAddr;

use axum::Router;
use relay_core_contact_contracts::ContactFeatureService;
use relay_core_diagnostics_contracts::DiagnosticsFeatureService;
use relay_core_health_contracts::HealthFeatureService;
use relay_di::Build;
use tokio::net::TcpListener;
use tracing::info;

mod middlewares;
mod models;
mod routes;


#[derive(Debug, Clone, Build)]
pub struct RestServer<Health, Contact, Diagnostics> {
    health: Health,
    contact: Contact,
    diagnostics: Diagnostics,
}

impl<Health, Contact, Diagnostics> RestServer<Health, Contact, Diagnostics>
where
    Health: HealthFeatureService,
    Contact: ContactFeatureService,
    Diagnostics: DiagnosticsFeatureService,
{
    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        info!("Starting REST API on {}", listener.local_addr()?);
        axum::serve(listener, router).await.map_err(Into::into)
    }

    pub fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::health::router(self.health.into()))
            .merge(routes::contact::router(self.contact.into()))
            .merge(routes::diagnostics::router(self.diagnostics.into()));

        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        middlewares::request_id::add(router)
    }
}
