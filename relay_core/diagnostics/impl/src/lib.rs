use std::sync::Arc;

use relay_core_diagnostics_contracts::{DiagnosticsFeatureService, DnsProbe};
use relay_di::Build;
use relay_extern_contracts::{dns::DnsApiService, ip_echo::IpEchoApiService};
use tracing::{error, info};

#[derive(Debug, Clone, Build)]
pub struct DiagnosticsFeatureServiceImpl<Dns, IpEcho> {
    dns: Dns,
    ip_echo: IpEcho,
    config: DiagnosticsFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct DiagnosticsFeatureConfig {
    /// Host that is resolved by the dns check, usually the host of the
    /// telegram api endpoint.
    pub dns_probe_host: Arc<str>,
}

impl<Dns, IpEcho> DiagnosticsFeatureService for DiagnosticsFeatureServiceImpl<Dns, IpEcho>
where
    Dns: DnsApiService,
    IpEcho: IpEchoApiService,
{
    async fn test_dns(&self) -> anyhow::Result<DnsProbe> {
        let host = &*self.config.dns_probe_host;

        let ip = self
            .dns
            .resolve(host)
            .await
            .inspect_err(|err| error!("DNS resolution of {host} failed: {err:#}"))?;

        info!("DNS resolved: {host} -> {ip}");

        Ok(DnsProbe {
            host: host.into(),
            ip,
        })
    }

    async fn test_network(&self) -> anyhow::Result<serde_json::Value> {
        self.ip_echo
            .get_public_ip()
            .await
            .inspect(|data| info!("Network check succeeded: {data}"))
            .inspect_err(|err| error!("Network check failed: {err:#}"))
    }
}
