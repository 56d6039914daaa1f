use std::{net::IpAddr, time::Duration};

use anyhow::{anyhow, Context};
use relay_di::Build;
use relay_extern_contracts::dns::DnsApiService;
use relay_utils::trace_instrument;

#[derive(Debug, Clone, Build)]
pub struct DnsApiServiceImpl {
    config: DnsApiServiceConfig,
}

#[derive(Debug, Clone)]
pub struct DnsApiServiceConfig {
    pub timeout: Duration,
}

impl DnsApiService for DnsApiServiceImpl {
    #[trace_instrument(skip(self))]
    async fn resolve(&self, host: &str) -> anyhow::Result<IpAddr> {
        let addrs = tokio::time::timeout(self.config.timeout, tokio::net::lookup_host((host, 0)))
            .await
            .map_err(|_| anyhow!("Timed out resolving {host}"))?
            .with_context(|| format!("Failed to resolve {host}"))?
            .map(|addr| addr.ip())
            .collect::<Vec<_>>();

        addrs
            .iter()
            .find(|ip| ip.is_ipv4())
            .or(addrs.first())
            .copied()
            .with_context(|| format!("No addresses found for {host}"))
    }
}
