use std::{sync::Arc, time::Duration};

use anyhow::Context;
use relay_di::Build;
use relay_extern_contracts::ip_echo::IpEchoApiService;
use url::Url;

use crate::http::HttpClient;

/// https://www.ipify.org/
pub const IP_ECHO_ENDPOINT: &str = "https://api.ipify.org/";

#[derive(Debug, Clone, Build)]
pub struct IpEchoApiServiceImpl {
    config: IpEchoApiServiceConfig,
    #[state]
    http: HttpClient,
}

#[derive(Debug, Clone)]
pub struct IpEchoApiServiceConfig {
    endpoint: Arc<Url>,
    timeout: Duration,
}

impl IpEchoApiServiceConfig {
    pub fn new(endpoint_override: Option<Url>, timeout: Duration) -> anyhow::Result<Self> {
        let endpoint = match endpoint_override {
            Some(endpoint) => endpoint,
            None => IP_ECHO_ENDPOINT
                .parse()
                .context("Failed to parse ip echo endpoint")?,
        };

        Ok(Self {
            endpoint: endpoint.into(),
            timeout,
        })
    }
}

impl IpEchoApiService for IpEchoApiServiceImpl {
    async fn get_public_ip(&self) -> anyhow::Result<serde_json::Value> {
        self.http
            .get((*self.config.endpoint).clone())
            .query(&[("format", "json")])
            .timeout(self.config.timeout)
            .send()
            .await
            .context("Failed to send ip echo request")?
            .error_for_status()
            .context("Ip echo request returned an error")?
            .json()
            .await
            .context("Failed to deserialize ip echo response")
    }
}
