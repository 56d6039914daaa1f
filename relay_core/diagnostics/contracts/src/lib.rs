use std::{future::Future, net::IpAddr};

/// Connectivity checks for the environment the service is deployed in.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait DiagnosticsFeatureService: Send + Sync + 'static {
    /// Resolve the host of the telegram api endpoint.
    fn test_dns(&self) -> impl Future<Output = anyhow::Result<DnsProbe>> + Send;

    /// Ask a public ip echo service for the public ip address of this host
    /// and return its response.
    fn test_network(&self) -> impl Future<Output = anyhow::Result<serde_json::Value>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsProbe {
    pub host: String,
    pub ip: IpAddr,
}

#[cfg(feature = "mock")]
impl MockDiagnosticsFeatureService {
    pub fn with_test_dns(mut self, result: anyhow::Result<DnsProbe>) -> Self {
        self.expect_test_dns()
            .once()
            .return_once(move || Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_test_network(mut self, result: anyhow::Result<serde_json::Value>) -> Self {
        self.expect_test_network()
            .once()
            .return_once(move || Box::pin(std::future::ready(result)));
        self
    }
}
