use std::{future::Future, net::IpAddr};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait DnsApiService: Send + Sync + 'static {
    /// Resolve the given hostname to an ip address. IPv4 addresses are
    /// preferred if the host has both.
    fn resolve(&self, host: &str) -> impl Future<Output = anyhow::Result<IpAddr>> + Send;
}

#[cfg(feature = "mock")]
impl MockDnsApiService {
    pub fn with_resolve(mut self, host: String, result: anyhow::Result<IpAddr>) -> Self {
        self.expect_resolve()
            .once()
            .with(mockall::predicate::eq(host))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
