use std::future::Future;

/// Client for a public ip echo service like <https://www.ipify.org/>.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait IpEchoApiService: Send + Sync + 'static {
    /// Ask the service for the public ip address of this host. The JSON
    /// document returned by the service is passed through unchanged.
    fn get_public_ip(&self) -> impl Future<Output = anyhow::Result<serde_json::Value>> + Send;
}

#[cfg(feature = "mock")]
impl MockIpEchoApiService {
    pub fn with_get_public_ip(mut self, result: anyhow::Result<serde_json::Value>) -> Self {
        self.expect_get_public_ip()
            .once()
            .return_once(move || Box::pin(std::future::ready(result)));
        self
    }
}
