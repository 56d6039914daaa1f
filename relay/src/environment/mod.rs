use std::sync::Arc;

use anyhow::Context;
use relay_config::Config;
use relay_core_contact_impl::ContactFeatureConfig;
use relay_core_diagnostics_impl::DiagnosticsFeatureConfig;
use relay_di::provider;
use relay_extern_impl::{
    dns::DnsApiServiceConfig, ip_echo::IpEchoApiServiceConfig, telegram::TelegramApiServiceConfig,
};
use relay_models::telegram::TelegramChatId;

pub mod types;

provider! {
    /// The default provider, capable of providing all the dependencies
    pub Provider {
        // Extern
        telegram_api_service_config: TelegramApiServiceConfig,
        dns_api_service_config: DnsApiServiceConfig,
        ip_echo_api_service_config: IpEchoApiServiceConfig,

        // Core
        contact_feature_config: ContactFeatureConfig,
        diagnostics_feature_config: DiagnosticsFeatureConfig,
    }
}

impl Provider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let timeout = *config.http.client_timeout;

        // Extern
        let telegram_api_service_config = TelegramApiServiceConfig::new(
            config.telegram.endpoint_override.clone(),
            config.telegram.bot_token.as_ref().map(|token| token.0.clone()),
            timeout,
        )?;

        let dns_api_service_config = DnsApiServiceConfig { timeout };

        let ip_echo_api_service_config =
            IpEchoApiServiceConfig::new(config.diagnostics.ip_echo_endpoint_override.clone(), timeout)?;

        // Core
        let chat_id = config
            .telegram
            .chat_id
            .as_deref()
            .filter(|chat_id| !chat_id.trim().is_empty())
            .map(TelegramChatId::try_new)
            .transpose()
            .context("Invalid telegram chat id")?;

        let contact_feature_config = ContactFeatureConfig {
            chat_id: chat_id.map(Arc::new),
        };

        let diagnostics_feature_config = DiagnosticsFeatureConfig {
            dns_probe_host: telegram_api_service_config
                .endpoint()
                .host_str()
                .context("Telegram api endpoint has no host")?
                .into(),
        };

        Ok(Self {
            _cache: Default::default(),

            // Extern
            telegram_api_service_config,
            dns_api_service_config,
            ip_echo_api_service_config,

            // Core
            contact_feature_config,
            diagnostics_feature_config,
        })
    }
}

#[cfg(test)]
mod tests {
    use relay_di::Provides;
    use types::RestServer;

    use super::*;

    fn load_config(overrides: &[&str]) -> Config {
        relay_config::load_with_override(&[relay_config::DEFAULT_CONFIG_PATH], overrides).unwrap()
    }

    #[test]
    fn provide_rest_server() {
        let config = load_config(&[]);
        let mut provider = Provider::new(&config).unwrap();
        let _: RestServer = provider.provide();
    }

    #[test]
    fn chat_id() {
        let config = load_config(&["telegram.chat_id = \" -1001234567890 \""]);
        let mut provider = Provider::new(&config).unwrap();

        let ContactFeatureConfig { chat_id } = provider.provide();

        assert_eq!(chat_id.unwrap().as_str(), "-1001234567890");
    }

    #[test]
    fn blank_chat_id_is_missing() {
        let config = load_config(&["telegram.chat_id = \"  \""]);
        let mut provider = Provider::new(&config).unwrap();

        let ContactFeatureConfig { chat_id } = provider.provide();

        assert!(chat_id.is_none());
    }

    #[test]
    fn dns_probe_host_follows_telegram_endpoint() {
        let config = load_config(&["telegram.endpoint_override = \"http://127.0.0.1:8003/\""]);
        let mut provider = Provider::new(&config).unwrap();

        let DiagnosticsFeatureConfig { dns_probe_host } = provider.provide();

        assert_eq!(&*dns_probe_host, "127.0.0.1");
    }

    #[test]
    fn default_dns_probe_host() {
        let config = load_config(&[]);
        let mut provider = Provider::new(&config).unwrap();

        let DiagnosticsFeatureConfig { dns_probe_host } = provider.provide();

        assert_eq!(&*dns_probe_host, "api.telegram.org");
    }
}
