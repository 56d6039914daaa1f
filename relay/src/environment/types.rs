use relay_core_contact_impl::ContactFeatureServiceImpl;
use relay_core_diagnostics_impl::DiagnosticsFeatureServiceImpl;
use relay_core_health_impl::HealthFeatureServiceImpl;
use relay_extern_impl::{
    dns::DnsApiServiceImpl, ip_echo::IpEchoApiServiceImpl, telegram::TelegramApiServiceImpl,
};
use relay_shared_impl::time::TimeServiceImpl;

// API
pub type RestServer = relay_api_rest::RestServer<HealthFeature, ContactFeature, DiagnosticsFeature>;

// Extern
pub type TelegramApi = TelegramApiServiceImpl;
pub type DnsApi = DnsApiServiceImpl;
pub type IpEchoApi = IpEchoApiServiceImpl;

// Shared
pub type Time = TimeServiceImpl;

// Core
pub type HealthFeature = HealthFeatureServiceImpl<Time>;
pub type ContactFeature = ContactFeatureServiceImpl<Time, TelegramApi>;
pub type DiagnosticsFeature = DiagnosticsFeatureServiceImpl<DnsApi, IpEchoApi>;
