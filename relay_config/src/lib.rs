use std::{net::IpAddr, path::Path};

use anyhow::Context;
use config::{ConfigBuilder, File, FileFormat};
use relay_models::Sensitive;
use serde::Deserialize;
use url::Url;

pub use duration::Duration;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Colon separated list of config files. Later files take precedence.
pub const CONFIG_PATH_ENV: &str = "RELAY_CONFIG";

pub const TELEGRAM_BOT_TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";
pub const TELEGRAM_CHAT_ID_ENV: &str = "TELEGRAM_CHAT_ID";

/// Loads the configuration from the files listed in `RELAY_CONFIG` (or the
/// default config file) and applies the telegram environment overrides.
pub fn load() -> anyhow::Result<Config> {
    let paths = match std::env::var(CONFIG_PATH_ENV) {
        Ok(paths) => paths.split(':').map(Into::into).collect(),
        Err(_) => vec![DEFAULT_CONFIG_PATH.to_owned()],
    };

    load_with(&paths, &[], &EnvOverrides::from_env())
}

/// Loads the configuration from `paths`, followed by additional TOML snippets
/// (e.g. `telegram.chat_id = "42"`). Environment variables are ignored.
pub fn load_with_override(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
) -> anyhow::Result<Config> {
    load_with(paths, overrides, &EnvOverrides::default())
}

fn load_with(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
    env: &EnvOverrides,
) -> anyhow::Result<Config> {
    let builder = paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?;

    let builder = overrides.iter().fold(builder, |builder, &snippet| {
        builder.add_source(File::from_str(snippet, FileFormat::Toml))
    });

    env.apply(builder)?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Default)]
struct EnvOverrides {
    telegram_bot_token: Option<String>,
    telegram_chat_id: Option<String>,
}

impl EnvOverrides {
    fn from_env() -> Self {
        let var = |key: &str| {
            std::env::var(key)
                .ok()
                .filter(|value| !value.trim().is_empty())
        };
        Self {
            telegram_bot_token: var(TELEGRAM_BOT_TOKEN_ENV),
            telegram_chat_id: var(TELEGRAM_CHAT_ID_ENV),
        }
    }

    fn apply(
        &self,
        builder: ConfigBuilder<config::builder::DefaultState>,
    ) -> anyhow::Result<ConfigBuilder<config::builder::DefaultState>> {
        builder
            .set_override_option("telegram.bot_token", self.telegram_bot_token.clone())?
            .set_override_option("telegram.chat_id", self.telegram_chat_id.clone())
            .map_err(Into::into)
    }
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    #[serde(default)]
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
    pub client_timeout: Duration,
}

#[derive(Debug, Default, Deserialize)]
pub struct TelegramConfig {
    pub bot_token: Option<Sensitive<String>>,
    pub chat_id: Option<String>,
    pub endpoint_override: Option<Url>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DiagnosticsConfig {
    pub ip_echo_endpoint_override: Option<Url>,
}
