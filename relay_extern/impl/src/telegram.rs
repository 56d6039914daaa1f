use std::{sync::Arc, time::Duration};

use anyhow::Context;
use relay_di::Build;
use relay_extern_contracts::telegram::{
    TelegramApiService, TelegramMessage, TelegramSendMessageError,
};
use relay_models::{telegram::TelegramParseMode, Sensitive};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::http::HttpClient;

/// https://core.telegram.org/bots/api#making-requests
pub const API_ENDPOINT: &str = "https://api.telegram.org/";

#[derive(Debug, Clone, Build)]
pub struct TelegramApiServiceImpl {
    config: TelegramApiServiceConfig,
    #[state]
    http: HttpClient,
}

#[derive(Debug, Clone)]
pub struct TelegramApiServiceConfig {
    endpoint: Arc<Url>,
    bot_token: Option<Sensitive<Arc<str>>>,
    timeout: Duration,
}

impl TelegramApiServiceConfig {
    pub fn new(
        endpoint_override: Option<Url>,
        bot_token: Option<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let mut endpoint = match endpoint_override {
            Some(endpoint) => endpoint,
            None => API_ENDPOINT
                .parse()
                .context("Failed to parse telegram api endpoint")?,
        };

        // keep the last path segment of the override when joining `bot<token>/sendMessage`
        if !endpoint.path().ends_with('/') {
            let path = format!("{}/", endpoint.path());
            endpoint.set_path(&path);
        }

        Ok(Self {
            endpoint: endpoint.into(),
            bot_token: bot_token
                .filter(|token| !token.trim().is_empty())
                .map(|token| Sensitive(token.trim().into())),
            timeout,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl TelegramApiService for TelegramApiServiceImpl {
    async fn send_message(&self, message: TelegramMessage) -> Result<(), TelegramSendMessageError> {
        let token = self
            .config
            .bot_token
            .as_ref()
            .ok_or(TelegramSendMessageError::NotConfigured)?;

        // the leading `./` keeps `bot<id>:<secret>` from being parsed as a url scheme
        let url = self
            .config
            .endpoint
            .join(&format!("./bot{}/sendMessage", &***token))
            .context("Failed to build telegram sendMessage URL")?;

        debug!(chat_id = %message.chat_id, "sending telegram message");

        let response = self
            .http
            .post(url)
            .timeout(self.config.timeout)
            .json(&SendMessageRequest {
                chat_id: &message.chat_id,
                text: &message.text,
                parse_mode: message.parse_mode,
                disable_notification: message.disable_notification,
            })
            .send()
            .await
            // the url contains the bot token
            .map_err(reqwest::Error::without_url)
            .context("Failed to send telegram sendMessage request")?;

        let status = response.status();
        let body = response
            .json::<ApiResponse>()
            .await
            .map_err(reqwest::Error::without_url)
            .with_context(|| {
                format!("Failed to deserialize telegram sendMessage response (status {status})")
            })?;

        if status.is_success() && body.ok {
            return Ok(());
        }

        Err(TelegramSendMessageError::Api {
            code: body.error_code.unwrap_or(status.as_u16()),
            description: body
                .description
                .or_else(|| status.canonical_reason().map(Into::into))
                .unwrap_or_else(|| "Unknown error".into()),
        })
    }
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parse_mode: Option<TelegramParseMode>,
    disable_notification: bool,
}

/// https://core.telegram.org/bots/api#making-requests
#[derive(Deserialize)]
struct ApiResponse {
    ok: bool,
    description: Option<String>,
    error_code: Option<u16>,
}
