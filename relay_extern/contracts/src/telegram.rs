use std::future::Future;

use relay_models::telegram::{TelegramChatId, TelegramParseMode};
use thiserror::Error;

/// Client for the Telegram Bot API.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TelegramApiService: Send + Sync + 'static {
    /// Send a text message to a chat.
    fn send_message(
        &self,
        message: TelegramMessage,
    ) -> impl Future<Output = Result<(), TelegramSendMessageError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelegramMessage {
    pub chat_id: TelegramChatId,
    pub text: String,
    pub parse_mode: Option<TelegramParseMode>,
    /// Deliver the message silently, i.e. without a notification sound.
    pub disable_notification: bool,
}

#[derive(Debug, Error)]
pub enum TelegramSendMessageError {
    #[error("Telegram bot token is not configured")]
    NotConfigured,
    /// The Bot API rejected the request.
    #[error("{description} (error code {code})")]
    Api { code: u16, description: String },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockTelegramApiService {
    pub fn with_send_message(
        mut self,
        message: TelegramMessage,
        result: Result<(), TelegramSendMessageError>,
    ) -> Self {
        self.expect_send_message()
            .once()
            .with(mockall::predicate::eq(message))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
