use std::sync::Arc;

use relay_core_contact_contracts::{ContactFeatureService, ContactSendMessageError};
use relay_di::Build;
use relay_extern_contracts::telegram::{TelegramApiService, TelegramMessage};
use relay_models::{
    contact::{ContactMessage, ContactSubmission},
    notification::Notification,
    telegram::{TelegramChatId, TelegramParseMode},
};
use relay_shared_contracts::time::TimeService;
use tracing::{debug, error, info};

#[derive(Debug, Clone, Build)]
pub struct ContactFeatureServiceImpl<Time, Telegram> {
    time: Time,
    telegram: Telegram,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// Chat that receives the contact messages.
    pub chat_id: Option<Arc<TelegramChatId>>,
}

impl<Time, Telegram> ContactFeatureService for ContactFeatureServiceImpl<Time, Telegram>
where
    Time: TimeService,
    Telegram: TelegramApiService,
{
    async fn send_message(&self, submission: ContactSubmission) -> Result<(), ContactSendMessageError> {
        let message = ContactMessage::try_from(submission)?;

        let Some(chat_id) = self.config.chat_id.as_deref().cloned() else {
            error!("Cannot relay contact message: no telegram chat id configured");
            return Err(ContactSendMessageError::ChatNotConfigured);
        };

        let notification = Notification::render(&message, self.time.now().into());

        debug!(%chat_id, "Relaying contact message");
        self.telegram
            .send_message(TelegramMessage {
                chat_id,
                text: notification.into_string(),
                parse_mode: Some(TelegramParseMode::Markdown),
                disable_notification: true,
            })
            .await
            .inspect_err(|err| error!("Failed to relay contact message: {err}"))?;

        info!("Contact message relayed");

        Ok(())
    }
}
