use anyhow::Context;
use clap::Subcommand;
use relay_config::Config;
use relay_core_contact_impl::ContactFeatureConfig;
use relay_di::Provides;
use relay_extern_contracts::telegram::{TelegramApiService, TelegramMessage};
use tracing::info;

use crate::environment::{types::TelegramApi, Provider};

#[derive(Debug, Subcommand)]
pub enum TelegramCommand {
    /// Send a test message to the configured chat
    Test {
        /// Text of the test message
        #[arg(long, default_value = "Telegram delivery seems to be working!")]
        text: String,
    },
}

impl TelegramCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            TelegramCommand::Test { text } => test(config, text).await,
        }
    }
}

async fn test(config: Config, text: String) -> anyhow::Result<()> {
    let mut provider = Provider::new(&config)?;
    let telegram: TelegramApi = provider.provide();
    let ContactFeatureConfig { chat_id } = provider.provide();

    let chat_id = chat_id.context("No telegram chat id configured")?;

    telegram
        .send_message(TelegramMessage {
            chat_id: (*chat_id).clone(),
            text,
            parse_mode: None,
            disable_notification: false,
        })
        .await
        .context("Failed to send telegram message")?;

    info!("Sent test message to chat {chat_id}");

    Ok(())
}
