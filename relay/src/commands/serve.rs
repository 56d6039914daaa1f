use relay_config::Config;
use relay_di::Provides;
use tracing::warn;

use crate::environment::{types::RestServer, Provider};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    if config.telegram.bot_token.is_none() {
        warn!("No telegram bot token configured, contact messages cannot be delivered");
    }
    if config.telegram.chat_id.is_none() {
        warn!("No telegram chat id configured, contact messages cannot be delivered");
    }

    let mut provider = Provider::new(&config)?;
    let server: RestServer = provider.provide();
    server.serve(config.http.host, config.http.port).await
}
