use nutype::nutype;
use serde::{Deserialize, Serialize};

/// Unique identifier of a Telegram chat, either numeric (`-1001234567890`) or
/// the username of a public channel (`@channelusername`).
#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, Hash, TryFrom, Deref, Display, Serialize, Deserialize)
)]
pub struct TelegramChatId(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TelegramParseMode {
    Markdown,
    MarkdownV2,
    #[serde(rename = "HTML")]
    Html,
}
