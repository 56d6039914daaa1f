use std::fmt;

use crate::{contact::ContactMessage, time::UtcTimestamp};

/// The text that is relayed to the messaging service for a contact message.
///
/// Rendered using Telegram's legacy Markdown; the message body is embedded
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification(String);

impl Notification {
    pub fn render(message: &ContactMessage, received_at: UtcTimestamp) -> Self {
        let name = &*message.author.name;
        let email = &*message.author.email;
        let content = &*message.content;

        Self(format!(
            "*New Message*\n\
             _Received on: {received_at}_\n\
             ---\n\
             *Sender Details:*\n\
             - *Name:* {name}\n\
             - *Email:* {email}\n\
             ---\n\
             *Message:*\n\
             {content}"
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
