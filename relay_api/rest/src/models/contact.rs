use relay_models::contact::ContactSubmission;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ApiContactMessage {
    /// Name of the sender
    pub name: String,
    /// Email address of the sender
    pub email: String,
    /// Content of the message
    pub message: String,
}

impl From<ApiContactMessage> for ContactSubmission {
    fn from(value: ApiContactMessage) -> Self {
        Self {
            name: value.name,
            email: value.email,
            message: value.message,
        }
    }
}
