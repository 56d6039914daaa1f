//! A fake Telegram Bot API that implements the `sendMessage` method.

use std::{
    net::IpAddr,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::sync::Mutex;
use tracing::info;
use url::Url;

pub const DEFAULT_TOKEN: &str = "123456789:relay-testing-token";

#[derive(Debug, Clone)]
pub struct TelegramTestConfig {
    /// The only bot token that is accepted.
    pub token: String,
    /// If set, messages to any other chat fail with `chat not found`.
    pub chat_id: Option<String>,
    /// Artificial latency of every response.
    pub delay: Duration,
}

impl Default for TelegramTestConfig {
    fn default() -> Self {
        Self {
            token: DEFAULT_TOKEN.into(),
            chat_id: None,
            delay: Duration::ZERO,
        }
    }
}

/// A message received by the fake bot api.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceivedMessage {
    pub chat_id: String,
    pub text: String,
    pub parse_mode: Option<String>,
    pub disable_notification: bool,
}

pub struct TelegramTestServer {
    pub url: Url,
    state: Arc<StateInner>,
}

impl TelegramTestServer {
    /// Start the fake bot api on an ephemeral port.
    pub async fn start(config: TelegramTestConfig) -> anyhow::Result<Self> {
        let state = Arc::new(StateInner::new(config));
        let url = crate::spawn(router(Arc::clone(&state))).await?;
        Ok(Self { url, state })
    }

    /// All messages that were accepted so far, in order.
    pub async fn messages(&self) -> Vec<ReceivedMessage> {
        self.state.messages.lock().await.clone()
    }
}

pub async fn start_server(host: IpAddr, port: u16, config: TelegramTestConfig) -> anyhow::Result<()> {
    info!("Starting telegram testing server on {host}:{port}");
    info!("Bot api endpoint: http://{host}:{port}/");
    info!("Bot token: {:?}", config.token);
    if let Some(chat_id) = &config.chat_id {
        info!("Chat id: {chat_id:?}");
    }

    let router = router(Arc::new(StateInner::new(config)));
    crate::serve(router, host, port).await
}

fn router(state: Arc<StateInner>) -> Router<()> {
    Router::new()
        .route("/:bot/sendMessage", routing::post(send_message))
        .with_state(state)
}

struct StateInner {
    config: TelegramTestConfig,
    messages: Mutex<Vec<ReceivedMessage>>,
    next_message_id: AtomicU64,
}

impl StateInner {
    fn new(config: TelegramTestConfig) -> Self {
        Self {
            config,
            messages: Default::default(),
            next_message_id: AtomicU64::new(1),
        }
    }
}

#[derive(Deserialize)]
struct SendMessageRequest {
    chat_id: serde_json::Value,
    text: String,
    parse_mode: Option<String>,
    #[serde(default)]
    disable_notification: bool,
}

async fn send_message(
    State(state): State<Arc<StateInner>>,
    Path(bot): Path<String>,
    Json(request): Json<SendMessageRequest>,
) -> Response {
    if !state.config.delay.is_zero() {
        tokio::time::sleep(state.config.delay).await;
    }

    if bot.strip_prefix("bot") != Some(state.config.token.as_str()) {
        return api_error(StatusCode::UNAUTHORIZED, "Unauthorized");
    }

    let chat_id = match request.chat_id {
        serde_json::Value::String(chat_id) if !chat_id.is_empty() => chat_id,
        serde_json::Value::Number(chat_id) => chat_id.to_string(),
        _ => return api_error(StatusCode::BAD_REQUEST, "Bad Request: chat_id is empty"),
    };
    if state
        .config
        .chat_id
        .as_ref()
        .is_some_and(|expected| *expected != chat_id)
    {
        return api_error(StatusCode::BAD_REQUEST, "Bad Request: chat not found");
    }

    if request.text.trim().is_empty() {
        return api_error(StatusCode::BAD_REQUEST, "Bad Request: message text is empty");
    }

    if let Some(parse_mode) = &request.parse_mode {
        if !["Markdown", "MarkdownV2", "HTML"].contains(&parse_mode.as_str()) {
            return api_error(
                StatusCode::BAD_REQUEST,
                &format!("Bad Request: unsupported parse_mode {parse_mode:?}"),
            );
        }
    }

    let message_id = state.next_message_id.fetch_add(1, Ordering::Relaxed);
    let message = ReceivedMessage {
        chat_id,
        text: request.text,
        parse_mode: request.parse_mode,
        disable_notification: request.disable_notification,
    };
    info!(message_id, chat_id = %message.chat_id, "received message");

    let result = json!({
        "message_id": message_id,
        "chat": { "id": message.chat_id },
        "text": message.text,
    });
    state.messages.lock().await.push(message);

    Json(json!({ "ok": true, "result": result })).into_response()
}

fn api_error(status: StatusCode, description: &str) -> Response {
    let body = json!({
        "ok": false,
        "error_code": status.as_u16(),
        "description": description,
    });
    (status, Json(body)).into_response()
}
