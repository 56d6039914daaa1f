use http_body_util::BodyExt;
use relay::environment::{types::RestServer, Provider};
use relay_config::Config;
use relay_di::Provides;
use relay_testing::telegram::{TelegramTestConfig, TelegramTestServer, DEFAULT_TOKEN};
use serde_json::{json, Value};
use tower::ServiceExt;

const CHAT_ID: &str = "-1001234567890";

fn config(server: &TelegramTestServer, chat_id: &str) -> Config {
    let telegram = format!(
        "[telegram]\nendpoint_override = \"{}\"\nbot_token = \"{DEFAULT_TOKEN}\"\nchat_id = \"{chat_id}\"",
        server.url
    );
    relay_config::load_with_override(&[relay_config::DEFAULT_CONFIG_PATH], &[&telegram]).unwrap()
}

async fn post(config: &Config, body: Value) -> (u16, Value) {
    let mut provider = Provider::new(config).unwrap();
    let server: RestServer = provider.provide();

    let request = send_message_request(body);
    let response = server.router().oneshot(request).await.unwrap();
    let status = response.status().as_u16();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

fn send_message_request(body: Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post("/send-message")
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string().into())
        .unwrap()
}

#[tokio::test]
async fn relays_message_to_telegram() {
    // Arrange
    let telegram = TelegramTestServer::start(TelegramTestConfig {
        chat_id: Some(CHAT_ID.into()),
        ..Default::default()
    })
    .await
    .unwrap();
    let config = config(&telegram, CHAT_ID);

    // Act
    let (status, body) = post(
        &config,
        json!({
            "name": "Max Mustermann",
            "email": "max.mustermann@example.de",
            "message": "Hello World!",
        }),
    )
    .await;

    // Assert
    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({"success": true, "message": "Message sent to Telegram"})
    );

    let messages = telegram.messages().await;
    assert_eq!(messages.len(), 1);
    let message = &messages[0];
    assert_eq!(message.chat_id, CHAT_ID);
    assert_eq!(message.parse_mode.as_deref(), Some("Markdown"));
    assert!(message.disable_notification);
    assert!(message.text.starts_with("*New Message*\n_Received on: "));
    assert!(message.text.ends_with(
        " UTC_\n---\n*Sender Details:*\n- *Name:* Max Mustermann\n\
         - *Email:* max.mustermann@example.de\n---\n*Message:*\nHello World!"
    ));
}

#[tokio::test]
async fn invalid_submission_is_not_relayed() {
    // Arrange
    let telegram = TelegramTestServer::start(Default::default()).await.unwrap();
    let config = config(&telegram, CHAT_ID);

    // Act
    let (status, body) = post(
        &config,
        json!({
            "name": "Max Mustermann",
            "email": "max.mustermann",
            "message": "Hello World!",
        }),
    )
    .await;

    // Assert
    assert_eq!(status, 400);
    assert_eq!(body, json!({"detail": "Invalid email format"}));
    assert!(telegram.messages().await.is_empty());
}

#[tokio::test]
async fn unknown_chat_is_a_delivery_error() {
    // Arrange
    let telegram = TelegramTestServer::start(TelegramTestConfig {
        chat_id: Some(CHAT_ID.into()),
        ..Default::default()
    })
    .await
    .unwrap();
    let config = config(&telegram, "-42");

    // Act
    let (status, body) = post(
        &config,
        json!({
            "name": "Max Mustermann",
            "email": "max.mustermann@example.de",
            "message": "Hello World!",
        }),
    )
    .await;

    // Assert
    assert_eq!(status, 500);
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.starts_with("Failed to send message: "));
    assert!(detail.contains("chat not found"));
}
