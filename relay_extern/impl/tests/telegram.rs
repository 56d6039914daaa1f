use std::time::Duration;

use relay_di::{provider, Provides};
use relay_extern_contracts::telegram::{
    TelegramApiService, TelegramMessage, TelegramSendMessageError,
};
use relay_extern_impl::telegram::{TelegramApiServiceConfig, TelegramApiServiceImpl};
use relay_models::telegram::{TelegramChatId, TelegramParseMode};
use relay_testing::telegram::{
    ReceivedMessage, TelegramTestConfig, TelegramTestServer, DEFAULT_TOKEN,
};
use relay_utils::assert_matches;
use url::Url;

#[tokio::test]
async fn send_message() {
    let server = TelegramTestServer::start(Default::default()).await.unwrap();
    let sut = make_sut(server.url.clone(), Some(DEFAULT_TOKEN), Duration::from_secs(5));

    sut.send_message(message("-1001234567890")).await.unwrap();

    assert_eq!(
        server.messages().await,
        [ReceivedMessage {
            chat_id: "-1001234567890".into(),
            text: "*Hello* _World_".into(),
            parse_mode: Some("Markdown".into()),
            disable_notification: true,
        }]
    );
}

#[tokio::test]
async fn invalid_token() {
    let server = TelegramTestServer::start(Default::default()).await.unwrap();
    let sut = make_sut(server.url.clone(), Some("1:wrong"), Duration::from_secs(5));

    let result = sut.send_message(message("42")).await;

    assert_matches!(
        result,
        Err(TelegramSendMessageError::Api { code: 401, description }) if description == "Unauthorized"
    );
    assert!(server.messages().await.is_empty());
}

#[tokio::test]
async fn chat_not_found() {
    let server = TelegramTestServer::start(TelegramTestConfig {
        chat_id: Some("42".into()),
        ..Default::default()
    })
    .await
    .unwrap();
    let sut = make_sut(server.url.clone(), Some(DEFAULT_TOKEN), Duration::from_secs(5));

    let result = sut.send_message(message("43")).await;

    assert_matches!(
        result,
        Err(TelegramSendMessageError::Api { code: 400, description }) if description.contains("chat not found")
    );
}

#[tokio::test]
async fn missing_token() {
    let server = TelegramTestServer::start(Default::default()).await.unwrap();
    let sut = make_sut(server.url.clone(), None, Duration::from_secs(5));

    let result = sut.send_message(message("42")).await;

    assert_matches!(result, Err(TelegramSendMessageError::NotConfigured));
}

#[tokio::test]
async fn timeout() {
    let server = TelegramTestServer::start(TelegramTestConfig {
        delay: Duration::from_secs(10),
        ..Default::default()
    })
    .await
    .unwrap();
    let sut = make_sut(server.url.clone(), Some(DEFAULT_TOKEN), Duration::from_millis(200));

    let result = tokio::time::timeout(Duration::from_secs(5), sut.send_message(message("42")))
        .await
        .expect("client timeout did not fire");

    assert_matches!(result, Err(TelegramSendMessageError::Other(_)));
}

#[tokio::test]
async fn unreachable_does_not_leak_token() {
    let url = relay_testing::unreachable_url().await.unwrap();
    let sut = make_sut(url, Some(DEFAULT_TOKEN), Duration::from_secs(5));

    let result = sut.send_message(message("42")).await;

    match result {
        Err(TelegramSendMessageError::Other(err)) => {
            assert!(!format!("{err:#}").contains(DEFAULT_TOKEN));
        }
        other => panic!("expected transport error, got {other:?}"),
    }
}

fn message(chat_id: &str) -> TelegramMessage {
    TelegramMessage {
        chat_id: TelegramChatId::try_new(chat_id).unwrap(),
        text: "*Hello* _World_".into(),
        parse_mode: Some(TelegramParseMode::Markdown),
        disable_notification: true,
    }
}

fn make_sut(endpoint: Url, token: Option<&str>, timeout: Duration) -> TelegramApiServiceImpl {
    provider! {
        Provider { telegram_api_service_config: TelegramApiServiceConfig, }
    }

    let mut provider = Provider {
        _cache: Default::default(),
        telegram_api_service_config: TelegramApiServiceConfig::new(
            Some(endpoint),
            token.map(Into::into),
            timeout,
        )
        .unwrap(),
    };

    provider.provide()
}
