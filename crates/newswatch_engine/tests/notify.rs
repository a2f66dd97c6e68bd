use newswatch_engine::{Notifier, NotifyError, WebhookNotifier};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn posts_message_as_content_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/hook"))
        .and(body_json(serde_json::json!({ "content": "hello" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = WebhookNotifier::new(Some(format!("{}/hook", server.uri())));
    notifier.notify("hello").await.expect("delivery ok");
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/hook"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let notifier = WebhookNotifier::new(Some(format!("{}/hook", server.uri())));
    let err = notifier.notify("hello").await.unwrap_err();
    assert!(matches!(err, NotifyError::HttpStatus(500)));
}

#[tokio::test]
async fn missing_webhook_url_is_an_error() {
    let notifier = WebhookNotifier::new(None);
    let err = notifier.notify("hello").await.unwrap_err();
    assert!(matches!(err, NotifyError::NotConfigured));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_network_error() {
    // Port 9 (discard) refuses connections on any sane test host.
    let notifier = WebhookNotifier::new(Some("http://127.0.0.1:9/hook".to_string()));
    let err = notifier.notify("hello").await.unwrap_err();
    assert!(matches!(err, NotifyError::Network(_)));
}
