use std::time::{Duration, Instant};

use ai_llm_service::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    health_service::HealthService,
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

fn groq_cfg(endpoint: &str) -> LlmModelConfig {
    LlmModelConfig {
        provider: LlmProvider::Groq,
        model: "mixtral-8x7b-32768".into(),
        endpoint: endpoint.into(),
        api_key: Some("gsk_test".into()),
        max_tokens: None,
        temperature: Some(0.7),
        top_p: None,
        timeout_secs: Some(5),
    }
}

#[tokio::test]
async fn listed_model_is_healthy() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/models"))
        .and(header("authorization", "Bearer gsk_test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "llama3-8b-8192"}, {"id": "mixtral-8x7b-32768"}]
        })))
        .mount(&server)
        .await;

    let health = HealthService::new(Some(5)).unwrap();
    let status = health.check(&groq_cfg(&server.uri())).await;

    assert!(status.ok, "{}", status.message);
    assert_eq!(status.provider, "Groq");
    assert_eq!(status.model.as_deref(), Some("mixtral-8x7b-32768"));
}

#[tokio::test]
async fn unlisted_model_is_not_ok() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/models"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": [{"id": "other"}]})),
        )
        .mount(&server)
        .await;

    let health = HealthService::new(Some(5)).unwrap();
    let status = health.check(&groq_cfg(&server.uri())).await;

    assert!(!status.ok);
    assert!(status.message.contains("model not found"));
}

#[tokio::test]
async fn auth_failure_becomes_failed_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/models"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let health = HealthService::new(Some(5)).unwrap();
    let status = health.check(&groq_cfg(&server.uri())).await;

    assert!(!status.ok);
    assert!(status.message.contains("401"));
    assert!(status.message.contains("invalid api key"));
}

#[tokio::test]
async fn unreachable_endpoint_never_panics() {
    let health = HealthService::new(Some(1)).unwrap();
    let status = health.check(&groq_cfg("http://127.0.0.1:1")).await;

    assert!(!status.ok);
    assert!(!status.message.is_empty());
}

#[tokio::test]
async fn slow_models_listing_is_bounded_by_health_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/models"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": [{"id": "mixtral-8x7b-32768"}]}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    // Completion timeout is long; the health check must not inherit it.
    let mut cfg = groq_cfg(&server.uri());
    cfg.timeout_secs = Some(60);

    let health = HealthService::new(Some(1)).unwrap();
    let started = Instant::now();
    let status = health.check(&cfg).await;

    assert!(!status.ok);
    assert!(started.elapsed() < Duration::from_secs(4));
}
