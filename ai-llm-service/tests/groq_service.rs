use ai_llm_service::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{AiLlmError, ProviderError, ProviderErrorKind},
    prompt::{ChatMessage, PromptTemplate},
    provider::ChatProvider,
    services::groq_service::GroqService,
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, header, method, path},
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

fn question(q: &str) -> Vec<ChatMessage> {
    PromptTemplate::answer_default()
        .format_messages(&[("question", q)])
        .unwrap()
}

#[tokio::test]
async fn returns_first_choice_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer gsk_test"))
        .and(body_partial_json(json!({
            "model": "mixtral-8x7b-32768",
            "stream": false,
            "messages": [
                {"role": "system", "content": "You are a helpful AI assistant. Please provide clear and concise responses."},
                {"role": "user", "content": "What is 2+2?"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-1",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": "4"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let svc = GroqService::new(groq_cfg(&server.uri())).unwrap();
    let answer = svc.complete(&question("What is 2+2?")).await.unwrap();

    assert_eq!(answer, "4");
    assert_eq!(svc.model(), "mixtral-8x7b-32768");
}

#[tokio::test]
async fn upstream_error_message_is_kept_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {"message": "rate limit exceeded", "type": "tokens"}
        })))
        .mount(&server)
        .await;

    let svc = GroqService::new(groq_cfg(&server.uri())).unwrap();
    let err = svc.complete(&question("q")).await.unwrap_err();

    assert_eq!(err.to_string(), "rate limit exceeded");
}

#[tokio::test]
async fn non_json_error_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("service unavailable"))
        .mount(&server)
        .await;

    let svc = GroqService::new(groq_cfg(&server.uri())).unwrap();
    let err = svc.complete(&question("q")).await.unwrap_err();

    match err {
        AiLlmError::Provider(ProviderError {
            kind: ProviderErrorKind::HttpStatus(http),
        }) => {
            assert_eq!(http.status.as_u16(), 503);
            assert_eq!(http.snippet, "service unavailable");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn missing_content_is_empty_choices() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let svc = GroqService::new(groq_cfg(&server.uri())).unwrap();
    let err = svc.complete(&question("q")).await.unwrap_err();

    assert!(matches!(
        err,
        AiLlmError::Provider(ProviderError {
            kind: ProviderErrorKind::EmptyChoices,
        })
    ));
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let svc = GroqService::new(groq_cfg(&server.uri())).unwrap();
    let err = svc.complete(&question("q")).await.unwrap_err();

    assert!(err.to_string().starts_with("decode error:"));
}

#[tokio::test]
async fn unreachable_endpoint_is_transport_error() {
    let svc = GroqService::new(groq_cfg("http://127.0.0.1:1")).unwrap();
    let err = svc.complete(&question("q")).await.unwrap_err();

    assert!(matches!(err, AiLlmError::HttpTransport(_)));
}

#[tokio::test]
async fn max_tokens_is_forwarded_when_set() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(json!({"max_tokens": 64})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"content": "ok"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut cfg = groq_cfg(&server.uri());
    cfg.max_tokens = Some(64);
    let svc = GroqService::new(cfg).unwrap();

    assert_eq!(svc.complete(&question("q")).await.unwrap(), "ok");
}
