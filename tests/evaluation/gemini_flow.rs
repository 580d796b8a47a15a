use logograde::config::Config;
use logograde::error::{LlmError, LogogradeError};
use logograde::evaluation::{Evaluator, Submission, open_store};
use serde_json::json;
use std::path::PathBuf;
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PNG: [u8; 12] = [
    0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D,
];
const ENDPOINT: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

struct Fixture {
    _tmp: TempDir,
    config: Config,
    image: PathBuf,
}

fn fixture(server: &MockServer) -> Fixture {
    let tmp = TempDir::new().unwrap();
    let image = tmp.path().join("logo.png");
    std::fs::write(&image, PNG).unwrap();

    let config = Config {
        base_dir: tmp.path().to_path_buf(),
        api_key: Some("test-key".into()),
        api_base_url: server.uri(),
        request_timeout_secs: 5,
        ..Config::default()
    };
    Fixture {
        _tmp: tmp,
        config,
        image,
    }
}

fn submission(image: PathBuf) -> Submission {
    Submission {
        student_name: "Ana Paz".into(),
        student_parallel: "4to B".into(),
        image_path: Some(image),
        context: "Un puma geometrizado".into(),
    }
}

fn answer(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }],
        "modelVersion": "gemini-2.5-flash"
    })
}

#[tokio::test]
async fn graded_answer_is_saved_to_the_data_dir() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(query_param("key", "test-key"))
        .and(body_partial_json(json!({
            "generationConfig": { "temperature": 0.4 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(answer(
            "## Análisis Visual\nBuen uso de la simetría.\n\nCALIFICACIÓN FINAL: 85/100",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let fx = fixture(&server);
    let evaluator = Evaluator::from_config(&fx.config).unwrap();

    let record = evaluator
        .evaluate(&submission(fx.image.clone()))
        .await
        .unwrap();

    assert_eq!(record.grade, "85/100");
    assert!(record.analysis_text.contains("simetría"));

    let reopened = open_store(&fx.config).list();
    assert_eq!(reopened, vec![record]);

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let parts = &body["contents"][0]["parts"];
    assert!(parts[0]["text"].as_str().unwrap().contains("Un puma geometrizado"));
    assert_eq!(parts[1]["inlineData"]["mimeType"], "image/png");
}

#[tokio::test]
async fn answer_without_grade_line_is_pending() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(answer("Falta la nota.")))
        .mount(&server)
        .await;

    let fx = fixture(&server);
    let record = Evaluator::from_config(&fx.config)
        .unwrap()
        .evaluate(&submission(fx.image.clone()))
        .await
        .unwrap();

    assert_eq!(record.grade, "Pendiente");
}

#[tokio::test]
async fn quota_error_leaves_store_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(
            ResponseTemplate::new(429).set_body_string("Resource exhausted for key=test-key"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let fx = fixture(&server);
    let err = Evaluator::from_config(&fx.config)
        .unwrap()
        .evaluate(&submission(fx.image.clone()))
        .await
        .unwrap_err();

    match err {
        LogogradeError::Llm(LlmError::Request { message, .. }) => {
            assert!(message.contains("429"));
            assert!(!message.contains("test-key"));
        }
        other => panic!("expected provider error, got {other:?}"),
    }
    assert!(open_store(&fx.config).list().is_empty());
}

#[tokio::test]
async fn missing_fields_never_reach_the_api() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(answer("CALIFICACIÓN FINAL: 90/100")))
        .expect(0)
        .mount(&server)
        .await;

    let fx = fixture(&server);
    let evaluator = Evaluator::from_config(&fx.config).unwrap();
    let incomplete = Submission {
        student_parallel: "  ".into(),
        ..submission(fx.image.clone())
    };

    let err = evaluator.evaluate(&incomplete).await.unwrap_err();

    assert!(matches!(err, LogogradeError::Validation(_)));
    assert!(open_store(&fx.config).list().is_empty());
}
