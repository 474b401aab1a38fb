mod common;

use std::time::Duration;

use axum::http::StatusCode;
use serde_json::json;
use wiremock::{
    matchers::{body_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

use common::{TestApp, UNREACHABLE_BASE};

/// Expects exactly one notification with `payload` on each sibling endpoint.
async fn expect_notifications(server: &MockServer, payload: serde_json::Value) {
    for endpoint in ["/api/watson", "/api/hedera"] {
        Mock::given(method("POST"))
            .and(path(endpoint))
            .and(body_json(payload.clone()))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(server)
            .await;
    }
}

#[tokio::test]
async fn local_scoring_notifies_both_integrations() {
    let notify = MockServer::start().await;
    expect_notifications(&notify, json!({"name": "John", "risk": "High", "score": 100})).await;
    let app = TestApp::with_config(TestApp::config(None, &notify.uri()));

    let response = app
        .post_json(
            "/api/predict",
            &json!({"name": "John", "work_hours": 48, "stress": 8, "email": "john@company.com"}),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"risk": "High", "score": 100}));
}

#[tokio::test]
async fn local_scoring_applies_defaults_and_omits_missing_name() {
    let notify = MockServer::start().await;
    expect_notifications(&notify, json!({"risk": "Medium", "score": 50})).await;
    let app = TestApp::with_config(TestApp::config(None, &notify.uri()));

    let response = app
        .post_json("/api/predict", &json!({"work_hours": "lots", "stress": null}))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"risk": "Medium", "score": 50}));
}

#[tokio::test]
async fn half_point_score_rounds_up() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/predict", &json!({"work_hours": 38, "stress": 3}))
        .await;

    assert_eq!(response.body, json!({"risk": "Medium", "score": 63}));
}

#[tokio::test]
async fn non_object_body_scores_with_defaults() {
    let app = TestApp::new();

    let response = app.post_json("/api/predict", &json!([48, 8])).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"risk": "Medium", "score": 50}));
}

#[tokio::test]
async fn failing_notifications_do_not_affect_response() {
    let notify = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .expect(2)
        .mount(&notify)
        .await;
    let app = TestApp::with_config(TestApp::config(None, &notify.uri()));

    let response = app
        .post_json("/api/predict", &json!({"name": "Jane", "work_hours": 42, "stress": 5}))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"risk": "High", "score": 78}));
}

#[tokio::test]
async fn backend_reply_is_relayed_verbatim() {
    let backend = MockServer::start().await;
    let request = json!({"name": "Bob", "work_hours": 38, "stress": 3, "team": "Sales"});
    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(body_json(request.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "risk": "Low",
            "score": 21,
            "model": "burnout-v2",
            "confidence": 0.91
        })))
        .expect(1)
        .mount(&backend)
        .await;

    let notify = MockServer::start().await;
    expect_notifications(&notify, json!({"name": "Bob", "risk": "Low", "score": 21})).await;

    let app = TestApp::with_config(TestApp::config(
        Some(format!("{}/predict", backend.uri())),
        &notify.uri(),
    ));

    let response = app.post_json("/api/predict", &request).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({"risk": "Low", "score": 21, "model": "burnout-v2", "confidence": 0.91})
    );
}

#[tokio::test]
async fn backend_error_status_yields_fallback() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "model crashed"})))
        .mount(&backend)
        .await;

    let notify = MockServer::start().await;
    expect_notifications(&notify, json!({"name": "Bob", "risk": "Unknown", "score": 0})).await;

    let app = TestApp::with_config(TestApp::config(Some(backend.uri()), &notify.uri()));

    let response = app.post_json("/api/predict", &json!({"name": "Bob"})).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({"risk": "Unknown", "score": 0, "error": "AI backend error"})
    );
}

#[tokio::test]
async fn backend_non_json_reply_yields_fallback() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>busy</html>"))
        .mount(&backend)
        .await;

    let app = TestApp::with_config(TestApp::config(Some(backend.uri()), UNREACHABLE_BASE));

    let response = app
        .post_json("/api/predict", &json!({"work_hours": 60, "stress": 9}))
        .await;

    assert_eq!(
        response.body,
        json!({"risk": "Unknown", "score": 0, "error": "AI backend error"})
    );
}

#[tokio::test]
async fn slow_backend_times_out_to_fallback() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"risk": "High", "score": 90}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&backend)
        .await;

    let app = TestApp::with_config(TestApp::config(Some(backend.uri()), UNREACHABLE_BASE));

    let response = app.post_json("/api/predict", &json!({"name": "Slow"})).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({"risk": "Unknown", "score": 0, "error": "AI backend error"})
    );
}

#[tokio::test]
async fn unreachable_backend_yields_fallback() {
    let app = TestApp::with_config(TestApp::config(
        Some(format!("{}/predict", UNREACHABLE_BASE)),
        UNREACHABLE_BASE,
    ));

    let response = app.post_json("/api/predict", &json!({})).await;

    assert_eq!(
        response.body,
        json!({"risk": "Unknown", "score": 0, "error": "AI backend error"})
    );
}

#[tokio::test]
async fn malformed_body_skips_notifications() {
    let notify = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&notify)
        .await;
    let app = TestApp::with_config(TestApp::config(None, &notify.uri()));

    let response = app
        .request_raw(axum::http::Method::POST, "/api/predict", Some("nope"))
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, json!({"error": "Failed to process prediction"}));
}
