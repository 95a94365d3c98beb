use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use response_scorer::api::routes::create_router;
use response_scorer::config::Config;
use response_scorer::AppState;

fn test_state(max_text_chars: usize, max_keywords: usize) -> AppState {
    AppState {
        config: Arc::new(Config {
            server_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            max_text_chars,
            max_keywords,
        }),
    }
}

fn score_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/score")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn scores_a_response_through_the_router() {
    let app = create_router(test_state(100_000, 100));

    let response = app
        .oneshot(score_request(json!({
            "text": "We see strong growth potential",
            "keywords": ["growth", "market share"],
            "response_time_ms": 2000,
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["meta"]["status"], "success");
    assert_eq!(body["data"]["sentiment_score"], 100);
    assert_eq!(body["data"]["performance_score"], 100);
    assert_eq!(body["data"]["keyword_relevance"], json!(["growth"]));
    assert_eq!(body["data"]["text_length"], 30);
}

#[tokio::test]
async fn missing_keywords_and_timing_default_gracefully() {
    let app = create_router(test_state(100_000, 100));

    let response = app
        .oneshot(score_request(json!({ "text": "" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["data"]["sentiment_score"], 75);
    assert_eq!(body["data"]["keyword_relevance"], json!([]));
    // neutral 75 plus the fast-response bonus for the default 0ms
    assert_eq!(body["data"]["performance_score"], 85);
}

#[tokio::test]
async fn oversized_text_is_rejected() {
    let app = create_router(test_state(10, 100));

    let response = app
        .oneshot(score_request(json!({
            "text": "this text is longer than ten characters",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;

    assert_eq!(body["meta"]["status"], "error");
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn too_many_keywords_are_rejected() {
    let app = create_router(test_state(100_000, 1));

    let response = app
        .oneshot(score_request(json!({
            "text": "short",
            "keywords": ["one", "two"],
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
