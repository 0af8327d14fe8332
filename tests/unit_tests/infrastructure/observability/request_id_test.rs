use axum::Router;
use axum::body::Body;
use axum::extract::Extension;
use axum::http::Request;
use axum::middleware;
use axum::routing::get;
use http_body_util::BodyExt;
use tower::ServiceExt;

use tolka::infrastructure::observability::{REQUEST_ID_HEADER, RequestId, request_id_middleware};

fn echo_app() -> Router {
    Router::new()
        .route(
            "/echo",
            get(|Extension(RequestId(id)): Extension<RequestId>| async move { id }),
        )
        .layer(middleware::from_fn(request_id_middleware))
}

#[tokio::test]
async fn given_no_request_id_when_handling_then_generates_one_and_exposes_it_to_handlers() {
    let response = echo_app()
        .oneshot(Request::builder().uri("/echo").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let header = response.headers()[REQUEST_ID_HEADER]
        .to_str()
        .unwrap()
        .to_string();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    assert_eq!(header.len(), 36);
    assert_eq!(body, header.as_bytes());
}

#[tokio::test]
async fn given_empty_request_id_header_when_handling_then_generates_a_fresh_one() {
    let response = echo_app()
        .oneshot(
            Request::builder()
                .uri("/echo")
                .header(REQUEST_ID_HEADER, "")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(!response.headers()[REQUEST_ID_HEADER].is_empty());
}

#[tokio::test]
async fn given_caller_request_id_when_handling_then_it_is_propagated() {
    let response = echo_app()
        .oneshot(
            Request::builder()
                .uri("/echo")
                .header(REQUEST_ID_HEADER, "upload-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()[REQUEST_ID_HEADER], "upload-42");
}

#[tokio::test]
async fn given_oversized_request_id_when_handling_then_it_is_replaced() {
    let oversized = "x".repeat(300);
    let response = echo_app()
        .oneshot(
            Request::builder()
                .uri("/echo")
                .header(REQUEST_ID_HEADER, oversized.as_str())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()[REQUEST_ID_HEADER].len(), 36);
}
