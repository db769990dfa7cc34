use std::sync::Arc;

use axum::body::{Body, to_bytes};
use http::{Method, Request, StatusCode, header};
use tower::ServiceExt;

use pulse_api::config::PulseConfig;
use pulse_api::router::build_router;
use pulse_testing::env::required_env;

fn app() -> axum::Router {
    let config = PulseConfig::from_source(&required_env()).unwrap();
    build_router(Arc::new(config))
}

#[tokio::test]
async fn should_answer_unknown_path_with_json_404() {
    let resp = app()
        .oneshot(Request::get("/anything").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(resp.headers().contains_key("x-request-id"));
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["kind"], "NOT_FOUND");
    assert_eq!(json["message"], "not found");
}

#[tokio::test]
async fn should_allow_cors_preflight_from_any_origin() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/")
                .header(header::ORIGIN, "http://localhost:3000")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}
