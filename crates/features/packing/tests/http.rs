#![cfg(feature = "server")]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use packwise_kernel::domain::config::{ApiConfig, PackingConfig};
use packwise_kernel::server::ApiState;
use serde_json::{Value, json};
use tower::ServiceExt;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn app() -> Result<Router, Box<dyn std::error::Error>> {
    let slice = packwise_packing::init(&PackingConfig { max_order: 1_000_000 })?;
    let state = ApiState::builder().config(ApiConfig::default()).register_slice(slice).build()?;
    let (router, _api) = packwise_packing::server::router().split_for_parts();
    Ok(router.with_state(state))
}

async fn get(uri: &str) -> Result<(StatusCode, Value), Box<dyn std::error::Error>> {
    let response = app()?.oneshot(Request::builder().uri(uri).body(Body::empty())?).await?;
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, serde_json::from_slice(&body)?))
}

#[tokio::test]
async fn correct_returns_the_consolidated_plan() -> TestResult {
    let (status, body) = get("/correct?x=12001").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": { "packs": { "250": 1, "2000": 1, "5000": 2 } } }));

    let (_, body) = get("/correct?x=1").await?;
    assert_eq!(body, json!({ "data": { "packs": { "250": 1 } } }));

    let (_, body) = get("/correct?x=4999").await?;
    assert_eq!(body, json!({ "data": { "packs": { "1000": 1, "2000": 2 } } }));
    Ok(())
}

#[tokio::test]
async fn incorrect_drops_only_the_correct_plan() -> TestResult {
    let cases = [
        (4999, json!([{ "5000": 1 }, { "2000": 3 }, { "1000": 5 }, { "500": 10 }, { "250": 20 }])),
        (5001, json!([{ "5000": 2 }, { "2000": 3 }, { "1000": 6 }, { "500": 11 }, { "250": 21 }])),
        (9999, json!([{ "5000": 2 }, { "2000": 5 }, { "1000": 10 }, { "500": 20 }, { "250": 40 }])),
        (10_000, json!([{ "5000": 3 }, { "2000": 6 }, { "1000": 11 }, { "500": 21 }, { "250": 41 }])),
    ];

    for (quantity, packs) in cases {
        let (status, body) = get(&format!("/incorrect?x={quantity}")).await?;
        assert_eq!(status, StatusCode::OK, "x = {quantity}");
        assert_eq!(body, json!({ "data": { "packs": packs } }), "x = {quantity}");
    }
    Ok(())
}

#[tokio::test]
async fn incorrect_returns_single_size_allocations() -> TestResult {
    let (status, body) = get("/incorrect?x=251").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "data": { "packs": [{ "5000": 1 }, { "2000": 1 }, { "1000": 1 }, { "250": 2 }] } })
    );
    Ok(())
}

#[tokio::test]
async fn invalid_x_is_a_bad_request_on_both_endpoints() -> TestResult {
    let cases = [
        ("", "missing query param 'x'"),
        ("?x=", "missing query param 'x'"),
        ("?x=abc", "'x' must be an integer"),
        ("?x=1.5", "'x' must be an integer"),
        ("?x=-1", "'x' must be >= 1"),
        ("?x=0", "'x' must be >= 1"),
        ("?x=1000001", "'x' is too large"),
    ];

    for endpoint in ["/correct", "/incorrect"] {
        for (query, message) in cases {
            let uri = format!("{endpoint}{query}");
            let (status, body) = get(&uri).await?;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body, json!({ "status": false, "message": message }), "{uri}");
        }
    }
    Ok(())
}

#[tokio::test]
async fn missing_slice_is_an_internal_error() -> TestResult {
    let state = ApiState::builder().config(ApiConfig::default()).build()?;
    let (router, _api) = packwise_packing::server::router().split_for_parts();
    let response = router
        .with_state(state)
        .oneshot(Request::builder().uri("/correct?x=10").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = serde_json::from_slice(&to_bytes(response.into_body(), usize::MAX).await?)?;
    assert_eq!(body["status"], false);
    Ok(())
}

#[test]
fn routes_are_documented() {
    let (_router, api) = packwise_packing::server::router().split_for_parts();
    assert!(api.paths.paths.contains_key("/correct"));
    assert!(api.paths.paths.contains_key("/incorrect"));
}
