use arith_core::{ArithmeticResponse, ErrorResponse};
use arith_server::{app, app_with_config, ServerConfig};
use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- vectors ---

#[tokio::test]
async fn arithmetic_matches_vectors() {
    let raw = include_str!("../../test-vectors/arithmetic.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let resp = app()
            .oneshot(get(case["expected_path"].as_str().unwrap()))
            .await
            .unwrap();

        let want_status = case["response"]["status"].as_u64().unwrap() as u16;
        assert_eq!(resp.status().as_u16(), want_status, "{name}: status");

        let expected = &case["expected"];
        if expected.get("error").is_some() {
            let body: ErrorResponse = body_json(resp).await;
            let want: ErrorResponse =
                serde_json::from_str(case["response"]["body"].as_str().unwrap()).unwrap();
            assert_eq!(body, want, "{name}: error body");
            continue;
        }

        let body: ArithmeticResponse = body_json(resp).await;
        let value = body.value().unwrap();
        if let Some(target) = expected.get("close_to") {
            let tolerance = expected["tolerance"].as_f64().unwrap();
            assert!(
                (value - target.as_f64().unwrap()).abs() <= tolerance,
                "{name}: {value}"
            );
            continue;
        }
        match &expected["result"] {
            Value::String(special) if special == "NaN" => assert!(value.is_nan(), "{name}"),
            Value::String(special) if special == "Infinity" => {
                assert_eq!(value, f64::INFINITY, "{name}")
            }
            Value::String(special) if special == "-Infinity" => {
                assert_eq!(value, f64::NEG_INFINITY, "{name}")
            }
            number => assert_eq!(value, number.as_f64().unwrap(), "{name}"),
        }
    }
}

// --- wire format ---

#[tokio::test]
async fn success_body_is_result_only() {
    let resp = app()
        .oneshot(get("/arithmetic?operation=power&operand1=2&operand2=3"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[http::header::CONTENT_TYPE],
        "application/json"
    );
    let body: Value = body_json(resp).await;
    assert_eq!(body, serde_json::json!({ "result": 8.0 }));
}

#[tokio::test]
async fn nan_result_uses_null_and_sidecar() {
    let resp = app()
        .oneshot(get("/arithmetic?operation=power&operand1=-2&operand2=0.5"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body, serde_json::json!({ "result": null, "special": "NaN" }));
}

#[tokio::test]
async fn negative_zero_result_is_plain_zero() {
    let resp = app()
        .oneshot(get("/arithmetic?operation=power&operand1=-0&operand2=5"))
        .await
        .unwrap();
    let body: Value = body_json(resp).await;
    assert_eq!(body["result"], serde_json::json!(0.0));
    assert!(body.get("special").is_none());
}

#[tokio::test]
async fn error_body_carries_message() {
    let resp = app()
        .oneshot(get("/arithmetic?operand1=2&operand2=3"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = body_json(resp).await;
    assert_eq!(body, serde_json::json!({ "error": "Unspecified operation" }));
}

// --- query decoding ---

#[tokio::test]
async fn percent_encoded_operands_decode() {
    let resp = app()
        .oneshot(get("/arithmetic?operation=power&operand1=1e%2B1&operand2=2"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: ArithmeticResponse = body_json(resp).await;
    assert_eq!(body.value(), Some(100.0));
}

#[tokio::test]
async fn unknown_parameters_are_ignored() {
    let resp = app()
        .oneshot(get("/arithmetic?operation=add&operand1=2&operand2=3&verbose=1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: ArithmeticResponse = body_json(resp).await;
    assert_eq!(body.value(), Some(5.0));
}

#[tokio::test]
async fn empty_operation_is_invalid_not_missing() {
    let resp = app()
        .oneshot(get("/arithmetic?operation=&operand1=2&operand2=3"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = body_json(resp).await;
    assert_eq!(body.error, "Invalid operation");
}

#[tokio::test]
async fn duplicated_key_is_malformed_query() {
    let resp = app()
        .oneshot(get(
            "/arithmetic?operation=power&operation=add&operand1=2&operand2=3",
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = body_json(resp).await;
    assert!(body.error.starts_with("Malformed query"), "{}", body.error);
}

// --- routing ---

#[tokio::test]
async fn post_is_not_allowed() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/arithmetic?operation=power&operand1=2&operand2=3")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unknown_route_is_404() {
    let resp = app().oneshot(get("/calculate")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_returns_ok() {
    let resp = app().oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body["status"], "ok");
}

// --- middleware ---

#[tokio::test]
async fn configured_app_allows_any_origin_by_default() {
    let app = app_with_config(&ServerConfig::default());
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/arithmetic?operation=power&operand1=2&operand2=3")
                .header(http::header::ORIGIN, "http://calculator.test")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[http::header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn configured_app_restricts_origins() {
    let config = ServerConfig {
        cors_origins: vec!["http://allowed.test".to_string()],
        ..ServerConfig::default()
    };
    let resp = app_with_config(&config)
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(http::header::ORIGIN, "http://other.test")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp
        .headers()
        .get(http::header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
