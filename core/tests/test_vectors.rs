//! Verify evaluation, request building and response parsing against the JSON
//! test vectors stored in `test-vectors/`.
//!
//! Each vector describes a query, the wire path the client should produce,
//! the response the server sends, and the interpreted outcome.

use arith_core::{ApiError, ArithmeticClient, ArithmeticRequest, EvalError, HttpResponse};
use serde_json::Value;

const BASE_URL: &str = "http://localhost:3000";

fn vectors() -> Vec<Value> {
    let raw = include_str!("../../test-vectors/arithmetic.json");
    let parsed: Value = serde_json::from_str(raw).unwrap();
    parsed["cases"].as_array().unwrap().clone()
}

fn eval_error(name: &str) -> EvalError {
    match name {
        "MissingOperation" => EvalError::MissingOperation,
        "UnknownOperation" => EvalError::UnknownOperation,
        "InvalidOperand1" => EvalError::InvalidOperand1,
        "InvalidOperand2" => EvalError::InvalidOperand2,
        other => panic!("unknown expected error: {other}"),
    }
}

fn assert_value(name: &str, expected: &Value, actual: f64) {
    if let Some(target) = expected.get("close_to") {
        let target = target.as_f64().unwrap();
        let tolerance = expected["tolerance"].as_f64().unwrap();
        assert!(
            (actual - target).abs() <= tolerance,
            "{name}: {actual} not within {tolerance} of {target}"
        );
        return;
    }
    match &expected["result"] {
        Value::String(special) => match special.as_str() {
            "NaN" => assert!(actual.is_nan(), "{name}: expected NaN, got {actual}"),
            "Infinity" => assert_eq!(actual, f64::INFINITY, "{name}"),
            "-Infinity" => assert_eq!(actual, f64::NEG_INFINITY, "{name}"),
            other => panic!("{name}: unknown special value {other}"),
        },
        number => assert_eq!(actual, number.as_f64().unwrap(), "{name}: result"),
    }
}

#[test]
fn evaluate_matches_vectors() {
    for case in vectors() {
        let name = case["name"].as_str().unwrap();
        let request: ArithmeticRequest = serde_json::from_value(case["query"].clone()).unwrap();
        let outcome = request.evaluate();

        let expected = &case["expected"];
        match expected.get("error") {
            Some(err) => assert_eq!(outcome, Err(eval_error(err.as_str().unwrap())), "{name}"),
            None => assert_value(name, expected, outcome.unwrap()),
        }
    }
}

#[test]
fn build_request_matches_vector_paths() {
    let client = ArithmeticClient::new(BASE_URL);
    for case in vectors() {
        let name = case["name"].as_str().unwrap();
        let request: ArithmeticRequest = serde_json::from_value(case["query"].clone()).unwrap();
        let req = client.build_request(&request);
        assert_eq!(
            req.path,
            format!("{BASE_URL}{}", case["expected_path"].as_str().unwrap()),
            "{name}: path"
        );
    }
}

#[test]
fn parse_calculate_matches_vector_responses() {
    let client = ArithmeticClient::new(BASE_URL);
    for case in vectors() {
        let name = case["name"].as_str().unwrap();
        let sim = &case["response"];
        let response = HttpResponse {
            status: sim["status"].as_u64().unwrap() as u16,
            body: sim["body"].as_str().unwrap().to_string(),
        };
        let outcome = client.parse_calculate(response);

        let expected = &case["expected"];
        match expected.get("error") {
            Some(err) => {
                let want = eval_error(err.as_str().unwrap());
                match outcome {
                    Err(ApiError::Rejected { message, kind }) => {
                        assert_eq!(kind, Some(want), "{name}");
                        assert_eq!(message, want.to_string(), "{name}");
                    }
                    other => panic!("{name}: expected Rejected({want:?}), got {other:?}"),
                }
            }
            None => assert_value(name, expected, outcome.unwrap()),
        }
    }
}
