//! Tests for the domain error payload.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::conflict("taken"), ErrorCode::Conflict)]
#[case(Error::service_unavailable("down"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_expected_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
#[case("")]
#[case("   ")]
fn try_new_rejects_blank_messages(#[case] message: &str) {
    let result = Error::try_new(ErrorCode::NotFound, message);
    assert_eq!(result, Err(ErrorValidationError::EmptyMessage));
}

#[rstest]
fn trace_id_is_absent_outside_a_scope() {
    assert!(Error::internal("boom").trace_id().is_none());
}

#[tokio::test]
async fn trace_id_is_captured_from_scope() {
    let trace_id: TraceId = "00000000-0000-0000-0000-000000000001"
        .parse()
        .expect("valid uuid");
    let error = TraceId::scope(trace_id, async { Error::not_found("missing") }).await;
    assert_eq!(error.trace_id(), Some("00000000-0000-0000-0000-000000000001"));
}

#[rstest]
fn serialises_with_camel_case_keys() {
    let error = Error::invalid_request("bad")
        .with_trace_id("abc")
        .with_details(json!({ "field": "title" }));

    let value = serde_json::to_value(&error).expect("serialise error");
    assert_eq!(
        value,
        json!({
            "code": "invalid_request",
            "message": "bad",
            "traceId": "abc",
            "details": { "field": "title" }
        })
    );
}

#[rstest]
fn omits_absent_optional_fields() {
    let value = serde_json::to_value(Error::not_found("missing")).expect("serialise error");
    assert_eq!(value, json!({ "code": "not_found", "message": "missing" }));
}

#[rstest]
fn deserialisation_rejects_blank_message() {
    let result = serde_json::from_value::<Error>(json!({ "code": "not_found", "message": " " }));
    assert!(result.is_err());
}

#[rstest]
fn deserialisation_rejects_blank_trace_id() {
    let result = serde_json::from_value::<Error>(json!({
        "code": "not_found",
        "message": "missing",
        "traceId": ""
    }));
    assert!(result.is_err());
}

#[rstest]
fn deserialisation_accepts_snake_case_trace_id_alias() {
    let error: Error = serde_json::from_value(json!({
        "code": "conflict",
        "message": "taken",
        "trace_id": "abc"
    }))
    .expect("alias accepted");
    assert_eq!(error.trace_id(), Some("abc"));
}
