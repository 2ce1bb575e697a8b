//! Assertion helpers

use axum::http::StatusCode;

use super::app::TestResponse;

/// Assert the status, printing the body on failure
#[track_caller]
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "unexpected status, body: {}",
        response.body
    );
}

/// Assert an error response: status plus a `{"error": ...}` body
#[track_caller]
pub fn assert_error(response: &TestResponse, expected: StatusCode) -> String {
    assert_status(response, expected);
    let object = response
        .body
        .as_object()
        .unwrap_or_else(|| panic!("error body is not an object: {}", response.body));
    assert_eq!(object.len(), 1, "error body has extra fields: {}", response.body);
    object["error"]
        .as_str()
        .unwrap_or_else(|| panic!("error field is not a string: {}", response.body))
        .to_string()
}
