use super::*;

#[test]
fn extracts_token() {
    let headers = headers_with("Bearer abc123");

    assert_eq!(bearer_token(&headers).unwrap(), "abc123");
}

#[test]
fn accepts_lowercase_scheme() {
    let headers = headers_with("bearer abc123");

    assert_eq!(bearer_token(&headers).unwrap(), "abc123");
}

#[test]
fn rejects_missing_header() {
    let headers = HeaderMap::new();

    assert!(matches!(bearer_token(&headers), Err(AuthError::MissingToken)));
}

#[test]
fn rejects_other_scheme() {
    let headers = headers_with("Basic dXNlcjpwYXNz");

    assert!(matches!(bearer_token(&headers), Err(AuthError::MissingToken)));
}

#[test]
fn rejects_empty_token() {
    let headers = headers_with("Bearer ");

    assert!(matches!(bearer_token(&headers), Err(AuthError::MissingToken)));
}
