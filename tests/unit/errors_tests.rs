/*!
 * Tests for the application error types
 */

use emojimd::errors::{AppError, FetchError};

/// FetchError::ApiError carries the status code in its message
#[test]
fn test_fetch_error_withApiError_shouldIncludeStatusCode() {
    let error = FetchError::ApiError {
        status_code: 500,
        message: "server melted".to_string(),
    };

    let rendered = error.to_string();
    assert!(rendered.contains("500"));
    assert!(rendered.contains("server melted"));
}

/// Transport failures render with the fetch prefix
#[test]
fn test_fetch_error_withRequestFailed_shouldDescribeTransport() {
    let error = FetchError::RequestFailed("connection refused".to_string());

    assert!(error.to_string().contains("connection refused"));
}

/// FetchError converts into AppError
#[test]
fn test_app_error_fromFetchError_shouldWrap() {
    let error: AppError = FetchError::ParseError("not an object".to_string()).into();

    match error {
        AppError::Fetch(FetchError::ParseError(message)) => {
            assert_eq!(message, "not an object");
        }
        other => panic!("unexpected variant: {:?}", other),
    }
}

/// io::Error converts into AppError::File
#[test]
fn test_app_error_fromIoError_shouldBecomeFileVariant() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let error: AppError = io_error.into();

    match error {
        AppError::File(message) => assert!(message.contains("gone")),
        other => panic!("unexpected variant: {:?}", other),
    }
}
