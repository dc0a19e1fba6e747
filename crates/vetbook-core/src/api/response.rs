//! Response handling shared by every endpoint.

use serde::Deserialize;

use crate::error::{ClientError, Result};

/// The structured failure body the API sends with non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Maps a non-success response to the error taxonomy.
///
/// When the body parses as JSON carrying a `message`, that message is
/// surfaced verbatim as a server-side validation error. Otherwise a generic
/// error carrying the HTTP status code is synthesized. Pure function of the
/// status and body text so the mapping is testable without a server.
pub(crate) fn error_from_body(status: u16, body: &str) -> ClientError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            message: Some(message),
        }) => ClientError::Validation { message },
        _ => ClientError::Server { status },
    }
}

/// Passes 2xx responses through and maps everything else via
/// [`error_from_body`].
pub(crate) async fn expect_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    log::warn!("Request failed with status {status}: {body}");
    Err(error_from_body(status.as_u16(), &body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_message_surfaces_verbatim() {
        let err = error_from_body(400, r#"{"message":"Slot unavailable"}"#);
        match err {
            ClientError::Validation { message } => assert_eq!(message, "Slot unavailable"),
            other => panic!("Expected Validation, got {other:?}"),
        }
        assert_eq!(
            error_from_body(400, r#"{"message":"Slot unavailable"}"#).to_string(),
            "Slot unavailable"
        );
    }

    #[test]
    fn test_unparseable_body_synthesizes_status_message() {
        let err = error_from_body(500, "<html>Internal Server Error</html>");
        match &err {
            ClientError::Server { status } => assert_eq!(*status, 500),
            other => panic!("Expected Server, got {other:?}"),
        }
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_json_body_without_message_synthesizes_status_message() {
        let err = error_from_body(502, r#"{"detail":"bad gateway"}"#);
        assert!(matches!(err, ClientError::Server { status: 502 }));
    }

    #[test]
    fn test_empty_body_synthesizes_status_message() {
        assert!(matches!(
            error_from_body(503, ""),
            ClientError::Server { status: 503 }
        ));
    }
}
