use axum::{body::Bytes, extract::rejection::BytesRejection};
use serde_json::Value;

use crate::errors::ServiceError;

/// Buffers and parses a request body, treating a body axum could not buffer
/// (over the size limit, broken stream) the same as malformed JSON.
pub fn read_json_body(body: Result<Bytes, BytesRejection>) -> Result<Value, ServiceError> {
    let bytes = body.map_err(|rejection| ServiceError::MalformedBody(rejection.body_text()))?;
    parse_json_body(&bytes)
}

/// Parses a request body as JSON without regard to `Content-Type`.
///
/// Any well-formed JSON document is accepted; an empty body is malformed.
pub fn parse_json_body(body: &Bytes) -> Result<Value, ServiceError> {
    serde_json::from_slice(body).map_err(|e| ServiceError::MalformedBody(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_any_json_document() {
        assert_eq!(
            parse_json_body(&Bytes::from_static(br#"{"a":1}"#)).unwrap(),
            json!({"a": 1})
        );
        assert_eq!(parse_json_body(&Bytes::from_static(b"[]")).unwrap(), json!([]));
        assert_eq!(parse_json_body(&Bytes::from_static(b"null")).unwrap(), Value::Null);
    }

    #[test]
    fn rejects_empty_and_truncated_bodies() {
        assert!(matches!(
            parse_json_body(&Bytes::new()),
            Err(ServiceError::MalformedBody(_))
        ));
        assert!(matches!(
            parse_json_body(&Bytes::from_static(b"{\"name\":")),
            Err(ServiceError::MalformedBody(_))
        ));
    }
}
