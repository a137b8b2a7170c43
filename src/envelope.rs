//! Response envelope decoder.

use monostate::MustBe;

use crate::{error::ResponseParameters, prelude::*, transport::Delivery};

/// Telegram bot API [response][1].
///
/// [1]: https://core.telegram.org/bots/api#making-requests
#[derive(Deserialize)]
#[must_use]
#[serde(untagged)]
enum Envelope {
    Ok {
        #[allow(dead_code)]
        ok: MustBe!(true),

        #[serde(default)]
        result: Option<Value>,
    },

    Err {
        #[allow(dead_code)]
        ok: MustBe!(false),

        error_code: i32,
        description: String,

        #[serde(default)]
        parameters: Option<ResponseParameters>,
    },
}

/// Unwrap the `result` of a delivered response.
pub fn decode(delivery: Delivery) -> Result<Value> {
    match delivery {
        Delivery::Failed(error) => Err(error),
        Delivery::Received { status, body } => parse(&body).map_err(|error| match error {
            Error::MalformedResponse { reason } => {
                Error::malformed(format!("{reason} (HTTP {status})"))
            }
            error => error,
        }),
    }
}

/// Parse the raw body of a Bot API response.
pub fn parse(body: &[u8]) -> Result<Value> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|error| Error::malformed(format!("body is not JSON: {error:#}")))?;
    let envelope = Envelope::deserialize(value)
        .map_err(|_| Error::malformed("body is not a Bot API response envelope"))?;
    match envelope {
        Envelope::Ok { result: Some(result), .. } => Ok(result),
        Envelope::Ok { result: None, .. } => {
            Err(Error::malformed("`ok` is true but `result` is missing"))
        }
        Envelope::Err { error_code, description, parameters, .. } => {
            Err(Error::Api { code: error_code, message: description, parameters })
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::Result;
    use reqwest::StatusCode;

    use super::*;

    #[test]
    fn response_ok() -> Result {
        // language=json
        let result = parse(br#"{"ok": true, "result": 42}"#)?;
        assert_eq!(result, 42);
        Ok(())
    }

    #[test]
    fn api_error_ok() {
        // language=json
        let result = parse(br#"{"ok": false, "error_code": 403, "description": "Forbidden"}"#);
        match result {
            Err(Error::Api { code, message, parameters }) => {
                assert_eq!(code, 403);
                assert_eq!(message, "Forbidden");
                assert_eq!(parameters, None);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn too_many_requests_ok() {
        // language=json
        let body = br#"{
            "ok": false,
            "error_code": 429,
            "description": "Too Many Requests: retry after 7",
            "parameters": {"retry_after": 7}
        }"#;
        let error = parse(body).unwrap_err();
        assert_eq!(error.api_code(), Some(429));
        assert_eq!(error.retry_after(), Some(Duration::from_secs(7)));
    }

    #[test]
    fn migrated_chat_ok() {
        // language=json
        let body = br#"{
            "ok": false,
            "error_code": 400,
            "description": "Bad Request: group chat was upgraded to a supergroup chat",
            "parameters": {"migrate_to_chat_id": -1001234567890}
        }"#;
        assert_eq!(parse(body).unwrap_err().migrate_to_chat_id(), Some(-1_001_234_567_890));
    }

    #[test]
    fn missing_result_is_malformed() {
        // language=json
        let result = parse(br#"{"ok": true}"#);
        assert!(matches!(result, Err(Error::MalformedResponse { .. })));
    }

    #[test]
    fn not_json_is_malformed() {
        let result = parse(b"<html>502 Bad Gateway</html>");
        assert!(matches!(result, Err(Error::MalformedResponse { .. })));
    }

    #[test]
    fn error_without_code_is_malformed() {
        // language=json
        let result = parse(br#"{"ok": false, "description": "Oops"}"#);
        assert!(matches!(result, Err(Error::MalformedResponse { .. })));
    }

    #[test]
    fn malformed_response_mentions_status_ok() {
        let delivery =
            Delivery::Received { status: StatusCode::BAD_GATEWAY, body: b"Bad Gateway".to_vec() };
        let error = decode(delivery).unwrap_err();
        assert!(error.to_string().contains("502"), "{error}");
    }
}
