//! Entry points for webhook glue: the HTTP server itself lives outside this crate.
//!
//! See also: <https://core.telegram.org/bots/api#setwebhook>.

use crate::{hydrate::hydrate, method::Shape, prelude::*, types::Update};

/// Header carrying the `secret_token` set with `setWebhook`.
pub const SECRET_TOKEN_HEADER: &str = "X-Telegram-Bot-Api-Secret-Token";

/// Hydrate the raw body of a webhook request into an [`Update`].
#[instrument(skip_all, fields(n_bytes = body.len()))]
pub fn parse_update(body: &[u8]) -> Result<Update> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|error| Error::malformed(format!("webhook body is not JSON: {error:#}")))?;
    let update: Update = hydrate(value, Shape::Object).map_err(|error| match error {
        Error::MalformedResponse { reason } => Error::malformed(format!("webhook body: {reason}")),
        error => error,
    })?;
    debug!(update_id = update.update_id, "Parsed the update");
    Ok(update)
}

/// Check the [`SECRET_TOKEN_HEADER`] value of an incoming request.
///
/// A missing header only passes when no secret token is expected.
#[must_use]
pub fn verify_secret_token(header: Option<&str>, expected: Option<&str>) -> bool {
    match (header, expected) {
        (_, None) => true,
        (Some(header), Some(expected)) => header == expected,
        (None, Some(_)) => false,
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::Result;

    use super::*;

    #[test]
    fn parse_update_ok() -> Result {
        // language=json
        let body = br#"{
            "update_id": 1,
            "message": {
                "message_id": 2,
                "date": 1700000000,
                "chat": {"id": 3, "type": "private"},
                "text": "/start"
            },
            "business_connection": {"id": "x"}
        }"#;
        let update = parse_update(body)?;
        assert_eq!(update.update_id, 1);
        let text = update.message.as_ref().and_then(|message| message.text.as_deref());
        assert_eq!(text, Some("/start"));
        assert!(update.extra.contains_key("business_connection"));
        Ok(())
    }

    #[test]
    fn parse_update_not_json_fails() {
        for body in [&b"<html>"[..], b"[]"] {
            match parse_update(body) {
                Err(Error::MalformedResponse { reason }) => {
                    assert!(reason.starts_with("webhook body"), "{reason}");
                }
                other => panic!("unexpected result: {other:?}"),
            }
        }
    }

    #[test]
    fn verify_secret_token_ok() {
        assert!(verify_secret_token(Some("s3cr3t"), Some("s3cr3t")));
        assert!(!verify_secret_token(Some("wrong"), Some("s3cr3t")));
        assert!(!verify_secret_token(None, Some("s3cr3t")));
        assert!(verify_secret_token(None, None));
    }
}
