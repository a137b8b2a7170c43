use std::{io, time::Duration};

use serde::Deserialize;

/// Everything that can go wrong while calling the Bot API.
///
/// None of the variants is retried by the library: the caller decides what to do with
/// rate limits, chat migrations and network failures.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The caller supplied a missing or malformed parameter; nothing was sent.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Connection-level failure: DNS, TLS, timeout, reset, or a non-success status on a
    /// plain download.
    #[error("transport error: {0:#}")]
    Transport(#[source] reqwest::Error),

    /// The response body is not JSON or does not follow the `{ok, result}` envelope.
    ///
    /// Also raised for an inbound webhook body that is not an update, with a `webhook body`
    /// reason.
    #[error("malformed response: {reason}")]
    MalformedResponse { reason: String },

    /// The Bot API answered with `ok: false`.
    #[error("API error {code}: {message}")]
    Api {
        code: i32,
        message: String,
        parameters: Option<ResponseParameters>,
    },

    /// A local upload could not be opened at dispatch time.
    #[error("failed to read attachment `{name}`: {source:#}")]
    Attachment {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0:#}")]
    Io(#[from] io::Error),
}

pub type Result<T = (), E = Error> = std::result::Result<T, E>;

impl From<reqwest::Error> for Error {
    /// Request URLs embed the bot token, so they never make it into the error.
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(error.without_url())
    }
}

impl Error {
    pub(crate) fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter { name: name.into(), reason: reason.into() }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse { reason: reason.into() }
    }

    /// Remote error code, if this is an [`Error::Api`].
    #[must_use]
    pub const fn api_code(&self) -> Option<i32> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Seconds to wait before repeating the request, as advised by the server.
    #[must_use]
    pub fn retry_after(&self) -> Option<Duration> {
        self.parameters()
            .and_then(|parameters| parameters.retry_after)
            .map(Duration::from_secs)
    }

    /// The supergroup the group has been migrated to, as advised by the server.
    #[must_use]
    pub fn migrate_to_chat_id(&self) -> Option<i64> {
        self.parameters().and_then(|parameters| parameters.migrate_to_chat_id)
    }

    const fn parameters(&self) -> Option<&ResponseParameters> {
        match self {
            Self::Api { parameters, .. } => parameters.as_ref(),
            _ => None,
        }
    }
}

/// [Information about why a request was unsuccessful][1].
///
/// [1]: https://core.telegram.org/bots/api#responseparameters
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ResponseParameters {
    /// The group has been migrated to a supergroup with the specified identifier.
    #[serde(default)]
    pub migrate_to_chat_id: Option<i64>,

    /// In case of exceeding flood control, the number of seconds left to wait.
    #[serde(default)]
    pub retry_after: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retry_after_ok() {
        let error = Error::Api {
            code: 429,
            message: "Too Many Requests: retry after 5".into(),
            parameters: Some(ResponseParameters { retry_after: Some(5), ..Default::default() }),
        };
        assert_eq!(error.api_code(), Some(429));
        assert_eq!(error.retry_after(), Some(Duration::from_secs(5)));
        assert_eq!(error.migrate_to_chat_id(), None);
    }

    #[test]
    fn display_api_error_ok() {
        let error = Error::Api { code: 403, message: "Forbidden".into(), parameters: None };
        assert_eq!(error.to_string(), "API error 403: Forbidden");
    }
}
