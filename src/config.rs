//! Bot configuration, set once at construction and read-only afterwards.

use bon::Builder;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::prelude::*;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const DEFAULT_DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(300);

/// Maximum length of a text message, in characters.
///
/// See also: <https://core.telegram.org/bots/api#sendmessage>.
pub const MAX_TEXT_LENGTH: usize = 4096;

const DEFAULT_API_URL: &str = "https://api.telegram.org";

#[must_use]
#[derive(Clone, Debug, Builder)]
pub struct Config {
    /// Bot access token, as issued by [@BotFather](https://t.me/BotFather).
    #[builder(into)]
    pub token: SecretString,

    /// API root, defaults to `https://api.telegram.org`.
    ///
    /// Override it to use a [local Bot API server][1] or a test server.
    ///
    /// [1]: https://github.com/tdlib/telegram-bot-api
    pub api_url: Option<Url>,

    /// Transport timeout of a single call. Long polling adds its own timeout on top.
    #[builder(default = DEFAULT_TIMEOUT)]
    pub timeout: Duration,

    /// Timeout of a whole file download, body included.
    #[builder(default = DEFAULT_DOWNLOAD_TIMEOUT)]
    pub download_timeout: Duration,

    /// Split text longer than [`Config::max_text_length`] into several messages.
    #[builder(default = true)]
    pub split_long_text: bool,

    #[builder(default = MAX_TEXT_LENGTH)]
    pub max_text_length: usize,
}

impl Config {
    pub fn new(token: impl Into<SecretString>) -> Self {
        Self::builder().token(token).build()
    }

    /// Resolve the API root.
    pub(crate) fn api_root(&self) -> Result<Url> {
        match &self.api_url {
            Some(url) => Ok(url.clone()),
            None => Url::parse(DEFAULT_API_URL)
                .map_err(|error| Error::invalid_parameter("api_url", error.to_string())),
        }
    }

    pub(crate) fn validate(&self) -> Result {
        let token = self.token.expose_secret();
        if token.is_empty() || token.contains('/') || token.chars().any(char::is_whitespace) {
            return Err(Error::invalid_parameter("token", "not a bot token"));
        }
        if self.max_text_length == 0 {
            return Err(Error::invalid_parameter("max_text_length", "must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_ok() -> Result {
        let config = Config::new("123:abc");
        config.validate()?;
        assert_eq!(config.api_root()?.as_str(), "https://api.telegram.org/");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.download_timeout, DEFAULT_DOWNLOAD_TIMEOUT);
        assert!(config.split_long_text);
        assert_eq!(config.max_text_length, MAX_TEXT_LENGTH);
        Ok(())
    }

    #[test]
    fn empty_token_is_rejected() {
        let config = Config::new("");
        assert!(matches!(config.validate(), Err(Error::InvalidParameter { name, .. }) if name == "token"));
    }

    #[test]
    fn token_is_redacted_ok() {
        let config = Config::new("123:very-secret");
        assert!(!format!("{config:?}").contains("very-secret"));
    }
}
