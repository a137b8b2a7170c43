//! Bot API objects.
//!
//! Objects received from the API are open records: fields this crate does not know about are
//! kept in `extra` instead of being rejected, so the crate keeps working when the remote schema
//! grows.

mod chat;
mod commands;
mod forum;
mod games;
mod inline;
mod markup;
mod media;
mod message;
mod payments;
mod stickers;
mod update;
mod user;

use std::fmt;

pub use self::{
    chat::*,
    commands::*,
    forum::*,
    games::*,
    inline::*,
    markup::*,
    media::*,
    message::*,
    payments::*,
    stickers::*,
    update::*,
    user::*,
};
use crate::prelude::*;

/// Fields not declared by an object type.
pub type Extra = Map<String, Value>;

/// Unique identifier for the target chat or username of the target channel (in the format
/// `@channelusername`).
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
#[must_use]
pub enum ChatId {
    Integer(i64),
    Username(String),
}

impl From<i64> for ChatId {
    fn from(chat_id: i64) -> Self {
        Self::Integer(chat_id)
    }
}

impl From<String> for ChatId {
    fn from(username: String) -> Self {
        Self::Username(username)
    }
}

impl From<&str> for ChatId {
    fn from(username: &str) -> Self {
        Self::Username(username.to_owned())
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(chat_id) => write!(f, "{chat_id}"),
            Self::Username(username) => f.write_str(username),
        }
    }
}

/// [Formatting options][1] of the message text.
///
/// [1]: https://core.telegram.org/bots/api#formatting-options
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[must_use]
pub enum ParseMode {
    /// [HTML style][1].
    ///
    /// [1]: https://core.telegram.org/bots/api#html-style
    #[serde(rename = "HTML")]
    Html,

    /// [MarkdownV2 style][1].
    ///
    /// [1]: https://core.telegram.org/bots/api#markdownv2-style
    #[serde(rename = "MarkdownV2")]
    MarkdownV2,

    /// Legacy Markdown, kept for backward compatibility.
    #[serde(rename = "Markdown")]
    Markdown,
}

impl ParseMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Html => "HTML",
            Self::MarkdownV2 => "MarkdownV2",
            Self::Markdown => "Markdown",
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::Result;

    use super::*;

    #[test]
    fn chat_id_serialize_ok() -> Result {
        assert_eq!(serde_json::to_string(&ChatId::from(42))?, "42");
        assert_eq!(serde_json::to_string(&ChatId::from("@channel"))?, r#""@channel""#);
        Ok(())
    }

    #[test]
    fn parse_mode_serialize_ok() -> Result {
        assert_eq!(serde_json::to_string(&ParseMode::Html)?, r#""HTML""#);
        assert_eq!(ParseMode::MarkdownV2.as_str(), "MarkdownV2");
        Ok(())
    }
}
