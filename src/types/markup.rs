use crate::{prelude::*, types::Extra};

/// Reply markup of a sent message.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
#[serde(untagged)]
pub enum ReplyMarkup {
    InlineKeyboard(InlineKeyboardMarkup),
    Keyboard(ReplyKeyboardMarkup),
    Remove(ReplyKeyboardRemove),
    ForceReply(ForceReply),
}

impl From<InlineKeyboardMarkup> for ReplyMarkup {
    fn from(markup: InlineKeyboardMarkup) -> Self {
        Self::InlineKeyboard(markup)
    }
}

impl From<ReplyKeyboardMarkup> for ReplyMarkup {
    fn from(markup: ReplyKeyboardMarkup) -> Self {
        Self::Keyboard(markup)
    }
}

impl From<ReplyKeyboardRemove> for ReplyMarkup {
    fn from(markup: ReplyKeyboardRemove) -> Self {
        Self::Remove(markup)
    }
}

impl From<ForceReply> for ReplyMarkup {
    fn from(markup: ForceReply) -> Self {
        Self::ForceReply(markup)
    }
}

/// Converts a button into a single-button inline keyboard.
impl From<InlineKeyboardButton> for ReplyMarkup {
    fn from(button: InlineKeyboardButton) -> Self {
        InlineKeyboardMarkup::single_button(button).into()
    }
}

/// Converts a single row into a single-row inline keyboard.
impl From<Vec<InlineKeyboardButton>> for ReplyMarkup {
    fn from(row: Vec<InlineKeyboardButton>) -> Self {
        vec![row].into()
    }
}

impl From<Vec<Vec<InlineKeyboardButton>>> for ReplyMarkup {
    fn from(inline_keyboard: Vec<Vec<InlineKeyboardButton>>) -> Self {
        InlineKeyboardMarkup { inline_keyboard }.into()
    }
}

/// This object represents an [inline keyboard][1] that appears right next to the message it belongs to.
///
/// [1]: https://core.telegram.org/bots/api#inlinekeyboardmarkup
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardMarkup {
    pub fn single_button(button: InlineKeyboardButton) -> Self {
        Self { inline_keyboard: vec![vec![button]] }
    }
}

/// This object represents [one button of an inline keyboard][1].
///
/// Exactly one of the optional fields must be used.
///
/// [1]: https://core.telegram.org/bots/api#inlinekeyboardbutton
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InlineKeyboardButton {
    /// Label text on the button.
    pub text: String,

    /// HTTP or `tg://` URL to be opened when the button is pressed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Data to be sent in a callback query to the bot when the button is pressed, 1-64 bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_data: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_inline_query: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_inline_query_current_chat: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay: Option<bool>,

    /// Button kinds without a dedicated field, such as `web_app` or `login_url`.
    #[serde(flatten)]
    pub extra: Extra,
}

impl InlineKeyboardButton {
    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self { text: text.into(), url: Some(url.into()), ..Default::default() }
    }

    pub fn callback(text: impl Into<String>, callback_data: impl Into<String>) -> Self {
        Self { text: text.into(), callback_data: Some(callback_data.into()), ..Default::default() }
    }
}

/// A [custom keyboard][1] with reply options.
///
/// [1]: https://core.telegram.org/bots/features#keyboards
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ReplyKeyboardMarkup {
    pub keyboard: Vec<Vec<KeyboardButton>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_persistent: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resize_keyboard: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_time_keyboard: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_field_placeholder: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,
}

/// One button of the reply keyboard.
///
/// See also: <https://core.telegram.org/bots/api#keyboardbutton>.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct KeyboardButton {
    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_contact: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_location: Option<bool>,

    #[serde(flatten)]
    pub extra: Extra,
}

impl From<&str> for KeyboardButton {
    fn from(text: &str) -> Self {
        Self { text: text.to_owned(), ..Default::default() }
    }
}

impl From<String> for KeyboardButton {
    fn from(text: String) -> Self {
        Self { text, ..Default::default() }
    }
}

/// Removes the current custom keyboard.
///
/// See also: <https://core.telegram.org/bots/api#replykeyboardremove>.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReplyKeyboardRemove {
    remove_keyboard: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,
}

impl Default for ReplyKeyboardRemove {
    fn default() -> Self {
        Self { remove_keyboard: true, selective: None }
    }
}

/// Displays a reply interface to the user.
///
/// See also: <https://core.telegram.org/bots/api#forcereply>.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ForceReply {
    force_reply: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_field_placeholder: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,
}

impl Default for ForceReply {
    fn default() -> Self {
        Self { force_reply: true, input_field_placeholder: None, selective: None }
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::Result;

    use super::*;

    #[test]
    fn inline_keyboard_ok() -> Result {
        let markup = ReplyMarkup::from(InlineKeyboardButton::url("Test", "https://example.org"));
        // language=json
        assert_eq!(
            serde_json::to_string(&markup)?,
            r#"{"inline_keyboard":[[{"text":"Test","url":"https://example.org"}]]}"#,
        );
        Ok(())
    }

    #[test]
    fn remove_keyboard_ok() -> Result {
        let markup = ReplyMarkup::from(ReplyKeyboardRemove::default());
        // language=json
        assert_eq!(serde_json::to_string(&markup)?, r#"{"remove_keyboard":true}"#);
        Ok(())
    }

    #[test]
    fn unknown_button_kind_is_kept_ok() -> Result {
        // language=json
        let button: InlineKeyboardButton =
            serde_json::from_str(r#"{"text": "Open", "web_app": {"url": "https://example.org"}}"#)?;
        assert_eq!(button.extra["web_app"]["url"], "https://example.org");
        Ok(())
    }
}
