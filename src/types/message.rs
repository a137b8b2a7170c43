use bon::Builder;
use chrono::{DateTime, Utc};

use crate::{
    prelude::*,
    types::{
        Animation,
        Audio,
        Chat,
        ChatId,
        Contact,
        Dice,
        Document,
        Extra,
        Game,
        InlineKeyboardMarkup,
        Invoice,
        Location,
        PhotoSize,
        Poll,
        Sticker,
        SuccessfulPayment,
        User,
        Venue,
        Video,
        VideoNote,
        Voice,
    },
};

/// This object represents a [message][1].
///
/// [1]: https://core.telegram.org/bots/api#message
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[must_use]
pub struct Message {
    pub message_id: i64,

    pub message_thread_id: Option<i64>,

    pub from: Option<User>,

    pub sender_chat: Option<Chat>,

    /// Date the message was sent, Unix time.
    #[serde(default)]
    pub date: i64,

    pub chat: Option<Chat>,

    pub reply_to_message: Option<Box<Message>>,

    pub edit_date: Option<i64>,

    pub media_group_id: Option<String>,

    pub author_signature: Option<String>,

    pub text: Option<String>,

    #[serde(default)]
    pub entities: Vec<MessageEntity>,

    pub caption: Option<String>,

    #[serde(default)]
    pub caption_entities: Vec<MessageEntity>,

    /// Available sizes of the photo, if any.
    #[serde(default)]
    pub photo: Vec<PhotoSize>,

    pub animation: Option<Animation>,
    pub audio: Option<Audio>,
    pub document: Option<Document>,
    pub video: Option<Video>,
    pub video_note: Option<VideoNote>,
    pub voice: Option<Voice>,
    pub sticker: Option<Sticker>,
    pub contact: Option<Contact>,
    pub dice: Option<Dice>,
    pub game: Option<Game>,
    pub poll: Option<Poll>,
    pub venue: Option<Venue>,
    pub location: Option<Location>,

    #[serde(default)]
    pub new_chat_members: Vec<User>,

    pub left_chat_member: Option<User>,
    pub new_chat_title: Option<String>,

    #[serde(default)]
    pub new_chat_photo: Vec<PhotoSize>,

    pub migrate_to_chat_id: Option<i64>,
    pub migrate_from_chat_id: Option<i64>,
    pub pinned_message: Option<Box<Message>>,
    pub invoice: Option<Invoice>,
    pub successful_payment: Option<SuccessfulPayment>,
    pub reply_markup: Option<InlineKeyboardMarkup>,

    #[serde(flatten)]
    pub extra: Extra,
}

impl Message {
    #[must_use]
    pub fn sent_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.date, 0)
    }

    #[must_use]
    pub fn chat_id(&self) -> Option<i64> {
        self.chat.as_ref().map(|chat| chat.id)
    }

    /// Text or caption, whichever the message carries.
    #[must_use]
    pub fn text_or_caption(&self) -> Option<&str> {
        self.text.as_deref().or(self.caption.as_deref())
    }
}

/// Unique message identifier, returned by `copyMessage` and `copyMessages`.
///
/// See also: <https://core.telegram.org/bots/api#messageid>.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MessageId {
    pub message_id: i64,

    #[serde(flatten)]
    pub extra: Extra,
}

/// This object represents one [special entity][1] in a text message.
///
/// [1]: https://core.telegram.org/bots/api#messageentity
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[must_use]
pub struct MessageEntity {
    /// `mention`, `hashtag`, `bold`, `text_link`, `custom_emoji` and so on.
    #[serde(rename = "type")]
    pub kind: String,

    /// Offset in UTF-16 code units to the start of the entity.
    pub offset: u32,

    /// Length of the entity in UTF-16 code units.
    pub length: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_emoji_id: Option<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// Describes the [options][1] used for link preview generation.
///
/// [1]: https://core.telegram.org/bots/api#linkpreviewoptions
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[must_use]
pub struct LinkPreviewOptions {
    /// `true`, if the link preview is disabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_disabled: Option<bool>,

    /// URL to use for the link preview.
    ///
    /// If empty, then the first URL found in the message text will be used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// `true`, if the link preview must be shown above the message text;
    /// otherwise, the link preview will be shown below the message text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_above_text: Option<bool>,
}

impl LinkPreviewOptions {
    pub const DISABLED: Self = Self { is_disabled: Some(true), url: None, show_above_text: None };
}

/// Describes [reply parameters][1] for the message that is being sent.
///
/// [1]: https://core.telegram.org/bots/api#replyparameters
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Builder)]
#[must_use]
pub struct ReplyParameters {
    /// Identifier of the message that will be replied to in the current chat,
    /// or in the chat `chat_id` if it is specified.
    pub message_id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<ChatId>,

    /// Pass `true` if the message should be sent even if the specified message to be replied to is not found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_sending_without_reply: Option<bool>,

    /// Quoted part of the message to be replied to.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub quote: Option<String>,
}

/// Reaction to a message.
///
/// See also: <https://core.telegram.org/bots/api#reactiontype>.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReactionType {
    Emoji { emoji: String },
    CustomEmoji { custom_emoji_id: String },
    Paid,
}

#[cfg(test)]
mod tests {
    use crate::testing::Result;

    use super::*;

    #[test]
    fn message_ok() -> Result {
        // language=json
        let message: Message = serde_json::from_str(
            r#"{
                "message_id": 10,
                "date": 1700000000,
                "chat": {"id": 42, "type": "private", "first_name": "Ada"},
                "from": {"id": 42, "is_bot": false, "first_name": "Ada"},
                "text": "/start",
                "entities": [{"type": "bot_command", "offset": 0, "length": 6}],
                "via_some_future_feature": 1
            }"#,
        )?;
        assert_eq!(message.message_id, 10);
        assert_eq!(message.chat_id(), Some(42));
        assert_eq!(message.text_or_caption(), Some("/start"));
        assert_eq!(message.entities[0].kind, "bot_command");
        assert_eq!(message.sent_at().map(|sent_at| sent_at.timestamp()), Some(1_700_000_000));
        assert_eq!(message.extra["via_some_future_feature"], 1);
        Ok(())
    }

    #[test]
    fn reply_parameters_ok() -> Result {
        let reply_parameters =
            ReplyParameters::builder().message_id(5).allow_sending_without_reply(true).build();
        // language=json
        assert_eq!(
            serde_json::to_string(&reply_parameters)?,
            r#"{"message_id":5,"allow_sending_without_reply":true}"#,
        );
        Ok(())
    }

    #[test]
    fn reaction_ok() -> Result {
        let reaction = ReactionType::Emoji { emoji: "👍".into() };
        // language=json
        assert_eq!(serde_json::to_string(&reaction)?, r#"{"type":"emoji","emoji":"👍"}"#);
        Ok(())
    }
}
