//! [Updating messages](https://core.telegram.org/bots/api#updating-messages).
//!
//! Edits of messages sent by the bot return the edited [`Message`], while edits of inline
//! messages return `true`: the result is an [`ObjectOrBool`].

use crate::{
    Bot,
    hydrate::ObjectOrBool,
    input_file::InputMedia,
    method::{CHAT_ID, Field, FieldKind, MESSAGE_ID, Method, REPLY_MARKUP, Shape},
    prelude::*,
    request::Params,
    types::{ChatId, InlineKeyboardMarkup, Message, Poll},
};

/// Message to edit.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessageTarget {
    /// Message sent by the bot to a chat.
    Chat { chat_id: ChatId, message_id: i64 },

    /// `inline_message_id` of a message sent via the bot in inline mode.
    Inline(String),
}

impl MessageTarget {
    pub fn chat(chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self::Chat { chat_id: chat_id.into(), message_id }
    }

    pub fn inline(inline_message_id: impl Into<String>) -> Self {
        Self::Inline(inline_message_id.into())
    }

    pub(crate) fn into_params(self) -> Params {
        match self {
            Self::Chat { chat_id, message_id } => {
                Params::new().with("chat_id", chat_id).with("message_id", message_id)
            }
            Self::Inline(inline_message_id) => {
                Params::new().with("inline_message_id", inline_message_id)
            }
        }
    }
}

const TARGET_CHAT_ID: Field = Field::optional("chat_id", FieldKind::ChatId);
const TARGET_MESSAGE_ID: Field = Field::optional("message_id", FieldKind::Scalar);
const INLINE_MESSAGE_ID: Field = Field::optional("inline_message_id", FieldKind::Scalar);

pub const EDIT_MESSAGE_TEXT: Method<ObjectOrBool<Message>> = Method::new(
    "editMessageText",
    Shape::ObjectOrBool,
    &[
        TARGET_CHAT_ID,
        TARGET_MESSAGE_ID,
        INLINE_MESSAGE_ID,
        Field::required("text", FieldKind::Scalar),
        Field::optional("entities", FieldKind::Json),
        Field::optional("link_preview_options", FieldKind::Json),
        REPLY_MARKUP,
    ],
);

pub const EDIT_MESSAGE_CAPTION: Method<ObjectOrBool<Message>> = Method::new(
    "editMessageCaption",
    Shape::ObjectOrBool,
    &[
        TARGET_CHAT_ID,
        TARGET_MESSAGE_ID,
        INLINE_MESSAGE_ID,
        Field::optional("caption_entities", FieldKind::Json),
        REPLY_MARKUP,
    ],
);

pub const EDIT_MESSAGE_MEDIA: Method<ObjectOrBool<Message>> = Method::new(
    "editMessageMedia",
    Shape::ObjectOrBool,
    &[
        TARGET_CHAT_ID,
        TARGET_MESSAGE_ID,
        INLINE_MESSAGE_ID,
        Field::required("media", FieldKind::Media),
        REPLY_MARKUP,
    ],
);

pub const EDIT_MESSAGE_LIVE_LOCATION: Method<ObjectOrBool<Message>> = Method::new(
    "editMessageLiveLocation",
    Shape::ObjectOrBool,
    &[
        TARGET_CHAT_ID,
        TARGET_MESSAGE_ID,
        INLINE_MESSAGE_ID,
        Field::required("latitude", FieldKind::Scalar),
        Field::required("longitude", FieldKind::Scalar),
        REPLY_MARKUP,
    ],
);

pub const STOP_MESSAGE_LIVE_LOCATION: Method<ObjectOrBool<Message>> = Method::new(
    "stopMessageLiveLocation",
    Shape::ObjectOrBool,
    &[TARGET_CHAT_ID, TARGET_MESSAGE_ID, INLINE_MESSAGE_ID, REPLY_MARKUP],
);

pub const EDIT_MESSAGE_REPLY_MARKUP: Method<ObjectOrBool<Message>> = Method::new(
    "editMessageReplyMarkup",
    Shape::ObjectOrBool,
    &[TARGET_CHAT_ID, TARGET_MESSAGE_ID, INLINE_MESSAGE_ID, REPLY_MARKUP],
);

pub const STOP_POLL: Method<Poll> =
    Method::new("stopPoll", Shape::Object, &[CHAT_ID, MESSAGE_ID, REPLY_MARKUP]);

pub const DELETE_MESSAGE: Method<bool> =
    Method::new("deleteMessage", Shape::Scalar, &[CHAT_ID, MESSAGE_ID]);

pub const DELETE_MESSAGES: Method<bool> = Method::new(
    "deleteMessages",
    Shape::Scalar,
    &[CHAT_ID, Field::required("message_ids", FieldKind::Json)],
);

impl Bot {
    pub async fn edit_message_text(
        &self,
        target: MessageTarget,
        text: impl Into<String>,
        optional: Params,
    ) -> Result<ObjectOrBool<Message>> {
        let required = target.into_params().with("text", text.into());
        self.call(&EDIT_MESSAGE_TEXT, required, optional).await
    }

    /// Use `optional` for the new `caption`, leave it out to remove the caption.
    pub async fn edit_message_caption(
        &self,
        target: MessageTarget,
        optional: Params,
    ) -> Result<ObjectOrBool<Message>> {
        self.call(&EDIT_MESSAGE_CAPTION, target.into_params(), optional).await
    }

    pub async fn edit_message_media(
        &self,
        target: MessageTarget,
        media: InputMedia,
        optional: Params,
    ) -> Result<ObjectOrBool<Message>> {
        let required = target.into_params().with("media", media);
        self.call(&EDIT_MESSAGE_MEDIA, required, optional).await
    }

    pub async fn edit_message_live_location(
        &self,
        target: MessageTarget,
        latitude: f64,
        longitude: f64,
        optional: Params,
    ) -> Result<ObjectOrBool<Message>> {
        let required =
            target.into_params().with("latitude", latitude).with("longitude", longitude);
        self.call(&EDIT_MESSAGE_LIVE_LOCATION, required, optional).await
    }

    pub async fn stop_message_live_location(
        &self,
        target: MessageTarget,
        optional: Params,
    ) -> Result<ObjectOrBool<Message>> {
        self.call(&STOP_MESSAGE_LIVE_LOCATION, target.into_params(), optional).await
    }

    /// Replace the inline keyboard, or remove it with `None`.
    pub async fn edit_message_reply_markup(
        &self,
        target: MessageTarget,
        reply_markup: Option<&InlineKeyboardMarkup>,
    ) -> Result<ObjectOrBool<Message>> {
        let optional = match reply_markup {
            Some(reply_markup) => Params::new().with_serialized("reply_markup", reply_markup)?,
            None => Params::new(),
        };
        self.call(&EDIT_MESSAGE_REPLY_MARKUP, target.into_params(), optional).await
    }

    pub async fn stop_poll(
        &self,
        chat_id: impl Into<ChatId>,
        message_id: i64,
        optional: Params,
    ) -> Result<Poll> {
        let required = Params::new().with("chat_id", chat_id.into()).with("message_id", message_id);
        self.call(&STOP_POLL, required, optional).await
    }

    pub async fn delete_message(
        &self,
        chat_id: impl Into<ChatId>,
        message_id: i64,
    ) -> Result<bool> {
        let required = Params::new().with("chat_id", chat_id.into()).with("message_id", message_id);
        self.call(&DELETE_MESSAGE, required, Params::new()).await
    }

    pub async fn delete_messages(
        &self,
        chat_id: impl Into<ChatId>,
        message_ids: &[i64],
    ) -> Result<bool> {
        let required = Params::new()
            .with("chat_id", chat_id.into())
            .with_serialized("message_ids", message_ids)?;
        self.call(&DELETE_MESSAGES, required, Params::new()).await
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::Result;
    use serde_json::json;

    use super::*;
    use crate::{InputFile, request::Request};

    #[test]
    fn inline_target_ok() -> Result {
        let required = MessageTarget::inline("AAA").into_params().with("text", "Edited");
        let request = Request::build(&EDIT_MESSAGE_TEXT, required, Params::new())?;
        assert_eq!(
            Value::Object(request.params().clone()),
            json!({"inline_message_id": "AAA", "text": "Edited"}),
        );
        Ok(())
    }

    #[test]
    fn edit_media_upload_ok() -> Result {
        let media = InputMedia::photo(InputFile::bytes("new.jpg", b"jpeg".to_vec()));
        let required = MessageTarget::chat(1, 2).into_params().with("media", media);
        let request = Request::build(&EDIT_MESSAGE_MEDIA, required, Params::new())?;
        // language=json
        assert_eq!(request.params()["media"], r#"{"type":"photo","media":"attach://file0"}"#);
        assert!(request.is_multipart());
        Ok(())
    }
}
