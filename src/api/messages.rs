//! Sending messages and media.

use crate::{
    Bot,
    input_file::{InputFile, InputMedia},
    method::{
        CAPTION_ENTITIES,
        CHAT_ID,
        Field,
        FieldKind,
        MESSAGE_ID,
        Method,
        REPLY_MARKUP,
        REPLY_PARAMETERS,
        Shape,
        THUMBNAIL,
    },
    prelude::*,
    request::Params,
    types::{ChatAction, ChatId, InputPollOption, Message, MessageId, ReactionType},
};

const FROM_CHAT_ID: Field = Field::required("from_chat_id", FieldKind::ChatId);
const MESSAGE_IDS: Field = Field::required("message_ids", FieldKind::Json);
const LINK_PREVIEW_OPTIONS: Field = Field::optional("link_preview_options", FieldKind::Json);
const ENTITIES: Field = Field::optional("entities", FieldKind::Json);
const LATITUDE: Field = Field::required("latitude", FieldKind::Scalar);
const LONGITUDE: Field = Field::required("longitude", FieldKind::Scalar);

pub const SEND_MESSAGE: Method<Message> = Method::new(
    "sendMessage",
    Shape::Object,
    &[
        CHAT_ID,
        Field::required("text", FieldKind::Scalar),
        ENTITIES,
        LINK_PREVIEW_OPTIONS,
        REPLY_PARAMETERS,
        REPLY_MARKUP,
    ],
);

pub const FORWARD_MESSAGE: Method<Message> =
    Method::new("forwardMessage", Shape::Object, &[CHAT_ID, FROM_CHAT_ID, MESSAGE_ID]);

pub const FORWARD_MESSAGES: Method<Vec<MessageId>> =
    Method::new("forwardMessages", Shape::Array, &[CHAT_ID, FROM_CHAT_ID, MESSAGE_IDS]);

pub const COPY_MESSAGE: Method<MessageId> = Method::new(
    "copyMessage",
    Shape::Object,
    &[CHAT_ID, FROM_CHAT_ID, MESSAGE_ID, CAPTION_ENTITIES, REPLY_PARAMETERS, REPLY_MARKUP],
);

pub const COPY_MESSAGES: Method<Vec<MessageId>> =
    Method::new("copyMessages", Shape::Array, &[CHAT_ID, FROM_CHAT_ID, MESSAGE_IDS]);

pub const SEND_PHOTO: Method<Message> = Method::new(
    "sendPhoto",
    Shape::Object,
    &[
        CHAT_ID,
        Field::required("photo", FieldKind::File),
        CAPTION_ENTITIES,
        REPLY_PARAMETERS,
        REPLY_MARKUP,
    ],
);

pub const SEND_AUDIO: Method<Message> = Method::new(
    "sendAudio",
    Shape::Object,
    &[
        CHAT_ID,
        Field::required("audio", FieldKind::File),
        THUMBNAIL,
        CAPTION_ENTITIES,
        REPLY_PARAMETERS,
        REPLY_MARKUP,
    ],
);

pub const SEND_DOCUMENT: Method<Message> = Method::new(
    "sendDocument",
    Shape::Object,
    &[
        CHAT_ID,
        Field::required("document", FieldKind::File),
        THUMBNAIL,
        CAPTION_ENTITIES,
        REPLY_PARAMETERS,
        REPLY_MARKUP,
    ],
);

pub const SEND_VIDEO: Method<Message> = Method::new(
    "sendVideo",
    Shape::Object,
    &[
        CHAT_ID,
        Field::required("video", FieldKind::File),
        THUMBNAIL,
        CAPTION_ENTITIES,
        REPLY_PARAMETERS,
        REPLY_MARKUP,
    ],
);

pub const SEND_ANIMATION: Method<Message> = Method::new(
    "sendAnimation",
    Shape::Object,
    &[
        CHAT_ID,
        Field::required("animation", FieldKind::File),
        THUMBNAIL,
        CAPTION_ENTITIES,
        REPLY_PARAMETERS,
        REPLY_MARKUP,
    ],
);

pub const SEND_VOICE: Method<Message> = Method::new(
    "sendVoice",
    Shape::Object,
    &[
        CHAT_ID,
        Field::required("voice", FieldKind::File),
        CAPTION_ENTITIES,
        REPLY_PARAMETERS,
        REPLY_MARKUP,
    ],
);

pub const SEND_VIDEO_NOTE: Method<Message> = Method::new(
    "sendVideoNote",
    Shape::Object,
    &[
        CHAT_ID,
        Field::required("video_note", FieldKind::File),
        THUMBNAIL,
        REPLY_PARAMETERS,
        REPLY_MARKUP,
    ],
);

pub const SEND_MEDIA_GROUP: Method<Vec<Message>> = Method::new(
    "sendMediaGroup",
    Shape::Array,
    &[CHAT_ID, Field::required("media", FieldKind::MediaGroup), REPLY_PARAMETERS],
);

pub const SEND_LOCATION: Method<Message> = Method::new(
    "sendLocation",
    Shape::Object,
    &[CHAT_ID, LATITUDE, LONGITUDE, REPLY_PARAMETERS, REPLY_MARKUP],
);

pub const SEND_VENUE: Method<Message> = Method::new(
    "sendVenue",
    Shape::Object,
    &[
        CHAT_ID,
        LATITUDE,
        LONGITUDE,
        Field::required("title", FieldKind::Scalar),
        Field::required("address", FieldKind::Scalar),
        REPLY_PARAMETERS,
        REPLY_MARKUP,
    ],
);

pub const SEND_CONTACT: Method<Message> = Method::new(
    "sendContact",
    Shape::Object,
    &[
        CHAT_ID,
        Field::required("phone_number", FieldKind::Scalar),
        Field::required("first_name", FieldKind::Scalar),
        REPLY_PARAMETERS,
        REPLY_MARKUP,
    ],
);

pub const SEND_POLL: Method<Message> = Method::new(
    "sendPoll",
    Shape::Object,
    &[
        CHAT_ID,
        Field::required("question", FieldKind::Scalar),
        Field::required("options", FieldKind::Json),
        Field::optional("question_entities", FieldKind::Json),
        Field::optional("explanation_entities", FieldKind::Json),
        REPLY_PARAMETERS,
        REPLY_MARKUP,
    ],
);

pub const SEND_DICE: Method<Message> =
    Method::new("sendDice", Shape::Object, &[CHAT_ID, REPLY_PARAMETERS, REPLY_MARKUP]);

pub const SEND_CHAT_ACTION: Method<bool> = Method::new(
    "sendChatAction",
    Shape::Scalar,
    &[CHAT_ID, Field::required("action", FieldKind::Scalar)],
);

pub const SET_MESSAGE_REACTION: Method<bool> = Method::new(
    "setMessageReaction",
    Shape::Scalar,
    &[CHAT_ID, MESSAGE_ID, Field::optional("reaction", FieldKind::Json)],
);

impl Bot {
    /// Send a single text message.
    ///
    /// The text goes out as is; see [`Bot::send_text`] for automatic splitting.
    pub async fn send_message(
        &self,
        chat_id: impl Into<ChatId>,
        text: impl Into<String>,
        optional: Params,
    ) -> Result<Message> {
        let required = Params::new().with("chat_id", chat_id.into()).with("text", text.into());
        self.call(&SEND_MESSAGE, required, optional).await
    }

    pub async fn forward_message(
        &self,
        chat_id: impl Into<ChatId>,
        from_chat_id: impl Into<ChatId>,
        message_id: i64,
        optional: Params,
    ) -> Result<Message> {
        let required = Params::new()
            .with("chat_id", chat_id.into())
            .with("from_chat_id", from_chat_id.into())
            .with("message_id", message_id);
        self.call(&FORWARD_MESSAGE, required, optional).await
    }

    pub async fn forward_messages(
        &self,
        chat_id: impl Into<ChatId>,
        from_chat_id: impl Into<ChatId>,
        message_ids: &[i64],
        optional: Params,
    ) -> Result<Vec<MessageId>> {
        let required = Params::new()
            .with("chat_id", chat_id.into())
            .with("from_chat_id", from_chat_id.into())
            .with_serialized("message_ids", message_ids)?;
        self.call(&FORWARD_MESSAGES, required, optional).await
    }

    pub async fn copy_message(
        &self,
        chat_id: impl Into<ChatId>,
        from_chat_id: impl Into<ChatId>,
        message_id: i64,
        optional: Params,
    ) -> Result<MessageId> {
        let required = Params::new()
            .with("chat_id", chat_id.into())
            .with("from_chat_id", from_chat_id.into())
            .with("message_id", message_id);
        self.call(&COPY_MESSAGE, required, optional).await
    }

    pub async fn copy_messages(
        &self,
        chat_id: impl Into<ChatId>,
        from_chat_id: impl Into<ChatId>,
        message_ids: &[i64],
        optional: Params,
    ) -> Result<Vec<MessageId>> {
        let required = Params::new()
            .with("chat_id", chat_id.into())
            .with("from_chat_id", from_chat_id.into())
            .with_serialized("message_ids", message_ids)?;
        self.call(&COPY_MESSAGES, required, optional).await
    }

    pub async fn send_photo(
        &self,
        chat_id: impl Into<ChatId>,
        photo: impl Into<InputFile>,
        optional: Params,
    ) -> Result<Message> {
        self.send_file(&SEND_PHOTO, "photo", chat_id.into(), photo.into(), optional).await
    }

    pub async fn send_audio(
        &self,
        chat_id: impl Into<ChatId>,
        audio: impl Into<InputFile>,
        optional: Params,
    ) -> Result<Message> {
        self.send_file(&SEND_AUDIO, "audio", chat_id.into(), audio.into(), optional).await
    }

    pub async fn send_document(
        &self,
        chat_id: impl Into<ChatId>,
        document: impl Into<InputFile>,
        optional: Params,
    ) -> Result<Message> {
        self.send_file(&SEND_DOCUMENT, "document", chat_id.into(), document.into(), optional).await
    }

    pub async fn send_video(
        &self,
        chat_id: impl Into<ChatId>,
        video: impl Into<InputFile>,
        optional: Params,
    ) -> Result<Message> {
        self.send_file(&SEND_VIDEO, "video", chat_id.into(), video.into(), optional).await
    }

    pub async fn send_animation(
        &self,
        chat_id: impl Into<ChatId>,
        animation: impl Into<InputFile>,
        optional: Params,
    ) -> Result<Message> {
        self.send_file(&SEND_ANIMATION, "animation", chat_id.into(), animation.into(), optional)
            .await
    }

    pub async fn send_voice(
        &self,
        chat_id: impl Into<ChatId>,
        voice: impl Into<InputFile>,
        optional: Params,
    ) -> Result<Message> {
        self.send_file(&SEND_VOICE, "voice", chat_id.into(), voice.into(), optional).await
    }

    pub async fn send_video_note(
        &self,
        chat_id: impl Into<ChatId>,
        video_note: impl Into<InputFile>,
        optional: Params,
    ) -> Result<Message> {
        self.send_file(&SEND_VIDEO_NOTE, "video_note", chat_id.into(), video_note.into(), optional)
            .await
    }

    async fn send_file(
        &self,
        method: &Method<Message>,
        field: &str,
        chat_id: ChatId,
        file: InputFile,
        optional: Params,
    ) -> Result<Message> {
        let required = Params::new().with("chat_id", chat_id).with(field, file);
        self.call(method, required, optional).await
    }

    /// Send a group of photos, videos, documents or audios as an album.
    pub async fn send_media_group(
        &self,
        chat_id: impl Into<ChatId>,
        media: Vec<InputMedia>,
        optional: Params,
    ) -> Result<Vec<Message>> {
        let required = Params::new().with("chat_id", chat_id.into()).with("media", media);
        self.call(&SEND_MEDIA_GROUP, required, optional).await
    }

    pub async fn send_location(
        &self,
        chat_id: impl Into<ChatId>,
        latitude: f64,
        longitude: f64,
        optional: Params,
    ) -> Result<Message> {
        let required = Params::new()
            .with("chat_id", chat_id.into())
            .with("latitude", latitude)
            .with("longitude", longitude);
        self.call(&SEND_LOCATION, required, optional).await
    }

    pub async fn send_venue(
        &self,
        chat_id: impl Into<ChatId>,
        latitude: f64,
        longitude: f64,
        title: impl Into<String>,
        address: impl Into<String>,
        optional: Params,
    ) -> Result<Message> {
        let required = Params::new()
            .with("chat_id", chat_id.into())
            .with("latitude", latitude)
            .with("longitude", longitude)
            .with("title", title.into())
            .with("address", address.into());
        self.call(&SEND_VENUE, required, optional).await
    }

    pub async fn send_contact(
        &self,
        chat_id: impl Into<ChatId>,
        phone_number: impl Into<String>,
        first_name: impl Into<String>,
        optional: Params,
    ) -> Result<Message> {
        let required = Params::new()
            .with("chat_id", chat_id.into())
            .with("phone_number", phone_number.into())
            .with("first_name", first_name.into());
        self.call(&SEND_CONTACT, required, optional).await
    }

    pub async fn send_poll(
        &self,
        chat_id: impl Into<ChatId>,
        question: impl Into<String>,
        options: &[InputPollOption],
        optional: Params,
    ) -> Result<Message> {
        let required = Params::new()
            .with("chat_id", chat_id.into())
            .with("question", question.into())
            .with_serialized("options", options)?;
        self.call(&SEND_POLL, required, optional).await
    }

    /// Send an animated emoji with a random value, use `optional` to pick the `emoji`.
    pub async fn send_dice(&self, chat_id: impl Into<ChatId>, optional: Params) -> Result<Message> {
        self.call(&SEND_DICE, Params::new().with("chat_id", chat_id.into()), optional).await
    }

    /// Tell the user that something is happening on the bot's side.
    pub async fn send_chat_action(
        &self,
        chat_id: impl Into<ChatId>,
        action: ChatAction,
        optional: Params,
    ) -> Result<bool> {
        let required =
            Params::new().with("chat_id", chat_id.into()).with("action", action.as_str());
        self.call(&SEND_CHAT_ACTION, required, optional).await
    }

    /// Replace the bot's reactions to the message, an empty list removes them.
    pub async fn set_message_reaction(
        &self,
        chat_id: impl Into<ChatId>,
        message_id: i64,
        reaction: &[ReactionType],
        optional: Params,
    ) -> Result<bool> {
        let required = Params::new()
            .with("chat_id", chat_id.into())
            .with("message_id", message_id)
            .with_serialized("reaction", reaction)?;
        self.call(&SET_MESSAGE_REACTION, required, optional).await
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::Result;

    use super::*;
    use crate::{request::Request, types::ParseMode};

    #[test]
    fn send_photo_by_url_ok() -> Result {
        let photo = InputFile::url("https://example.org/cat.jpg".parse()?);
        let required = Params::new().with("chat_id", 42_i64).with("photo", photo);
        let optional = Params::new().with("caption", "Cat").with("parse_mode", ParseMode::Html);
        let request = Request::build(&SEND_PHOTO, required, optional)?;
        assert!(!request.is_multipart());
        assert_eq!(request.params()["photo"], "https://example.org/cat.jpg");
        assert_eq!(request.params()["parse_mode"], "HTML");
        Ok(())
    }

    #[test]
    fn send_audio_thumbnail_upload_ok() -> Result {
        let required = Params::new()
            .with("chat_id", 42_i64)
            .with("audio", InputFile::bytes("song.mp3", b"mp3".to_vec()));
        let optional =
            Params::new().with("thumbnail", InputFile::bytes("cover.jpg", b"jpeg".to_vec()));
        let request = Request::build(&SEND_AUDIO, required, optional)?;
        assert_eq!(request.params()["audio"], "attach://file0");
        assert_eq!(request.params()["thumbnail"], "attach://file1");
        Ok(())
    }

    #[test]
    fn invalid_thumbnail_fails() {
        let required =
            Params::new().with("chat_id", 42_i64).with("audio", InputFile::id("CQACAgIAAxk"));
        let optional = Params::new().with("thumbnail", 42_i64);
        let result = Request::build(&SEND_AUDIO, required, optional);
        assert!(matches!(result, Err(Error::InvalidParameter { name, .. }) if name == "thumbnail"));
    }

    #[test]
    fn forward_messages_ok() -> Result {
        let required = Params::new()
            .with("chat_id", 1_i64)
            .with("from_chat_id", "@channel")
            .with_serialized("message_ids", &[10, 11])?;
        let request = Request::build(&FORWARD_MESSAGES, required, Params::new())?;
        assert_eq!(request.params()["message_ids"], "[10,11]");
        Ok(())
    }
}
