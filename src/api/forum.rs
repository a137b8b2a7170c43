//! Forum topics in supergroups.

use crate::{
    Bot,
    method::{CHAT_ID, Field, FieldKind, MESSAGE_THREAD_ID, Method, Shape},
    prelude::*,
    request::Params,
    types::{ChatId, ForumTopic, Sticker},
};

pub const GET_FORUM_TOPIC_ICON_STICKERS: Method<Vec<Sticker>> =
    Method::new("getForumTopicIconStickers", Shape::Array, &[]).query();

pub const CREATE_FORUM_TOPIC: Method<ForumTopic> = Method::new(
    "createForumTopic",
    Shape::Object,
    &[CHAT_ID, Field::required("name", FieldKind::Scalar)],
);

pub const EDIT_FORUM_TOPIC: Method<bool> =
    Method::new("editForumTopic", Shape::Scalar, &[CHAT_ID, MESSAGE_THREAD_ID]);

pub const CLOSE_FORUM_TOPIC: Method<bool> =
    Method::new("closeForumTopic", Shape::Scalar, &[CHAT_ID, MESSAGE_THREAD_ID]);

pub const REOPEN_FORUM_TOPIC: Method<bool> =
    Method::new("reopenForumTopic", Shape::Scalar, &[CHAT_ID, MESSAGE_THREAD_ID]);

pub const DELETE_FORUM_TOPIC: Method<bool> =
    Method::new("deleteForumTopic", Shape::Scalar, &[CHAT_ID, MESSAGE_THREAD_ID]);

pub const UNPIN_ALL_FORUM_TOPIC_MESSAGES: Method<bool> =
    Method::new("unpinAllForumTopicMessages", Shape::Scalar, &[CHAT_ID, MESSAGE_THREAD_ID]);

pub const EDIT_GENERAL_FORUM_TOPIC: Method<bool> = Method::new(
    "editGeneralForumTopic",
    Shape::Scalar,
    &[CHAT_ID, Field::required("name", FieldKind::Scalar)],
);

pub const CLOSE_GENERAL_FORUM_TOPIC: Method<bool> =
    Method::new("closeGeneralForumTopic", Shape::Scalar, &[CHAT_ID]);

pub const REOPEN_GENERAL_FORUM_TOPIC: Method<bool> =
    Method::new("reopenGeneralForumTopic", Shape::Scalar, &[CHAT_ID]);

pub const HIDE_GENERAL_FORUM_TOPIC: Method<bool> =
    Method::new("hideGeneralForumTopic", Shape::Scalar, &[CHAT_ID]);

pub const UNHIDE_GENERAL_FORUM_TOPIC: Method<bool> =
    Method::new("unhideGeneralForumTopic", Shape::Scalar, &[CHAT_ID]);

fn topic(chat_id: impl Into<ChatId>, message_thread_id: i64) -> Params {
    Params::new().with("chat_id", chat_id.into()).with("message_thread_id", message_thread_id)
}

impl Bot {
    /// Custom emoji stickers which can be used as a forum topic icon.
    pub async fn get_forum_topic_icon_stickers(&self) -> Result<Vec<Sticker>> {
        self.call(&GET_FORUM_TOPIC_ICON_STICKERS, Params::new(), Params::new()).await
    }

    pub async fn create_forum_topic(
        &self,
        chat_id: impl Into<ChatId>,
        name: impl Into<String>,
        optional: Params,
    ) -> Result<ForumTopic> {
        let required = Params::new().with("chat_id", chat_id.into()).with("name", name.into());
        self.call(&CREATE_FORUM_TOPIC, required, optional).await
    }

    /// Use `optional` for the new `name` and `icon_custom_emoji_id`.
    pub async fn edit_forum_topic(
        &self,
        chat_id: impl Into<ChatId>,
        message_thread_id: i64,
        optional: Params,
    ) -> Result<bool> {
        self.call(&EDIT_FORUM_TOPIC, topic(chat_id, message_thread_id), optional).await
    }

    pub async fn close_forum_topic(
        &self,
        chat_id: impl Into<ChatId>,
        message_thread_id: i64,
    ) -> Result<bool> {
        self.call(&CLOSE_FORUM_TOPIC, topic(chat_id, message_thread_id), Params::new()).await
    }

    pub async fn reopen_forum_topic(
        &self,
        chat_id: impl Into<ChatId>,
        message_thread_id: i64,
    ) -> Result<bool> {
        self.call(&REOPEN_FORUM_TOPIC, topic(chat_id, message_thread_id), Params::new()).await
    }

    pub async fn delete_forum_topic(
        &self,
        chat_id: impl Into<ChatId>,
        message_thread_id: i64,
    ) -> Result<bool> {
        self.call(&DELETE_FORUM_TOPIC, topic(chat_id, message_thread_id), Params::new()).await
    }

    pub async fn unpin_all_forum_topic_messages(
        &self,
        chat_id: impl Into<ChatId>,
        message_thread_id: i64,
    ) -> Result<bool> {
        let required = topic(chat_id, message_thread_id);
        self.call(&UNPIN_ALL_FORUM_TOPIC_MESSAGES, required, Params::new()).await
    }

    pub async fn edit_general_forum_topic(
        &self,
        chat_id: impl Into<ChatId>,
        name: impl Into<String>,
    ) -> Result<bool> {
        let required = Params::new().with("chat_id", chat_id.into()).with("name", name.into());
        self.call(&EDIT_GENERAL_FORUM_TOPIC, required, Params::new()).await
    }

    pub async fn close_general_forum_topic(&self, chat_id: impl Into<ChatId>) -> Result<bool> {
        self.call_general(&CLOSE_GENERAL_FORUM_TOPIC, chat_id.into()).await
    }

    pub async fn reopen_general_forum_topic(&self, chat_id: impl Into<ChatId>) -> Result<bool> {
        self.call_general(&REOPEN_GENERAL_FORUM_TOPIC, chat_id.into()).await
    }

    pub async fn hide_general_forum_topic(&self, chat_id: impl Into<ChatId>) -> Result<bool> {
        self.call_general(&HIDE_GENERAL_FORUM_TOPIC, chat_id.into()).await
    }

    pub async fn unhide_general_forum_topic(&self, chat_id: impl Into<ChatId>) -> Result<bool> {
        self.call_general(&UNHIDE_GENERAL_FORUM_TOPIC, chat_id.into()).await
    }

    async fn call_general(&self, method: &Method<bool>, chat_id: ChatId) -> Result<bool> {
        self.call(method, Params::new().with("chat_id", chat_id), Params::new()).await
    }
}
