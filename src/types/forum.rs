use crate::{prelude::*, types::Extra};

/// A forum topic.
///
/// See also: <https://core.telegram.org/bots/api#forumtopic>.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[must_use]
pub struct ForumTopic {
    pub message_thread_id: i64,
    pub name: String,

    /// Color of the topic icon in RGB format.
    pub icon_color: u32,

    pub icon_custom_emoji_id: Option<String>,

    #[serde(flatten)]
    pub extra: Extra,
}
