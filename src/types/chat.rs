use crate::{
    prelude::*,
    types::{Extra, Message, User},
};

/// Type of a chat.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatType {
    Private,
    Group,
    Supergroup,
    Channel,

    /// A chat type introduced after this crate was released.
    #[serde(other)]
    Other,
}

/// This object represents a chat.
///
/// See also: <https://core.telegram.org/bots/api#chat>.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[must_use]
pub struct Chat {
    pub id: i64,

    #[serde(rename = "type")]
    pub kind: ChatType,

    pub title: Option<String>,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,

    #[serde(default)]
    pub is_forum: bool,

    #[serde(flatten)]
    pub extra: Extra,
}

/// Full information about a chat, as returned by `getChat`.
///
/// See also: <https://core.telegram.org/bots/api#chatfullinfo>.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[must_use]
pub struct ChatFullInfo {
    pub id: i64,

    #[serde(rename = "type")]
    pub kind: ChatType,

    pub title: Option<String>,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,

    #[serde(default)]
    pub is_forum: bool,

    pub photo: Option<ChatPhoto>,
    pub bio: Option<String>,
    pub description: Option<String>,
    pub invite_link: Option<String>,
    pub pinned_message: Option<Box<Message>>,
    pub permissions: Option<ChatPermissions>,
    pub slow_mode_delay: Option<u32>,
    pub linked_chat_id: Option<i64>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// This object represents a chat photo.
///
/// See also: <https://core.telegram.org/bots/api#chatphoto>.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ChatPhoto {
    pub small_file_id: String,
    pub small_file_unique_id: String,
    pub big_file_id: String,
    pub big_file_unique_id: String,
}

/// Actions that a non-administrator user is allowed to take in a chat.
///
/// See also: <https://core.telegram.org/bots/api#chatpermissions>.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[must_use]
pub struct ChatPermissions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_messages: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_audios: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_documents: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_photos: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_videos: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_video_notes: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_voice_notes: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_polls: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_other_messages: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_add_web_page_previews: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_change_info: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_invite_users: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_pin_messages: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_manage_topics: Option<bool>,
}

impl ChatPermissions {
    /// Nothing is allowed, useful to mute a member.
    pub const fn read_only() -> Self {
        Self {
            can_send_messages: Some(false),
            can_send_audios: Some(false),
            can_send_documents: Some(false),
            can_send_photos: Some(false),
            can_send_videos: Some(false),
            can_send_video_notes: Some(false),
            can_send_voice_notes: Some(false),
            can_send_polls: Some(false),
            can_send_other_messages: Some(false),
            can_add_web_page_previews: Some(false),
            can_change_info: Some(false),
            can_invite_users: Some(false),
            can_pin_messages: Some(false),
            can_manage_topics: Some(false),
        }
    }
}

/// Status of a chat member.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMemberStatus {
    Creator,
    Administrator,
    Member,
    Restricted,
    Left,
    Kicked,

    #[serde(other)]
    Other,
}

/// Information about one member of a chat.
///
/// The status-specific fields, such as administrator rights, stay in `extra`.
///
/// See also: <https://core.telegram.org/bots/api#chatmember>.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[must_use]
pub struct ChatMember {
    pub status: ChatMemberStatus,
    pub user: User,
    pub custom_title: Option<String>,

    #[serde(default)]
    pub is_anonymous: bool,

    /// Date when restrictions or the ban will be lifted, Unix time; `0` means forever.
    pub until_date: Option<i64>,

    #[serde(flatten)]
    pub extra: Extra,
}

impl ChatMember {
    #[must_use]
    pub const fn is_administrator(&self) -> bool {
        matches!(self.status, ChatMemberStatus::Creator | ChatMemberStatus::Administrator)
    }
}

/// An invite link for a chat.
///
/// See also: <https://core.telegram.org/bots/api#chatinvitelink>.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[must_use]
pub struct ChatInviteLink {
    pub invite_link: String,
    pub creator: User,

    #[serde(default)]
    pub creates_join_request: bool,

    #[serde(default)]
    pub is_primary: bool,

    #[serde(default)]
    pub is_revoked: bool,

    pub name: Option<String>,
    pub expire_date: Option<i64>,
    pub member_limit: Option<u32>,
    pub pending_join_request_count: Option<u32>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// Type of action to broadcast with `sendChatAction`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatAction {
    Typing,
    UploadPhoto,
    RecordVideo,
    UploadVideo,
    RecordVoice,
    UploadVoice,
    UploadDocument,
    ChooseSticker,
    FindLocation,
    RecordVideoNote,
    UploadVideoNote,
}

impl ChatAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Typing => "typing",
            Self::UploadPhoto => "upload_photo",
            Self::RecordVideo => "record_video",
            Self::UploadVideo => "upload_video",
            Self::RecordVoice => "record_voice",
            Self::UploadVoice => "upload_voice",
            Self::UploadDocument => "upload_document",
            Self::ChooseSticker => "choose_sticker",
            Self::FindLocation => "find_location",
            Self::RecordVideoNote => "record_video_note",
            Self::UploadVideoNote => "upload_video_note",
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::Result;

    use super::*;

    #[test]
    fn unknown_chat_type_ok() -> Result {
        // language=json
        let chat: Chat = serde_json::from_str(r#"{"id": -100, "type": "guild", "title": "Future"}"#)?;
        assert_eq!(chat.kind, ChatType::Other);
        Ok(())
    }

    #[test]
    fn administrator_rights_are_kept_ok() -> Result {
        // language=json
        let member: ChatMember = serde_json::from_str(
            r#"{
                "status": "administrator",
                "user": {"id": 7, "is_bot": false, "first_name": "Bob"},
                "can_be_edited": false,
                "can_delete_messages": true
            }"#,
        )?;
        assert!(member.is_administrator());
        assert_eq!(member.extra["can_delete_messages"], true);
        Ok(())
    }

    #[test]
    fn permissions_skip_unset_ok() -> Result {
        let permissions = ChatPermissions { can_send_messages: Some(true), ..Default::default() };
        // language=json
        assert_eq!(serde_json::to_string(&permissions)?, r#"{"can_send_messages":true}"#);
        Ok(())
    }
}
