//! Chat administration and chat information.

use crate::{
    Bot,
    input_file::InputFile,
    method::{CHAT_ID, Field, FieldKind, MESSAGE_ID, Method, Shape, USER_ID},
    prelude::*,
    request::Params,
    types::{ChatFullInfo, ChatId, ChatInviteLink, ChatMember, ChatPermissions},
};

const SENDER_CHAT_ID: Field = Field::required("sender_chat_id", FieldKind::Scalar);
const INVITE_LINK: Field = Field::required("invite_link", FieldKind::Scalar);
const PERMISSIONS: Field = Field::required("permissions", FieldKind::Json);

pub const BAN_CHAT_MEMBER: Method<bool> =
    Method::new("banChatMember", Shape::Scalar, &[CHAT_ID, USER_ID]);

pub const UNBAN_CHAT_MEMBER: Method<bool> =
    Method::new("unbanChatMember", Shape::Scalar, &[CHAT_ID, USER_ID]);

pub const RESTRICT_CHAT_MEMBER: Method<bool> =
    Method::new("restrictChatMember", Shape::Scalar, &[CHAT_ID, USER_ID, PERMISSIONS]);

pub const PROMOTE_CHAT_MEMBER: Method<bool> =
    Method::new("promoteChatMember", Shape::Scalar, &[CHAT_ID, USER_ID]);

pub const SET_CHAT_ADMINISTRATOR_CUSTOM_TITLE: Method<bool> = Method::new(
    "setChatAdministratorCustomTitle",
    Shape::Scalar,
    &[CHAT_ID, USER_ID, Field::required("custom_title", FieldKind::Scalar)],
);

pub const BAN_CHAT_SENDER_CHAT: Method<bool> =
    Method::new("banChatSenderChat", Shape::Scalar, &[CHAT_ID, SENDER_CHAT_ID]);

pub const UNBAN_CHAT_SENDER_CHAT: Method<bool> =
    Method::new("unbanChatSenderChat", Shape::Scalar, &[CHAT_ID, SENDER_CHAT_ID]);

pub const SET_CHAT_PERMISSIONS: Method<bool> =
    Method::new("setChatPermissions", Shape::Scalar, &[CHAT_ID, PERMISSIONS]);

pub const EXPORT_CHAT_INVITE_LINK: Method<String> =
    Method::new("exportChatInviteLink", Shape::Scalar, &[CHAT_ID]);

pub const CREATE_CHAT_INVITE_LINK: Method<ChatInviteLink> =
    Method::new("createChatInviteLink", Shape::Object, &[CHAT_ID]);

pub const EDIT_CHAT_INVITE_LINK: Method<ChatInviteLink> =
    Method::new("editChatInviteLink", Shape::Object, &[CHAT_ID, INVITE_LINK]);

pub const REVOKE_CHAT_INVITE_LINK: Method<ChatInviteLink> =
    Method::new("revokeChatInviteLink", Shape::Object, &[CHAT_ID, INVITE_LINK]);

pub const APPROVE_CHAT_JOIN_REQUEST: Method<bool> =
    Method::new("approveChatJoinRequest", Shape::Scalar, &[CHAT_ID, USER_ID]);

pub const DECLINE_CHAT_JOIN_REQUEST: Method<bool> =
    Method::new("declineChatJoinRequest", Shape::Scalar, &[CHAT_ID, USER_ID]);

pub const SET_CHAT_PHOTO: Method<bool> = Method::new(
    "setChatPhoto",
    Shape::Scalar,
    &[CHAT_ID, Field::required("photo", FieldKind::File)],
);

pub const DELETE_CHAT_PHOTO: Method<bool> =
    Method::new("deleteChatPhoto", Shape::Scalar, &[CHAT_ID]);

pub const SET_CHAT_TITLE: Method<bool> = Method::new(
    "setChatTitle",
    Shape::Scalar,
    &[CHAT_ID, Field::required("title", FieldKind::Scalar)],
);

pub const SET_CHAT_DESCRIPTION: Method<bool> = Method::new(
    "setChatDescription",
    Shape::Scalar,
    &[CHAT_ID, Field::optional("description", FieldKind::Scalar)],
);

pub const PIN_CHAT_MESSAGE: Method<bool> =
    Method::new("pinChatMessage", Shape::Scalar, &[CHAT_ID, MESSAGE_ID]);

pub const UNPIN_CHAT_MESSAGE: Method<bool> = Method::new(
    "unpinChatMessage",
    Shape::Scalar,
    &[CHAT_ID, Field::optional("message_id", FieldKind::Scalar)],
);

pub const UNPIN_ALL_CHAT_MESSAGES: Method<bool> =
    Method::new("unpinAllChatMessages", Shape::Scalar, &[CHAT_ID]);

pub const LEAVE_CHAT: Method<bool> = Method::new("leaveChat", Shape::Scalar, &[CHAT_ID]);

pub const GET_CHAT: Method<ChatFullInfo> = Method::new("getChat", Shape::Object, &[CHAT_ID]);

pub const GET_CHAT_ADMINISTRATORS: Method<Vec<ChatMember>> =
    Method::new("getChatAdministrators", Shape::Array, &[CHAT_ID]);

pub const GET_CHAT_MEMBER_COUNT: Method<u32> =
    Method::new("getChatMemberCount", Shape::Scalar, &[CHAT_ID]);

pub const GET_CHAT_MEMBER: Method<ChatMember> =
    Method::new("getChatMember", Shape::Object, &[CHAT_ID, USER_ID]);

pub const SET_CHAT_STICKER_SET: Method<bool> = Method::new(
    "setChatStickerSet",
    Shape::Scalar,
    &[CHAT_ID, Field::required("sticker_set_name", FieldKind::Scalar)],
);

pub const DELETE_CHAT_STICKER_SET: Method<bool> =
    Method::new("deleteChatStickerSet", Shape::Scalar, &[CHAT_ID]);

fn chat(chat_id: impl Into<ChatId>) -> Params {
    Params::new().with("chat_id", chat_id.into())
}

fn chat_user(chat_id: impl Into<ChatId>, user_id: i64) -> Params {
    chat(chat_id).with("user_id", user_id)
}

impl Bot {
    /// Ban the user in a group, supergroup or channel.
    ///
    /// Use `optional` for `until_date` and `revoke_messages`.
    pub async fn ban_chat_member(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
        optional: Params,
    ) -> Result<bool> {
        self.call(&BAN_CHAT_MEMBER, chat_user(chat_id, user_id), optional).await
    }

    /// Unban a previously banned user.
    ///
    /// Pass `only_if_banned` in `optional` to avoid removing a member who was never banned.
    pub async fn unban_chat_member(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
        optional: Params,
    ) -> Result<bool> {
        self.call(&UNBAN_CHAT_MEMBER, chat_user(chat_id, user_id), optional).await
    }

    pub async fn restrict_chat_member(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
        permissions: &ChatPermissions,
        optional: Params,
    ) -> Result<bool> {
        let required = chat_user(chat_id, user_id).with_serialized("permissions", permissions)?;
        self.call(&RESTRICT_CHAT_MEMBER, required, optional).await
    }

    /// Promote or demote the user, the rights are passed as `can_*` flags in `optional`.
    pub async fn promote_chat_member(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
        optional: Params,
    ) -> Result<bool> {
        self.call(&PROMOTE_CHAT_MEMBER, chat_user(chat_id, user_id), optional).await
    }

    pub async fn set_chat_administrator_custom_title(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
        custom_title: impl Into<String>,
    ) -> Result<bool> {
        let required = chat_user(chat_id, user_id).with("custom_title", custom_title.into());
        self.call(&SET_CHAT_ADMINISTRATOR_CUSTOM_TITLE, required, Params::new()).await
    }

    pub async fn ban_chat_sender_chat(
        &self,
        chat_id: impl Into<ChatId>,
        sender_chat_id: i64,
    ) -> Result<bool> {
        let required = chat(chat_id).with("sender_chat_id", sender_chat_id);
        self.call(&BAN_CHAT_SENDER_CHAT, required, Params::new()).await
    }

    pub async fn unban_chat_sender_chat(
        &self,
        chat_id: impl Into<ChatId>,
        sender_chat_id: i64,
    ) -> Result<bool> {
        let required = chat(chat_id).with("sender_chat_id", sender_chat_id);
        self.call(&UNBAN_CHAT_SENDER_CHAT, required, Params::new()).await
    }

    pub async fn set_chat_permissions(
        &self,
        chat_id: impl Into<ChatId>,
        permissions: &ChatPermissions,
        optional: Params,
    ) -> Result<bool> {
        let required = chat(chat_id).with_serialized("permissions", permissions)?;
        self.call(&SET_CHAT_PERMISSIONS, required, optional).await
    }

    /// Generate a new primary invite link, revoking the previous one.
    pub async fn export_chat_invite_link(&self, chat_id: impl Into<ChatId>) -> Result<String> {
        self.call(&EXPORT_CHAT_INVITE_LINK, chat(chat_id), Params::new()).await
    }

    pub async fn create_chat_invite_link(
        &self,
        chat_id: impl Into<ChatId>,
        optional: Params,
    ) -> Result<ChatInviteLink> {
        self.call(&CREATE_CHAT_INVITE_LINK, chat(chat_id), optional).await
    }

    pub async fn edit_chat_invite_link(
        &self,
        chat_id: impl Into<ChatId>,
        invite_link: impl Into<String>,
        optional: Params,
    ) -> Result<ChatInviteLink> {
        let required = chat(chat_id).with("invite_link", invite_link.into());
        self.call(&EDIT_CHAT_INVITE_LINK, required, optional).await
    }

    pub async fn revoke_chat_invite_link(
        &self,
        chat_id: impl Into<ChatId>,
        invite_link: impl Into<String>,
    ) -> Result<ChatInviteLink> {
        let required = chat(chat_id).with("invite_link", invite_link.into());
        self.call(&REVOKE_CHAT_INVITE_LINK, required, Params::new()).await
    }

    pub async fn approve_chat_join_request(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
    ) -> Result<bool> {
        self.call(&APPROVE_CHAT_JOIN_REQUEST, chat_user(chat_id, user_id), Params::new()).await
    }

    pub async fn decline_chat_join_request(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
    ) -> Result<bool> {
        self.call(&DECLINE_CHAT_JOIN_REQUEST, chat_user(chat_id, user_id), Params::new()).await
    }

    /// Set a new profile photo, which must be uploaded.
    pub async fn set_chat_photo(
        &self,
        chat_id: impl Into<ChatId>,
        photo: impl Into<InputFile>,
    ) -> Result<bool> {
        let photo = photo.into();
        if !photo.is_upload() {
            return Err(Error::invalid_parameter("photo", "chat photos must be uploaded"));
        }
        self.call(&SET_CHAT_PHOTO, chat(chat_id).with("photo", photo), Params::new()).await
    }

    pub async fn delete_chat_photo(&self, chat_id: impl Into<ChatId>) -> Result<bool> {
        self.call(&DELETE_CHAT_PHOTO, chat(chat_id), Params::new()).await
    }

    pub async fn set_chat_title(
        &self,
        chat_id: impl Into<ChatId>,
        title: impl Into<String>,
    ) -> Result<bool> {
        self.call(&SET_CHAT_TITLE, chat(chat_id).with("title", title.into()), Params::new()).await
    }

    pub async fn set_chat_description(
        &self,
        chat_id: impl Into<ChatId>,
        optional: Params,
    ) -> Result<bool> {
        self.call(&SET_CHAT_DESCRIPTION, chat(chat_id), optional).await
    }

    pub async fn pin_chat_message(
        &self,
        chat_id: impl Into<ChatId>,
        message_id: i64,
        optional: Params,
    ) -> Result<bool> {
        let required = chat(chat_id).with("message_id", message_id);
        self.call(&PIN_CHAT_MESSAGE, required, optional).await
    }

    /// Unpin the message given in `optional`, or the most recent pinned message.
    pub async fn unpin_chat_message(
        &self,
        chat_id: impl Into<ChatId>,
        optional: Params,
    ) -> Result<bool> {
        self.call(&UNPIN_CHAT_MESSAGE, chat(chat_id), optional).await
    }

    pub async fn unpin_all_chat_messages(&self, chat_id: impl Into<ChatId>) -> Result<bool> {
        self.call(&UNPIN_ALL_CHAT_MESSAGES, chat(chat_id), Params::new()).await
    }

    pub async fn leave_chat(&self, chat_id: impl Into<ChatId>) -> Result<bool> {
        self.call(&LEAVE_CHAT, chat(chat_id), Params::new()).await
    }

    pub async fn get_chat(&self, chat_id: impl Into<ChatId>) -> Result<ChatFullInfo> {
        self.call(&GET_CHAT, chat(chat_id), Params::new()).await
    }

    pub async fn get_chat_administrators(
        &self,
        chat_id: impl Into<ChatId>,
    ) -> Result<Vec<ChatMember>> {
        self.call(&GET_CHAT_ADMINISTRATORS, chat(chat_id), Params::new()).await
    }

    pub async fn get_chat_member_count(&self, chat_id: impl Into<ChatId>) -> Result<u32> {
        self.call(&GET_CHAT_MEMBER_COUNT, chat(chat_id), Params::new()).await
    }

    pub async fn get_chat_member(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
    ) -> Result<ChatMember> {
        self.call(&GET_CHAT_MEMBER, chat_user(chat_id, user_id), Params::new()).await
    }

    pub async fn set_chat_sticker_set(
        &self,
        chat_id: impl Into<ChatId>,
        sticker_set_name: impl Into<String>,
    ) -> Result<bool> {
        let required = chat(chat_id).with("sticker_set_name", sticker_set_name.into());
        self.call(&SET_CHAT_STICKER_SET, required, Params::new()).await
    }

    pub async fn delete_chat_sticker_set(&self, chat_id: impl Into<ChatId>) -> Result<bool> {
        self.call(&DELETE_CHAT_STICKER_SET, chat(chat_id), Params::new()).await
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::Result;

    use super::*;
    use crate::request::Request;

    #[test]
    fn restrict_chat_member_ok() -> Result {
        let permissions = ChatPermissions { can_send_messages: Some(false), ..ChatPermissions::default() };
        let required = chat_user(-100_123, 7).with_serialized("permissions", &permissions)?;
        let optional = Params::new().with("until_date", 1_700_000_000_i64);
        let request = Request::build(&RESTRICT_CHAT_MEMBER, required, optional)?;
        // language=json
        assert_eq!(request.params()["permissions"], r#"{"can_send_messages":false}"#);
        assert_eq!(request.params()["chat_id"], -100_123);
        Ok(())
    }

    #[test]
    fn get_chat_member_count_requires_chat_ok() {
        let result = Request::build(&GET_CHAT_MEMBER_COUNT, Params::new(), Params::new());
        assert!(matches!(result, Err(Error::InvalidParameter { name, .. }) if name == "chat_id"));
    }
}
