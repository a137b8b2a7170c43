use crate::{
    prelude::*,
    types::{
        Chat,
        ChatInviteLink,
        ChatMember,
        Extra,
        Location,
        Message,
        OrderInfo,
        Poll,
        PollAnswer,
        ShippingAddress,
        User,
    },
};

/// This object represents an incoming [update][1].
///
/// At most one of the optional fields is present in any given update.
///
/// [1]: https://core.telegram.org/bots/api#update
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[must_use]
pub struct Update {
    /// The update's unique identifier.
    ///
    /// Update identifiers start from a certain positive number and increase sequentially.
    pub update_id: i64,

    pub message: Option<Message>,
    pub edited_message: Option<Message>,
    pub channel_post: Option<Message>,
    pub edited_channel_post: Option<Message>,
    pub inline_query: Option<InlineQuery>,
    pub chosen_inline_result: Option<ChosenInlineResult>,
    pub callback_query: Option<CallbackQuery>,
    pub shipping_query: Option<ShippingQuery>,
    pub pre_checkout_query: Option<PreCheckoutQuery>,
    pub poll: Option<Poll>,
    pub poll_answer: Option<PollAnswer>,
    pub my_chat_member: Option<ChatMemberUpdated>,
    pub chat_member: Option<ChatMemberUpdated>,
    pub chat_join_request: Option<ChatJoinRequest>,

    /// Update kinds this crate does not declare.
    #[serde(flatten)]
    pub extra: Extra,
}

impl Update {
    /// The message carried by the update: new or edited, in a chat or a channel.
    #[must_use]
    pub fn any_message(&self) -> Option<&Message> {
        self.message
            .as_ref()
            .or(self.edited_message.as_ref())
            .or(self.channel_post.as_ref())
            .or(self.edited_channel_post.as_ref())
    }
}

/// [Update][1] types that the client wants to listen to.
///
/// [1]: https://core.telegram.org/bots/api#update
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[must_use]
pub enum AllowedUpdate {
    Message,
    EditedMessage,
    ChannelPost,
    EditedChannelPost,
    InlineQuery,
    ChosenInlineResult,
    CallbackQuery,
    ShippingQuery,
    PreCheckoutQuery,
    Poll,
    PollAnswer,
    MyChatMember,
    ChatMember,
    ChatJoinRequest,
}

/// An incoming callback query from a callback button in an inline keyboard.
///
/// See also: <https://core.telegram.org/bots/api#callbackquery>.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[must_use]
pub struct CallbackQuery {
    pub id: String,
    pub from: User,
    pub message: Option<Message>,
    pub inline_message_id: Option<String>,
    pub chat_instance: Option<String>,
    pub data: Option<String>,
    pub game_short_name: Option<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// An incoming inline query.
///
/// See also: <https://core.telegram.org/bots/api#inlinequery>.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[must_use]
pub struct InlineQuery {
    pub id: String,
    pub from: User,
    pub query: String,
    pub offset: String,
    pub chat_type: Option<String>,
    pub location: Option<Location>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// A result of an inline query that was chosen by the user and sent to their chat partner.
///
/// See also: <https://core.telegram.org/bots/api#choseninlineresult>.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[must_use]
pub struct ChosenInlineResult {
    pub result_id: String,
    pub from: User,
    pub location: Option<Location>,
    pub inline_message_id: Option<String>,
    pub query: String,

    #[serde(flatten)]
    pub extra: Extra,
}

/// See also: <https://core.telegram.org/bots/api#shippingquery>.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[must_use]
pub struct ShippingQuery {
    pub id: String,
    pub from: User,
    pub invoice_payload: String,
    pub shipping_address: ShippingAddress,

    #[serde(flatten)]
    pub extra: Extra,
}

/// See also: <https://core.telegram.org/bots/api#precheckoutquery>.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[must_use]
pub struct PreCheckoutQuery {
    pub id: String,
    pub from: User,

    /// Three-letter ISO 4217 currency code, or `XTR` for Telegram Stars.
    pub currency: String,

    /// Total price in the smallest units of the currency.
    pub total_amount: i64,

    pub invoice_payload: String,
    pub shipping_option_id: Option<String>,
    pub order_info: Option<OrderInfo>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// Changes in the status of a chat member.
///
/// See also: <https://core.telegram.org/bots/api#chatmemberupdated>.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[must_use]
pub struct ChatMemberUpdated {
    pub chat: Chat,
    pub from: User,
    pub date: i64,
    pub old_chat_member: ChatMember,
    pub new_chat_member: ChatMember,
    pub invite_link: Option<ChatInviteLink>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// A join request sent to a chat.
///
/// See also: <https://core.telegram.org/bots/api#chatjoinrequest>.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[must_use]
pub struct ChatJoinRequest {
    pub chat: Chat,
    pub from: User,
    pub user_chat_id: i64,
    pub date: i64,
    pub bio: Option<String>,
    pub invite_link: Option<ChatInviteLink>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// Current status of a webhook.
///
/// See also: <https://core.telegram.org/bots/api#webhookinfo>.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[must_use]
pub struct WebhookInfo {
    /// Webhook URL, empty if webhook is not set up.
    pub url: String,

    pub has_custom_certificate: bool,
    pub pending_update_count: u32,
    pub ip_address: Option<String>,
    pub last_error_date: Option<i64>,
    pub last_error_message: Option<String>,
    pub max_connections: Option<u32>,
    pub allowed_updates: Option<Vec<String>>,

    #[serde(flatten)]
    pub extra: Extra,
}

#[cfg(test)]
mod tests {
    use crate::testing::Result;

    use super::*;

    #[test]
    fn callback_query_update_ok() -> Result {
        // language=json
        let update: Update = serde_json::from_str(
            r#"{
                "update_id": 100,
                "callback_query": {
                    "id": "4382bfdwdsb323b2d9",
                    "from": {"id": 1, "is_bot": false, "first_name": "Ada"},
                    "chat_instance": "-1",
                    "data": "subscribe:42"
                }
            }"#,
        )?;
        assert_eq!(update.update_id, 100);
        assert_eq!(update.callback_query.and_then(|query| query.data).as_deref(), Some("subscribe:42"));
        Ok(())
    }

    #[test]
    fn unknown_update_kind_ok() -> Result {
        // language=json
        let update: Update =
            serde_json::from_str(r#"{"update_id": 7, "message_reaction": {"chat": {"id": 1}}}"#)?;
        assert!(update.any_message().is_none());
        assert!(update.extra.contains_key("message_reaction"));
        Ok(())
    }

    #[test]
    fn edited_message_is_any_message_ok() -> Result {
        // language=json
        let update: Update =
            serde_json::from_str(r#"{"update_id": 8, "edited_message": {"message_id": 3}}"#)?;
        assert_eq!(update.any_message().map(|message| message.message_id), Some(3));
        Ok(())
    }

    #[test]
    fn allowed_updates_ok() -> Result {
        let allowed = [AllowedUpdate::Message, AllowedUpdate::CallbackQuery];
        // language=json
        assert_eq!(serde_json::to_string(&allowed)?, r#"["message","callback_query"]"#);
        Ok(())
    }
}
