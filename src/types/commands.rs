use crate::{
    prelude::*,
    types::{ChatId, Extra},
};

/// <https://core.telegram.org/bots/api#botcommand>
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct BotCommand {
    /// Text of the command; 1-32 characters, lowercase letters, digits and underscores only.
    pub command: String,

    pub description: String,
}

impl BotCommand {
    pub fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
        Self { command: command.into(), description: description.into() }
    }
}

/// The scope to which bot commands are applied.
///
/// See also: <https://core.telegram.org/bots/api#botcommandscope>.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[must_use]
pub enum BotCommandScope {
    Default,
    AllPrivateChats,
    AllGroupChats,
    AllChatAdministrators,
    Chat { chat_id: ChatId },
    ChatAdministrators { chat_id: ChatId },
    ChatMember { chat_id: ChatId, user_id: i64 },
}

/// See also: <https://core.telegram.org/bots/api#botname>.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct BotName {
    pub name: String,

    #[serde(flatten)]
    pub extra: Extra,
}

/// See also: <https://core.telegram.org/bots/api#botdescription>.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct BotDescription {
    pub description: String,

    #[serde(flatten)]
    pub extra: Extra,
}

/// See also: <https://core.telegram.org/bots/api#botshortdescription>.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct BotShortDescription {
    pub short_description: String,

    #[serde(flatten)]
    pub extra: Extra,
}

/// Bot's menu button in a private chat.
///
/// See also: <https://core.telegram.org/bots/api#menubutton>.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[must_use]
pub enum MenuButton {
    Commands,
    WebApp { text: String, web_app: WebAppInfo },
    Default,

    #[serde(other)]
    Other,
}

/// See also: <https://core.telegram.org/bots/api#webappinfo>.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebAppInfo {
    pub url: String,
}

/// Default administrator rights of the bot.
///
/// See also: <https://core.telegram.org/bots/api#chatadministratorrights>.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ChatAdministratorRights {
    pub is_anonymous: bool,
    pub can_manage_chat: bool,
    pub can_delete_messages: bool,
    pub can_manage_video_chats: bool,
    pub can_restrict_members: bool,
    pub can_promote_members: bool,
    pub can_change_info: bool,
    pub can_invite_users: bool,

    #[serde(flatten)]
    pub extra: Extra,
}

#[cfg(test)]
mod tests {
    use crate::testing::Result;

    use super::*;

    #[test]
    fn chat_member_scope_ok() -> Result {
        let scope = BotCommandScope::ChatMember { chat_id: ChatId::from(-100), user_id: 7 };
        // language=json
        assert_eq!(
            serde_json::to_string(&scope)?,
            r#"{"type":"chat_member","chat_id":-100,"user_id":7}"#,
        );
        Ok(())
    }

    #[test]
    fn menu_button_ok() -> Result {
        // language=json
        let button: MenuButton = serde_json::from_str(r#"{"type": "commands"}"#)?;
        assert_eq!(button, MenuButton::Commands);
        let button: MenuButton = serde_json::from_str(r#"{"type": "mini_app_launcher"}"#)?;
        assert_eq!(button, MenuButton::Other);
        Ok(())
    }
}
