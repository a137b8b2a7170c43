//! Bot identity and settings.

use crate::{
    Bot,
    method::{Field, FieldKind, Method, Shape, USER_ID},
    prelude::*,
    request::Params,
    types::{
        BotCommand,
        BotDescription,
        BotName,
        BotShortDescription,
        ChatAdministratorRights,
        File,
        MenuButton,
        User,
        UserProfilePhotos,
    },
};

const SCOPE: Field = Field::optional("scope", FieldKind::Json);
const LANGUAGE_CODE: Field = Field::optional("language_code", FieldKind::Scalar);

pub const GET_ME: Method<User> = Method::new("getMe", Shape::Object, &[]).query();
pub const LOG_OUT: Method<bool> = Method::new("logOut", Shape::Scalar, &[]).query();
pub const CLOSE: Method<bool> = Method::new("close", Shape::Scalar, &[]).query();

pub const SET_MY_COMMANDS: Method<bool> = Method::new(
    "setMyCommands",
    Shape::Scalar,
    &[Field::required("commands", FieldKind::Json), SCOPE, LANGUAGE_CODE],
);

pub const DELETE_MY_COMMANDS: Method<bool> =
    Method::new("deleteMyCommands", Shape::Scalar, &[SCOPE, LANGUAGE_CODE]);

pub const GET_MY_COMMANDS: Method<Vec<BotCommand>> =
    Method::new("getMyCommands", Shape::Array, &[SCOPE, LANGUAGE_CODE]);

pub const SET_MY_NAME: Method<bool> = Method::new(
    "setMyName",
    Shape::Scalar,
    &[Field::optional("name", FieldKind::Scalar), LANGUAGE_CODE],
);

pub const GET_MY_NAME: Method<BotName> = Method::new("getMyName", Shape::Object, &[LANGUAGE_CODE]);

pub const SET_MY_DESCRIPTION: Method<bool> = Method::new(
    "setMyDescription",
    Shape::Scalar,
    &[Field::optional("description", FieldKind::Scalar), LANGUAGE_CODE],
);

pub const GET_MY_DESCRIPTION: Method<BotDescription> =
    Method::new("getMyDescription", Shape::Object, &[LANGUAGE_CODE]);

pub const SET_MY_SHORT_DESCRIPTION: Method<bool> = Method::new(
    "setMyShortDescription",
    Shape::Scalar,
    &[Field::optional("short_description", FieldKind::Scalar), LANGUAGE_CODE],
);

pub const GET_MY_SHORT_DESCRIPTION: Method<BotShortDescription> =
    Method::new("getMyShortDescription", Shape::Object, &[LANGUAGE_CODE]);

pub const SET_CHAT_MENU_BUTTON: Method<bool> = Method::new(
    "setChatMenuButton",
    Shape::Scalar,
    &[
        Field::optional("chat_id", FieldKind::Scalar),
        Field::optional("menu_button", FieldKind::Json),
    ],
);

pub const GET_CHAT_MENU_BUTTON: Method<MenuButton> = Method::new(
    "getChatMenuButton",
    Shape::Object,
    &[Field::optional("chat_id", FieldKind::Scalar)],
);

pub const SET_MY_DEFAULT_ADMINISTRATOR_RIGHTS: Method<bool> = Method::new(
    "setMyDefaultAdministratorRights",
    Shape::Scalar,
    &[
        Field::optional("rights", FieldKind::Json),
        Field::optional("for_channels", FieldKind::Scalar),
    ],
);

pub const GET_MY_DEFAULT_ADMINISTRATOR_RIGHTS: Method<ChatAdministratorRights> = Method::new(
    "getMyDefaultAdministratorRights",
    Shape::Object,
    &[Field::optional("for_channels", FieldKind::Scalar)],
);

pub const GET_USER_PROFILE_PHOTOS: Method<UserProfilePhotos> = Method::new(
    "getUserProfilePhotos",
    Shape::Object,
    &[
        USER_ID,
        Field::optional("offset", FieldKind::Scalar),
        Field::optional("limit", FieldKind::Scalar),
    ],
);

pub const GET_FILE: Method<File> =
    Method::new("getFile", Shape::Object, &[Field::required("file_id", FieldKind::Scalar)]);

impl Bot {
    /// A simple method for testing your bot's authentication token.
    pub async fn get_me(&self) -> Result<User> {
        self.call(&GET_ME, Params::new(), Params::new()).await
    }

    /// Log out from the cloud Bot API server before moving the bot to a local server.
    pub async fn log_out(&self) -> Result<bool> {
        self.call(&LOG_OUT, Params::new(), Params::new()).await
    }

    /// Close the bot instance before moving it from one local server to another.
    pub async fn close(&self) -> Result<bool> {
        self.call(&CLOSE, Params::new(), Params::new()).await
    }

    /// Use `optional` for the `scope` and `language_code`.
    pub async fn set_my_commands(&self, commands: &[BotCommand], optional: Params) -> Result<bool> {
        let required = Params::new().with_serialized("commands", commands)?;
        self.call(&SET_MY_COMMANDS, required, optional).await
    }

    pub async fn delete_my_commands(&self, optional: Params) -> Result<bool> {
        self.call(&DELETE_MY_COMMANDS, Params::new(), optional).await
    }

    pub async fn get_my_commands(&self, optional: Params) -> Result<Vec<BotCommand>> {
        self.call(&GET_MY_COMMANDS, Params::new(), optional).await
    }

    pub async fn set_my_name(&self, optional: Params) -> Result<bool> {
        self.call(&SET_MY_NAME, Params::new(), optional).await
    }

    pub async fn get_my_name(&self, optional: Params) -> Result<BotName> {
        self.call(&GET_MY_NAME, Params::new(), optional).await
    }

    pub async fn set_my_description(&self, optional: Params) -> Result<bool> {
        self.call(&SET_MY_DESCRIPTION, Params::new(), optional).await
    }

    pub async fn get_my_description(&self, optional: Params) -> Result<BotDescription> {
        self.call(&GET_MY_DESCRIPTION, Params::new(), optional).await
    }

    pub async fn set_my_short_description(&self, optional: Params) -> Result<bool> {
        self.call(&SET_MY_SHORT_DESCRIPTION, Params::new(), optional).await
    }

    pub async fn get_my_short_description(&self, optional: Params) -> Result<BotShortDescription> {
        self.call(&GET_MY_SHORT_DESCRIPTION, Params::new(), optional).await
    }

    pub async fn set_chat_menu_button(&self, optional: Params) -> Result<bool> {
        self.call(&SET_CHAT_MENU_BUTTON, Params::new(), optional).await
    }

    pub async fn get_chat_menu_button(&self, optional: Params) -> Result<MenuButton> {
        self.call(&GET_CHAT_MENU_BUTTON, Params::new(), optional).await
    }

    pub async fn set_my_default_administrator_rights(&self, optional: Params) -> Result<bool> {
        self.call(&SET_MY_DEFAULT_ADMINISTRATOR_RIGHTS, Params::new(), optional).await
    }

    pub async fn get_my_default_administrator_rights(
        &self,
        optional: Params,
    ) -> Result<ChatAdministratorRights> {
        self.call(&GET_MY_DEFAULT_ADMINISTRATOR_RIGHTS, Params::new(), optional).await
    }

    pub async fn get_user_profile_photos(
        &self,
        user_id: i64,
        optional: Params,
    ) -> Result<UserProfilePhotos> {
        self.call(&GET_USER_PROFILE_PHOTOS, Params::new().with("user_id", user_id), optional).await
    }

    /// Get basic information about a file and prepare it for downloading.
    ///
    /// See [`Bot::download_file`].
    pub async fn get_file(&self, file_id: &str) -> Result<File> {
        self.call(&GET_FILE, Params::new().with("file_id", file_id), Params::new()).await
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::Result;

    use super::*;
    use crate::request::Request;

    #[test]
    fn set_my_commands_request_ok() -> Result {
        let commands = [BotCommand::new("start", "Start the bot")];
        let required = Params::new().with_serialized("commands", &commands)?;
        let request = Request::build(&SET_MY_COMMANDS, required, Params::new())?;
        // language=json
        assert_eq!(
            request.params()["commands"],
            r#"[{"command":"start","description":"Start the bot"}]"#,
        );
        Ok(())
    }

    #[test]
    fn get_me_uses_query_ok() {
        assert_eq!(GET_ME.encoding, crate::method::Encoding::Query);
        assert_eq!(GET_FILE.encoding, crate::method::Encoding::Json);
    }
}
