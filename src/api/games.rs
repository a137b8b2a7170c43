//! [Games](https://core.telegram.org/bots/api#games).

use crate::{
    Bot,
    api::editing::MessageTarget,
    hydrate::ObjectOrBool,
    method::{CHAT_ID, Field, FieldKind, Method, REPLY_MARKUP, REPLY_PARAMETERS, Shape, USER_ID},
    prelude::*,
    request::Params,
    types::{GameHighScore, Message},
};

pub const SEND_GAME: Method<Message> = Method::new(
    "sendGame",
    Shape::Object,
    &[
        CHAT_ID,
        Field::required("game_short_name", FieldKind::Scalar),
        REPLY_PARAMETERS,
        REPLY_MARKUP,
    ],
);

pub const SET_GAME_SCORE: Method<ObjectOrBool<Message>> = Method::new(
    "setGameScore",
    Shape::ObjectOrBool,
    &[USER_ID, Field::required("score", FieldKind::Scalar)],
);

pub const GET_GAME_HIGH_SCORES: Method<Vec<GameHighScore>> =
    Method::new("getGameHighScores", Shape::Array, &[USER_ID]);

impl Bot {
    /// Games can only be sent to private chats and groups, so the chat is an integer ID.
    pub async fn send_game(
        &self,
        chat_id: i64,
        game_short_name: impl Into<String>,
        optional: Params,
    ) -> Result<Message> {
        let required =
            Params::new().with("chat_id", chat_id).with("game_short_name", game_short_name.into());
        self.call(&SEND_GAME, required, optional).await
    }

    pub async fn set_game_score(
        &self,
        target: MessageTarget,
        user_id: i64,
        score: u64,
        optional: Params,
    ) -> Result<ObjectOrBool<Message>> {
        let required = target.into_params().with("user_id", user_id).with("score", score);
        self.call(&SET_GAME_SCORE, required, optional).await
    }

    pub async fn get_game_high_scores(
        &self,
        target: MessageTarget,
        user_id: i64,
    ) -> Result<Vec<GameHighScore>> {
        let required = target.into_params().with("user_id", user_id);
        self.call(&GET_GAME_HIGH_SCORES, required, Params::new()).await
    }
}
