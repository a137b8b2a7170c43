use crate::{
    prelude::*,
    types::{Extra, PhotoSize, User},
};

/// See also: <https://core.telegram.org/bots/api#game>.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[must_use]
pub struct Game {
    pub title: String,
    pub description: String,
    pub photo: Vec<PhotoSize>,
    pub text: Option<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// One row of the high scores table for a game.
///
/// See also: <https://core.telegram.org/bots/api#gamehighscore>.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[must_use]
pub struct GameHighScore {
    pub position: u32,
    pub user: User,
    pub score: i64,

    #[serde(flatten)]
    pub extra: Extra,
}
