use crate::{
    prelude::*,
    types::{Extra, MessageEntity, User},
};

/// One size of a photo or a file / sticker thumbnail.
///
/// See also: <https://core.telegram.org/bots/api#photosize>.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[must_use]
pub struct PhotoSize {
    pub file_id: String,
    pub file_unique_id: String,
    pub width: u32,
    pub height: u32,
    pub file_size: Option<u64>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// See also: <https://core.telegram.org/bots/api#animation>.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[must_use]
pub struct Animation {
    pub file_id: String,
    pub file_unique_id: String,
    pub width: u32,
    pub height: u32,
    pub duration: u32,
    pub thumbnail: Option<PhotoSize>,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
    pub file_size: Option<u64>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// See also: <https://core.telegram.org/bots/api#audio>.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[must_use]
pub struct Audio {
    pub file_id: String,
    pub file_unique_id: String,
    pub duration: u32,
    pub performer: Option<String>,
    pub title: Option<String>,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
    pub file_size: Option<u64>,
    pub thumbnail: Option<PhotoSize>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// General file, as opposed to photos, voice messages and audio files.
///
/// See also: <https://core.telegram.org/bots/api#document>.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[must_use]
pub struct Document {
    pub file_id: String,
    pub file_unique_id: String,
    pub thumbnail: Option<PhotoSize>,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
    pub file_size: Option<u64>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// See also: <https://core.telegram.org/bots/api#video>.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[must_use]
pub struct Video {
    pub file_id: String,
    pub file_unique_id: String,
    pub width: u32,
    pub height: u32,
    pub duration: u32,
    pub thumbnail: Option<PhotoSize>,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
    pub file_size: Option<u64>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// See also: <https://core.telegram.org/bots/api#videonote>.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[must_use]
pub struct VideoNote {
    pub file_id: String,
    pub file_unique_id: String,
    pub length: u32,
    pub duration: u32,
    pub thumbnail: Option<PhotoSize>,
    pub file_size: Option<u64>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// See also: <https://core.telegram.org/bots/api#voice>.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[must_use]
pub struct Voice {
    pub file_id: String,
    pub file_unique_id: String,
    pub duration: u32,
    pub mime_type: Option<String>,
    pub file_size: Option<u64>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// A file ready to be downloaded.
///
/// The file can be downloaded with [`crate::Bot::download_file`]; the link is valid for at least
/// an hour.
///
/// See also: <https://core.telegram.org/bots/api#file>.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[must_use]
pub struct File {
    pub file_id: String,
    pub file_unique_id: String,
    pub file_size: Option<u64>,
    pub file_path: Option<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// See also: <https://core.telegram.org/bots/api#contact>.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[must_use]
pub struct Contact {
    pub phone_number: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub user_id: Option<i64>,
    pub vcard: Option<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// An animated emoji that displays a random value.
///
/// See also: <https://core.telegram.org/bots/api#dice>.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[must_use]
pub struct Dice {
    pub emoji: String,
    pub value: u8,

    #[serde(flatten)]
    pub extra: Extra,
}

/// A point on the map.
///
/// See also: <https://core.telegram.org/bots/api#location>.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[must_use]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub horizontal_accuracy: Option<f64>,
    pub live_period: Option<u32>,
    pub heading: Option<u16>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// See also: <https://core.telegram.org/bots/api#venue>.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[must_use]
pub struct Venue {
    pub location: Location,
    pub title: String,
    pub address: String,
    pub foursquare_id: Option<String>,
    pub google_place_id: Option<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// See also: <https://core.telegram.org/bots/api#polloption>.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[must_use]
pub struct PollOption {
    pub text: String,
    pub voter_count: u32,

    #[serde(flatten)]
    pub extra: Extra,
}

/// Poll option to be sent.
///
/// See also: <https://core.telegram.org/bots/api#inputpolloption>.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[must_use]
pub struct InputPollOption {
    pub text: String,
}

impl From<&str> for InputPollOption {
    fn from(text: &str) -> Self {
        Self { text: text.to_owned() }
    }
}

impl From<String> for InputPollOption {
    fn from(text: String) -> Self {
        Self { text }
    }
}

/// See also: <https://core.telegram.org/bots/api#poll>.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[must_use]
pub struct Poll {
    pub id: String,
    pub question: String,
    pub options: Vec<PollOption>,
    pub total_voter_count: u32,
    pub is_closed: bool,
    pub is_anonymous: bool,

    /// `regular` or `quiz`.
    #[serde(rename = "type")]
    pub kind: String,

    pub allows_multiple_answers: bool,
    pub correct_option_id: Option<u32>,
    pub explanation: Option<String>,

    #[serde(default)]
    pub explanation_entities: Vec<MessageEntity>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// An answer of a user in a non-anonymous poll.
///
/// See also: <https://core.telegram.org/bots/api#pollanswer>.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[must_use]
pub struct PollAnswer {
    pub poll_id: String,
    pub user: Option<User>,

    /// 0-based identifiers of the chosen answer options; empty if the vote was retracted.
    #[serde(default)]
    pub option_ids: Vec<u32>,

    #[serde(flatten)]
    pub extra: Extra,
}
