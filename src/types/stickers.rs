use crate::{
    prelude::*,
    types::{Extra, PhotoSize},
};

/// See also: <https://core.telegram.org/bots/api#sticker>.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[must_use]
pub struct Sticker {
    pub file_id: String,
    pub file_unique_id: String,

    /// `regular`, `mask` or `custom_emoji`.
    #[serde(rename = "type")]
    pub kind: String,

    pub width: u32,
    pub height: u32,
    pub is_animated: bool,
    pub is_video: bool,
    pub thumbnail: Option<PhotoSize>,
    pub emoji: Option<String>,
    pub set_name: Option<String>,
    pub mask_position: Option<MaskPosition>,
    pub custom_emoji_id: Option<String>,
    pub file_size: Option<u64>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// See also: <https://core.telegram.org/bots/api#stickerset>.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[must_use]
pub struct StickerSet {
    pub name: String,
    pub title: String,
    pub sticker_type: String,
    pub stickers: Vec<Sticker>,
    pub thumbnail: Option<PhotoSize>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// The position on faces where a mask should be placed by default.
///
/// See also: <https://core.telegram.org/bots/api#maskposition>.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaskPosition {
    /// `forehead`, `eyes`, `mouth` or `chin`.
    pub point: String,

    pub x_shift: f64,
    pub y_shift: f64,
    pub scale: f64,
}

/// Format of a sticker file.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StickerFormat {
    /// `.WEBP` or `.PNG` image.
    Static,

    /// `.TGS` animation.
    Animated,

    /// `.WEBM` video.
    Video,
}

impl StickerFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Animated => "animated",
            Self::Video => "video",
        }
    }
}
