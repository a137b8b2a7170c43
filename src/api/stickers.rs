//! [Stickers](https://core.telegram.org/bots/api#stickers).

use crate::{
    Bot,
    input_file::{InputFile, InputSticker},
    method::{CHAT_ID, Field, FieldKind, Method, REPLY_MARKUP, REPLY_PARAMETERS, Shape, USER_ID},
    prelude::*,
    request::Params,
    types::{ChatId, File, MaskPosition, Message, Sticker, StickerFormat, StickerSet},
};

const NAME: Field = Field::required("name", FieldKind::Scalar);
const STICKER: Field = Field::required("sticker", FieldKind::Scalar);

pub const SEND_STICKER: Method<Message> = Method::new(
    "sendSticker",
    Shape::Object,
    &[CHAT_ID, Field::required("sticker", FieldKind::File), REPLY_PARAMETERS, REPLY_MARKUP],
);

pub const GET_STICKER_SET: Method<StickerSet> =
    Method::new("getStickerSet", Shape::Object, &[NAME]);

pub const GET_CUSTOM_EMOJI_STICKERS: Method<Vec<Sticker>> = Method::new(
    "getCustomEmojiStickers",
    Shape::Array,
    &[Field::required("custom_emoji_ids", FieldKind::Json)],
);

pub const UPLOAD_STICKER_FILE: Method<File> = Method::new(
    "uploadStickerFile",
    Shape::Object,
    &[
        USER_ID,
        Field::required("sticker", FieldKind::File),
        Field::required("sticker_format", FieldKind::Scalar),
    ],
);

pub const CREATE_NEW_STICKER_SET: Method<bool> = Method::new(
    "createNewStickerSet",
    Shape::Scalar,
    &[
        USER_ID,
        NAME,
        Field::required("title", FieldKind::Scalar),
        Field::required("stickers", FieldKind::Stickers),
    ],
);

pub const ADD_STICKER_TO_SET: Method<bool> = Method::new(
    "addStickerToSet",
    Shape::Scalar,
    &[USER_ID, NAME, Field::required("sticker", FieldKind::Sticker)],
);

pub const SET_STICKER_POSITION_IN_SET: Method<bool> = Method::new(
    "setStickerPositionInSet",
    Shape::Scalar,
    &[STICKER, Field::required("position", FieldKind::Scalar)],
);

pub const DELETE_STICKER_FROM_SET: Method<bool> =
    Method::new("deleteStickerFromSet", Shape::Scalar, &[STICKER]);

pub const REPLACE_STICKER_IN_SET: Method<bool> = Method::new(
    "replaceStickerInSet",
    Shape::Scalar,
    &[
        USER_ID,
        NAME,
        Field::required("old_sticker", FieldKind::Scalar),
        Field::required("sticker", FieldKind::Sticker),
    ],
);

pub const SET_STICKER_EMOJI_LIST: Method<bool> = Method::new(
    "setStickerEmojiList",
    Shape::Scalar,
    &[STICKER, Field::required("emoji_list", FieldKind::Json)],
);

pub const SET_STICKER_KEYWORDS: Method<bool> = Method::new(
    "setStickerKeywords",
    Shape::Scalar,
    &[STICKER, Field::optional("keywords", FieldKind::Json)],
);

pub const SET_STICKER_MASK_POSITION: Method<bool> = Method::new(
    "setStickerMaskPosition",
    Shape::Scalar,
    &[STICKER, Field::optional("mask_position", FieldKind::Json)],
);

pub const SET_STICKER_SET_TITLE: Method<bool> = Method::new(
    "setStickerSetTitle",
    Shape::Scalar,
    &[NAME, Field::required("title", FieldKind::Scalar)],
);

pub const SET_STICKER_SET_THUMBNAIL: Method<bool> = Method::new(
    "setStickerSetThumbnail",
    Shape::Scalar,
    &[
        NAME,
        USER_ID,
        Field::required("format", FieldKind::Scalar),
        Field::optional("thumbnail", FieldKind::File),
    ],
);

pub const DELETE_STICKER_SET: Method<bool> =
    Method::new("deleteStickerSet", Shape::Scalar, &[NAME]);

impl Bot {
    pub async fn send_sticker(
        &self,
        chat_id: impl Into<ChatId>,
        sticker: impl Into<InputFile>,
        optional: Params,
    ) -> Result<Message> {
        let required =
            Params::new().with("chat_id", chat_id.into()).with("sticker", sticker.into());
        self.call(&SEND_STICKER, required, optional).await
    }

    pub async fn get_sticker_set(&self, name: &str) -> Result<StickerSet> {
        self.call(&GET_STICKER_SET, Params::new().with("name", name), Params::new()).await
    }

    pub async fn get_custom_emoji_stickers(
        &self,
        custom_emoji_ids: &[String],
    ) -> Result<Vec<Sticker>> {
        let required = Params::new().with_serialized("custom_emoji_ids", custom_emoji_ids)?;
        self.call(&GET_CUSTOM_EMOJI_STICKERS, required, Params::new()).await
    }

    /// Upload a sticker file for later use in [`Bot::create_new_sticker_set`] and the like.
    pub async fn upload_sticker_file(
        &self,
        user_id: i64,
        sticker: impl Into<InputFile>,
        sticker_format: StickerFormat,
    ) -> Result<File> {
        let required = Params::new()
            .with("user_id", user_id)
            .with("sticker", sticker.into())
            .with("sticker_format", sticker_format.as_str());
        self.call(&UPLOAD_STICKER_FILE, required, Params::new()).await
    }

    pub async fn create_new_sticker_set(
        &self,
        user_id: i64,
        name: impl Into<String>,
        title: impl Into<String>,
        stickers: Vec<InputSticker>,
        optional: Params,
    ) -> Result<bool> {
        let required = Params::new()
            .with("user_id", user_id)
            .with("name", name.into())
            .with("title", title.into())
            .with("stickers", stickers);
        self.call(&CREATE_NEW_STICKER_SET, required, optional).await
    }

    pub async fn add_sticker_to_set(
        &self,
        user_id: i64,
        name: impl Into<String>,
        sticker: InputSticker,
    ) -> Result<bool> {
        let required =
            Params::new().with("user_id", user_id).with("name", name.into()).with("sticker", sticker);
        self.call(&ADD_STICKER_TO_SET, required, Params::new()).await
    }

    pub async fn set_sticker_position_in_set(&self, sticker: &str, position: u32) -> Result<bool> {
        let required = Params::new().with("sticker", sticker).with("position", position);
        self.call(&SET_STICKER_POSITION_IN_SET, required, Params::new()).await
    }

    pub async fn delete_sticker_from_set(&self, sticker: &str) -> Result<bool> {
        let required = Params::new().with("sticker", sticker);
        self.call(&DELETE_STICKER_FROM_SET, required, Params::new()).await
    }

    pub async fn replace_sticker_in_set(
        &self,
        user_id: i64,
        name: impl Into<String>,
        old_sticker: impl Into<String>,
        sticker: InputSticker,
    ) -> Result<bool> {
        let required = Params::new()
            .with("user_id", user_id)
            .with("name", name.into())
            .with("old_sticker", old_sticker.into())
            .with("sticker", sticker);
        self.call(&REPLACE_STICKER_IN_SET, required, Params::new()).await
    }

    pub async fn set_sticker_emoji_list(
        &self,
        sticker: &str,
        emoji_list: &[String],
    ) -> Result<bool> {
        let required =
            Params::new().with("sticker", sticker).with_serialized("emoji_list", emoji_list)?;
        self.call(&SET_STICKER_EMOJI_LIST, required, Params::new()).await
    }

    pub async fn set_sticker_keywords(&self, sticker: &str, keywords: &[String]) -> Result<bool> {
        let optional = Params::new().with_serialized("keywords", keywords)?;
        self.call(&SET_STICKER_KEYWORDS, Params::new().with("sticker", sticker), optional).await
    }

    /// Change the mask position of a mask sticker, or remove it with `None`.
    pub async fn set_sticker_mask_position(
        &self,
        sticker: &str,
        mask_position: Option<&MaskPosition>,
    ) -> Result<bool> {
        let optional = match mask_position {
            Some(mask_position) => Params::new().with_serialized("mask_position", mask_position)?,
            None => Params::new(),
        };
        let required = Params::new().with("sticker", sticker);
        self.call(&SET_STICKER_MASK_POSITION, required, optional).await
    }

    pub async fn set_sticker_set_title(
        &self,
        name: impl Into<String>,
        title: impl Into<String>,
    ) -> Result<bool> {
        let required = Params::new().with("name", name.into()).with("title", title.into());
        self.call(&SET_STICKER_SET_TITLE, required, Params::new()).await
    }

    /// Use `optional` for the `thumbnail`, leave it out to drop the thumbnail.
    pub async fn set_sticker_set_thumbnail(
        &self,
        name: impl Into<String>,
        user_id: i64,
        format: StickerFormat,
        optional: Params,
    ) -> Result<bool> {
        let required = Params::new()
            .with("name", name.into())
            .with("user_id", user_id)
            .with("format", format.as_str());
        self.call(&SET_STICKER_SET_THUMBNAIL, required, optional).await
    }

    pub async fn delete_sticker_set(&self, name: &str) -> Result<bool> {
        self.call(&DELETE_STICKER_SET, Params::new().with("name", name), Params::new()).await
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::Result;
    use serde_json::json;

    use super::*;
    use crate::request::Request;

    #[test]
    fn create_new_sticker_set_ok() -> Result {
        let stickers = vec![
            InputSticker::builder()
                .sticker(InputFile::bytes("a.webp", b"a".to_vec()))
                .format(StickerFormat::Static)
                .emoji_list(vec!["😀".to_owned()])
                .build(),
            InputSticker::builder()
                .sticker(InputFile::id("CAACAgIAAxk"))
                .format(StickerFormat::Video)
                .emoji_list(vec!["🎬".to_owned()])
                .keywords(vec!["movie".to_owned()])
                .build(),
        ];
        let required = Params::new()
            .with("user_id", 1_i64)
            .with("name", "pack_by_test_bot")
            .with("title", "Pack")
            .with("stickers", stickers);
        let request = Request::build(&CREATE_NEW_STICKER_SET, required, Params::new())?;
        assert_eq!(request.attachments().len(), 1);
        let stickers: Value = serde_json::from_str(request.params()["stickers"].as_str().unwrap())?;
        // language=json
        assert_eq!(
            stickers,
            json!([
                {"sticker": "attach://file0", "format": "static", "emoji_list": ["😀"]},
                {"sticker": "CAACAgIAAxk", "format": "video", "emoji_list": ["🎬"], "keywords": ["movie"]},
            ]),
        );
        Ok(())
    }
}
