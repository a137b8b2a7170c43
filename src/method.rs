//! Per-operation field specifications.
//!
//! Every Bot API method is described by a constant [`Method`]: its name, the fields it requires,
//! the fields that need special encoding, and the shape of its result. The request builder and
//! the hydrator are driven by this table instead of a hand-written type per method.

use std::{fmt, marker::PhantomData};

/// How a parameter value must be validated and encoded.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FieldKind {
    /// Plain scalar: string, number or boolean.
    Scalar,

    /// Chat identifier: integer ID or `@username` string.
    ChatId,

    /// Nested structured value, sent as a JSON-encoded string.
    Json,

    /// [`crate::InputFile`]: a file ID, a URL, or an upload.
    File,

    /// A single [`crate::InputMedia`].
    Media,

    /// A list of [`crate::InputMedia`], as in `sendMediaGroup`.
    MediaGroup,

    /// A single [`crate::InputSticker`].
    Sticker,

    /// A list of [`crate::InputSticker`], as in `createNewStickerSet`.
    Stickers,
}

#[derive(Copy, Clone, Debug)]
pub struct Field {
    pub name: &'static str,
    pub required: bool,
    pub kind: FieldKind,
}

impl Field {
    #[must_use]
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self { name, required: true, kind }
    }

    #[must_use]
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self { name, required: false, kind }
    }
}

/// Declared JSON shape of a method result.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Shape {
    /// String, number or boolean.
    Scalar,

    /// A single object.
    Object,

    /// An array of objects.
    Array,

    /// Either an object or `true`, decided by the actual JSON type.
    ObjectOrBool,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Scalar => "a scalar",
            Self::Object => "an object",
            Self::Array => "an array of objects",
            Self::ObjectOrBool => "an object or a boolean",
        })
    }
}

/// Body encoding when there are no attachments.
///
/// Requests with attachments are always sent as `multipart/form-data`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Encoding {
    /// `POST` with an `application/json` body.
    Json,

    /// `GET` with the parameters in the query string.
    Query,
}

/// Telegram bot API method.
///
/// `R` is the Rust type the result is hydrated into.
#[must_use]
pub struct Method<R> {
    pub name: &'static str,
    pub fields: &'static [Field],
    pub shape: Shape,
    pub encoding: Encoding,

    /// The method holds the connection open for its `timeout` parameter, like `getUpdates`.
    pub long_polling: bool,

    result: PhantomData<fn() -> R>,
}

impl<R> Method<R> {
    pub const fn new(name: &'static str, shape: Shape, fields: &'static [Field]) -> Self {
        Self {
            name,
            fields,
            shape,
            encoding: Encoding::Json,
            long_polling: false,
            result: PhantomData,
        }
    }

    /// Send the parameters in the query string.
    pub const fn query(mut self) -> Self {
        self.encoding = Encoding::Query;
        self
    }

    pub const fn long_polling(mut self) -> Self {
        self.long_polling = true;
        self
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }
}

impl<R> fmt::Debug for Method<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Method")
            .field("name", &self.name)
            .field("shape", &self.shape)
            .field("encoding", &self.encoding)
            .finish_non_exhaustive()
    }
}

pub(crate) const CHAT_ID: Field = Field::required("chat_id", FieldKind::ChatId);
pub(crate) const USER_ID: Field = Field::required("user_id", FieldKind::Scalar);
pub(crate) const MESSAGE_ID: Field = Field::required("message_id", FieldKind::Scalar);
pub(crate) const MESSAGE_THREAD_ID: Field = Field::required("message_thread_id", FieldKind::Scalar);
pub(crate) const REPLY_MARKUP: Field = Field::optional("reply_markup", FieldKind::Json);
pub(crate) const REPLY_PARAMETERS: Field = Field::optional("reply_parameters", FieldKind::Json);
pub(crate) const THUMBNAIL: Field = Field::optional("thumbnail", FieldKind::File);
pub(crate) const CAPTION_ENTITIES: Field = Field::optional("caption_entities", FieldKind::Json);
