//! Request builder: merges parameters, encodes nested values, and extracts attachments.

use crate::{
    input_file::{InputFile, InputMedia, InputSticker, Upload},
    method::{Encoding, Field, FieldKind, Method},
    prelude::*,
    types::{ChatId, ParseMode},
};

/// A single parameter value before encoding.
#[derive(Debug)]
pub enum Param {
    Value(Value),
    File(InputFile),
    Media(InputMedia),
    MediaGroup(Vec<InputMedia>),
    Sticker(InputSticker),
    Stickers(Vec<InputSticker>),
}

impl Param {
    const fn is_null(&self) -> bool {
        matches!(self, Self::Value(Value::Null))
    }
}

impl From<Value> for Param {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<InputFile> for Param {
    fn from(file: InputFile) -> Self {
        Self::File(file)
    }
}

impl From<InputMedia> for Param {
    fn from(media: InputMedia) -> Self {
        Self::Media(media)
    }
}

impl From<Vec<InputMedia>> for Param {
    fn from(media: Vec<InputMedia>) -> Self {
        Self::MediaGroup(media)
    }
}

impl From<InputSticker> for Param {
    fn from(sticker: InputSticker) -> Self {
        Self::Sticker(sticker)
    }
}

impl From<Vec<InputSticker>> for Param {
    fn from(stickers: Vec<InputSticker>) -> Self {
        Self::Stickers(stickers)
    }
}

impl From<ChatId> for Param {
    fn from(chat_id: ChatId) -> Self {
        match chat_id {
            ChatId::Integer(chat_id) => Self::Value(chat_id.into()),
            ChatId::Username(username) => Self::Value(username.into()),
        }
    }
}

impl From<ParseMode> for Param {
    fn from(parse_mode: ParseMode) -> Self {
        Self::Value(parse_mode.as_str().into())
    }
}

impl<T: Into<Param>> From<Option<T>> for Param {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Value(Value::Null), Into::into)
    }
}

macro_rules! impl_from_scalar {
    ($($type:ty),*) => {
        $(
            impl From<$type> for Param {
                fn from(value: $type) -> Self {
                    Self::Value(value.into())
                }
            }
        )*
    };
}

impl_from_scalar!(bool, i32, i64, u32, u64, f64, String, &str);

/// Ordered parameter bag.
///
/// Used for both the required parameters of a call and the open bag of optional ones.
#[must_use]
#[derive(Debug, Default)]
pub struct Params(Vec<(String, Param)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the parameter, replacing a previous value under the same key.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Param>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set a structured parameter, such as `reply_markup`, from any serializable value.
    pub fn with_serialized<T: Serialize + ?Sized>(
        self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<Self> {
        let key = key.into();
        let value = serde_json::to_value(value)
            .map_err(|error| Error::invalid_parameter(&key, format!("{error:#}")))?;
        Ok(self.with(key, value))
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Param>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((key, value)),
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Param> {
        self.0.iter().find(|(existing, _)| existing == key).map(|(_, value)| value)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Copy a bag of plain values, so that it can be sent along with several requests.
    pub(crate) fn try_clone(&self) -> Result<Self> {
        self.0
            .iter()
            .map(|(key, param)| match param {
                Param::Value(value) => Ok((key.clone(), Param::Value(value.clone()))),
                _ => Err(Error::invalid_parameter(key, "cannot be repeated across requests")),
            })
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<Param>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |params, (key, value)| params.with(key, value))
    }
}

impl IntoIterator for Params {
    type Item = (String, Param);
    type IntoIter = std::vec::IntoIter<(String, Param)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Upload referenced from the request body as `attach://<name>`.
#[derive(Debug)]
pub struct Attachment {
    pub name: String,
    pub upload: Upload,
}

/// A request ready for dispatch: flat scalar parameters plus the attachments.
#[must_use]
#[derive(Debug)]
pub struct Request {
    method: &'static str,
    encoding: Encoding,
    long_polling: bool,
    params: Map<String, Value>,
    attachments: Vec<Attachment>,
}

impl Request {
    pub(crate) fn new(method: &'static str, encoding: Encoding, long_polling: bool) -> Self {
        Self { method, encoding, long_polling, params: Map::new(), attachments: Vec::new() }
    }

    /// Build the request for the method.
    ///
    /// Required parameters win over optional ones under the same key, and `null` values are
    /// dropped.
    pub fn build<R>(method: &Method<R>, required: Params, optional: Params) -> Result<Self> {
        for field in method.fields.iter().filter(|field| field.required) {
            match required.get(field.name) {
                None => return Err(Error::invalid_parameter(field.name, "missing")),
                Some(param) if param.is_null() => {
                    return Err(Error::invalid_parameter(field.name, "must not be null"));
                }
                Some(param) => validate(field, param)?,
            }
        }

        let mut request = Self::new(method.name, method.encoding, method.long_polling);
        let mut merged = required;
        for (key, param) in optional {
            if merged.contains(&key) {
                warn!(
                    method = method.name,
                    key = %key,
                    "Ignoring an optional override of a required parameter",
                );
                continue;
            }
            if let Some(field) = method.field(&key)
                && !param.is_null()
            {
                validate(field, &param)?;
            }
            merged.0.push((key, param));
        }
        for (key, param) in merged {
            if param.is_null() {
                continue;
            }
            let value = request.encode(param);
            request.params.insert(key, value);
        }
        Ok(request)
    }

    fn encode(&mut self, param: Param) -> Value {
        match param {
            Param::Value(value @ (Value::Object(_) | Value::Array(_))) => {
                Value::String(value.to_string())
            }
            Param::Value(value) => value,
            Param::File(file) => Value::String(file.into_reference(self)),
            Param::Media(media) => Value::String(media.encode(self).to_string()),
            Param::MediaGroup(group) => {
                let group: Vec<Value> = group.into_iter().map(|media| media.encode(self)).collect();
                Value::String(Value::Array(group).to_string())
            }
            Param::Sticker(sticker) => Value::String(sticker.encode(self).to_string()),
            Param::Stickers(stickers) => {
                let stickers: Vec<Value> =
                    stickers.into_iter().map(|sticker| sticker.encode(self)).collect();
                Value::String(Value::Array(stickers).to_string())
            }
        }
    }

    /// Move the upload into the attachments and return its generated name.
    pub(crate) fn attach(&mut self, upload: Upload) -> String {
        let name = format!("file{}", self.attachments.len());
        self.attachments.push(Attachment { name: name.clone(), upload });
        name
    }

    #[must_use]
    pub const fn method(&self) -> &'static str {
        self.method
    }

    #[must_use]
    pub const fn encoding(&self) -> Encoding {
        self.encoding
    }

    #[must_use]
    pub const fn is_long_polling(&self) -> bool {
        self.long_polling
    }

    #[must_use]
    pub const fn params(&self) -> &Map<String, Value> {
        &self.params
    }

    #[must_use]
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    #[must_use]
    pub fn is_multipart(&self) -> bool {
        !self.attachments.is_empty()
    }

    pub(crate) fn into_parts(self) -> (Map<String, Value>, Vec<Attachment>) {
        (self.params, self.attachments)
    }
}

fn validate(field: &Field, param: &Param) -> Result {
    let valid = match (field.kind, param) {
        (FieldKind::ChatId, Param::Value(Value::Number(number))) => number.is_i64(),
        (FieldKind::ChatId, Param::Value(Value::String(username))) => !username.is_empty(),
        (FieldKind::Scalar, Param::Value(value)) => !value.is_object() && !value.is_array(),
        (FieldKind::Json, Param::Value(_)) => true,
        (FieldKind::File, Param::File(_) | Param::Value(Value::String(_))) => true,
        (FieldKind::Media, Param::Media(_)) => true,
        (FieldKind::MediaGroup, Param::MediaGroup(group)) => !group.is_empty(),
        (FieldKind::Sticker, Param::Sticker(_)) => true,
        (FieldKind::Stickers, Param::Stickers(stickers)) => !stickers.is_empty(),
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        let message = format!("expected {:?}, got {param:?}", field.kind);
        Err(Error::invalid_parameter(field.name, message))
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::Result;
    use serde_json::json;

    use super::*;
    use crate::{method::Shape, types::Message};

    const SEND_MESSAGE: Method<Message> = Method::new(
        "sendMessage",
        Shape::Object,
        &[
            Field::required("chat_id", FieldKind::ChatId),
            Field::required("text", FieldKind::Scalar),
            Field::optional("reply_markup", FieldKind::Json),
        ],
    );

    const SEND_PHOTO: Method<Message> = Method::new(
        "sendPhoto",
        Shape::Object,
        &[Field::required("chat_id", FieldKind::ChatId), Field::required("photo", FieldKind::File)],
    );

    const SEND_MEDIA_GROUP: Method<Vec<Message>> = Method::new(
        "sendMediaGroup",
        Shape::Array,
        &[
            Field::required("chat_id", FieldKind::ChatId),
            Field::required("media", FieldKind::MediaGroup),
        ],
    );

    fn required() -> Params {
        Params::new().with("chat_id", 42_i64).with("text", "Hello")
    }

    #[test]
    fn only_required_parameters_ok() -> Result {
        let request = Request::build(&SEND_MESSAGE, required(), Params::new())?;
        assert_eq!(Value::Object(request.params().clone()), json!({"chat_id": 42, "text": "Hello"}));
        assert!(!request.is_multipart());
        Ok(())
    }

    #[test]
    fn required_wins_over_optional_ok() -> Result {
        let optional = Params::new().with("text", "Overridden").with("disable_notification", true);
        let request = Request::build(&SEND_MESSAGE, required(), optional)?;
        assert_eq!(request.params()["text"], "Hello");
        assert_eq!(request.params()["disable_notification"], true);
        Ok(())
    }

    #[test]
    fn null_parameters_are_dropped_ok() -> Result {
        let optional = Params::new().with("parse_mode", Option::<ParseMode>::None);
        let request = Request::build(&SEND_MESSAGE, required(), optional)?;
        assert!(!request.params().contains_key("parse_mode"));
        Ok(())
    }

    #[test]
    fn nested_values_are_json_encoded_ok() -> Result {
        let markup = json!({"inline_keyboard": [[{"text": "Test", "url": "https://example.org"}]]});
        let optional = Params::new().with("reply_markup", markup);
        let request = Request::build(&SEND_MESSAGE, required(), optional)?;
        // language=json
        assert_eq!(
            request.params()["reply_markup"],
            r#"{"inline_keyboard":[[{"text":"Test","url":"https://example.org"}]]}"#,
        );
        Ok(())
    }

    #[test]
    fn missing_required_parameter_fails() {
        let required = Params::new().with("chat_id", 42_i64);
        let result = Request::build(&SEND_MESSAGE, required, Params::new().with("text", "Hi"));
        assert!(matches!(result, Err(Error::InvalidParameter { name, .. }) if name == "text"));
    }

    #[test]
    fn invalid_chat_id_fails() {
        let required = Params::new().with("chat_id", json!({"id": 1})).with("text", "Hi");
        let result = Request::build(&SEND_MESSAGE, required, Params::new());
        assert!(matches!(result, Err(Error::InvalidParameter { name, .. }) if name == "chat_id"));

        let required = Params::new().with("chat_id", 1.5).with("text", "Hi");
        assert!(Request::build(&SEND_MESSAGE, required, Params::new()).is_err());
    }

    #[test]
    fn username_chat_id_ok() -> Result {
        let required = Params::new().with("chat_id", ChatId::from("@channel")).with("text", "Hi");
        let request = Request::build(&SEND_MESSAGE, required, Params::new())?;
        assert_eq!(request.params()["chat_id"], "@channel");
        Ok(())
    }

    #[test]
    fn photo_upload_is_attached_ok() -> Result {
        let required = Params::new()
            .with("chat_id", 42_i64)
            .with("photo", InputFile::bytes("cat.jpg", b"meow".to_vec()));
        let request = Request::build(&SEND_PHOTO, required, Params::new())?;
        assert!(request.is_multipart());
        assert_eq!(request.params()["photo"], "attach://file0");
        assert_eq!(request.attachments().len(), 1);
        assert_eq!(request.attachments()[0].name, "file0");
        Ok(())
    }

    #[test]
    fn photo_by_file_id_is_not_attached_ok() -> Result {
        let required =
            Params::new().with("chat_id", 42_i64).with("photo", InputFile::id("AgACAgIAAxk"));
        let request = Request::build(&SEND_PHOTO, required, Params::new())?;
        assert!(!request.is_multipart());
        assert_eq!(request.params()["photo"], "AgACAgIAAxk");
        Ok(())
    }

    #[test]
    fn media_group_uploads_are_attached_ok() -> Result {
        let media = vec![
            InputMedia::photo(InputFile::bytes("1.jpg", b"one".to_vec())),
            InputMedia::photo(InputFile::id("existing")),
            InputMedia::builder()
                .kind(crate::input_file::MediaKind::Video)
                .media(InputFile::bytes("2.mp4", b"two".to_vec()))
                .thumbnail(InputFile::bytes("2.jpg", b"thumb".to_vec()))
                .build(),
        ];
        let required = Params::new().with("chat_id", 42_i64).with("media", media);
        let request = Request::build(&SEND_MEDIA_GROUP, required, Params::new())?;

        let names: Vec<_> = request.attachments().iter().map(|attachment| &*attachment.name).collect();
        assert_eq!(names, ["file0", "file1", "file2"]);

        let media: Value = serde_json::from_str(request.params()["media"].as_str().unwrap())?;
        // language=json
        assert_eq!(
            media,
            json!([
                {"type": "photo", "media": "attach://file0"},
                {"type": "photo", "media": "existing"},
                {"type": "video", "media": "attach://file1", "thumbnail": "attach://file2"},
            ]),
        );
        Ok(())
    }

    #[test]
    fn try_clone_values_ok() -> Result {
        let params = Params::new().with("parse_mode", ParseMode::Html).with("protect_content", true);
        let copy = params.try_clone()?;
        assert_eq!(copy.len(), 2);
        assert!(copy.contains("parse_mode"));

        let params = Params::new().with("thumbnail", InputFile::bytes("t.jpg", b"t".to_vec()));
        assert!(params.try_clone().is_err());
        Ok(())
    }

    #[test]
    fn empty_media_group_fails() {
        let required = Params::new().with("chat_id", 42_i64).with("media", Vec::<InputMedia>::new());
        let result = Request::build(&SEND_MEDIA_GROUP, required, Params::new());
        assert!(matches!(result, Err(Error::InvalidParameter { name, .. }) if name == "media"));
    }
}
