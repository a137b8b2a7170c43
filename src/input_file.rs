//! Files and media sent to the Bot API.
//!
//! See also: <https://core.telegram.org/bots/api#sending-files>.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use bon::Builder;
use reqwest::{Body, multipart::Part};
use tokio::io::AsyncRead;
use tokio_util::io::ReaderStream;
use url::Url;

use crate::{
    prelude::*,
    request::Request,
    types::{MaskPosition, ParseMode, StickerFormat},
};

/// A file to send: either a reference Telegram resolves by itself, or local content to upload.
#[must_use]
#[derive(Debug)]
pub enum InputFile {
    /// `file_id` of a file that already exists on the Telegram servers.
    Id(String),

    /// HTTP URL for Telegram to fetch the file from.
    Url(Url),

    /// Local content, uploaded as a `multipart/form-data` part.
    Upload(Upload),
}

impl InputFile {
    pub fn id(file_id: impl Into<String>) -> Self {
        Self::Id(file_id.into())
    }

    pub const fn url(url: Url) -> Self {
        Self::Url(url)
    }

    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Upload(Upload::path(path))
    }

    pub fn bytes(file_name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self::Upload(Upload::bytes(file_name, data))
    }

    pub fn reader(
        file_name: impl Into<String>,
        reader: impl AsyncRead + Send + Sync + Unpin + 'static,
    ) -> Self {
        Self::Upload(Upload::reader(file_name, reader))
    }

    #[must_use]
    pub const fn is_upload(&self) -> bool {
        matches!(self, Self::Upload(_))
    }

    /// Turn the file into the textual value of its parameter.
    ///
    /// Uploads are moved into the request attachments and referenced as `attach://<name>`.
    pub(crate) fn into_reference(self, request: &mut Request) -> String {
        match self {
            Self::Id(file_id) => file_id,
            Self::Url(url) => url.into(),
            Self::Upload(upload) => format!("attach://{}", request.attach(upload)),
        }
    }
}

impl From<Upload> for InputFile {
    fn from(upload: Upload) -> Self {
        Self::Upload(upload)
    }
}

impl From<Url> for InputFile {
    fn from(url: Url) -> Self {
        Self::Url(url)
    }
}

impl From<PathBuf> for InputFile {
    fn from(path: PathBuf) -> Self {
        Self::path(path)
    }
}

impl From<&Path> for InputFile {
    fn from(path: &Path) -> Self {
        Self::path(path)
    }
}

/// Local file content.
///
/// Paths are opened only when the request is dispatched, and every source is released as soon
/// as the call completes or fails.
#[must_use]
pub struct Upload {
    source: Source,
    file_name: Option<String>,
    mime_type: Option<String>,
}

enum Source {
    Path(PathBuf),
    Bytes(Vec<u8>),
    Reader(Box<dyn AsyncRead + Send + Sync + Unpin>),
}

impl Upload {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self { source: Source::Path(path.into()), file_name: None, mime_type: None }
    }

    pub fn bytes(file_name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            source: Source::Bytes(data.into()),
            file_name: Some(file_name.into()),
            mime_type: None,
        }
    }

    pub fn reader(
        file_name: impl Into<String>,
        reader: impl AsyncRead + Send + Sync + Unpin + 'static,
    ) -> Self {
        Self {
            source: Source::Reader(Box::new(reader)),
            file_name: Some(file_name.into()),
            mime_type: None,
        }
    }

    /// Override the file name sent to Telegram.
    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Override the MIME type, which is guessed from the file name otherwise.
    pub fn mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// File name sent in the part's `Content-Disposition`.
    #[must_use]
    pub fn resolved_file_name(&self) -> Option<String> {
        self.file_name.clone().or_else(|| match &self.source {
            Source::Path(path) => path.file_name().map(|name| name.to_string_lossy().into_owned()),
            Source::Bytes(_) | Source::Reader(_) => None,
        })
    }

    /// Open the source and build the multipart part.
    pub(crate) async fn into_part(self, attachment_name: &str) -> Result<Part> {
        let file_name = self.resolved_file_name().unwrap_or_else(|| attachment_name.to_owned());
        let mime_type = self
            .mime_type
            .or_else(|| mime_guess::from_path(&file_name).first_raw().map(str::to_owned));
        let part = match self.source {
            Source::Path(path) => {
                let file = tokio::fs::File::open(&path).await.map_err(|source| {
                    Error::Attachment { name: attachment_name.to_owned(), source }
                })?;
                let length = file.metadata().await.ok().map(|metadata| metadata.len());
                let body = Body::wrap_stream(ReaderStream::new(file));
                match length {
                    Some(length) => Part::stream_with_length(body, length),
                    None => Part::stream(body),
                }
            }
            Source::Bytes(data) => Part::bytes(data),
            Source::Reader(reader) => Part::stream(Body::wrap_stream(ReaderStream::new(reader))),
        };
        let part = part.file_name(file_name);
        match mime_type {
            Some(mime_type) => part
                .mime_str(&mime_type)
                .map_err(|error| Error::invalid_parameter(attachment_name, error.to_string())),
            None => Ok(part),
        }
    }
}

impl fmt::Debug for Upload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match &self.source {
            Source::Path(path) => format!("{path:?}"),
            Source::Bytes(data) => format!("{} bytes", data.len()),
            Source::Reader(_) => "reader".to_owned(),
        };
        f.debug_struct("Upload")
            .field("source", &source)
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .finish()
    }
}

/// Type of [`InputMedia`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MediaKind {
    Photo,
    Video,
    Animation,
    Audio,
    Document,
}

impl MediaKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Photo => "photo",
            Self::Video => "video",
            Self::Animation => "animation",
            Self::Audio => "audio",
            Self::Document => "document",
        }
    }
}

/// The content of a [media message][1] to be sent.
///
/// [1]: https://core.telegram.org/bots/api#inputmedia
#[must_use]
#[derive(Debug, Builder)]
pub struct InputMedia {
    pub kind: MediaKind,

    #[builder(into)]
    pub media: InputFile,

    #[builder(into)]
    pub thumbnail: Option<InputFile>,

    #[builder(into)]
    pub caption: Option<String>,

    pub parse_mode: Option<ParseMode>,

    pub has_spoiler: Option<bool>,

    /// Any other fields, such as `width`, `duration` or `caption_entities`.
    #[builder(default)]
    pub extra: Map<String, Value>,
}

impl InputMedia {
    pub fn photo(media: impl Into<InputFile>) -> Self {
        Self::builder().kind(MediaKind::Photo).media(media).build()
    }

    pub fn video(media: impl Into<InputFile>) -> Self {
        Self::builder().kind(MediaKind::Video).media(media).build()
    }

    pub fn document(media: impl Into<InputFile>) -> Self {
        Self::builder().kind(MediaKind::Document).media(media).build()
    }

    pub fn audio(media: impl Into<InputFile>) -> Self {
        Self::builder().kind(MediaKind::Audio).media(media).build()
    }

    pub fn animation(media: impl Into<InputFile>) -> Self {
        Self::builder().kind(MediaKind::Animation).media(media).build()
    }

    /// Encode the media descriptor, moving its uploads into the request attachments.
    pub(crate) fn encode(self, request: &mut Request) -> Value {
        let mut object = Map::new();
        object.insert("type".into(), self.kind.as_str().into());
        object.insert("media".into(), self.media.into_reference(request).into());
        if let Some(thumbnail) = self.thumbnail {
            object.insert("thumbnail".into(), thumbnail.into_reference(request).into());
        }
        if let Some(caption) = self.caption {
            object.insert("caption".into(), caption.into());
        }
        if let Some(parse_mode) = self.parse_mode {
            object.insert("parse_mode".into(), parse_mode.as_str().into());
        }
        if let Some(has_spoiler) = self.has_spoiler {
            object.insert("has_spoiler".into(), has_spoiler.into());
        }
        for (key, value) in self.extra {
            object.entry(key).or_insert(value);
        }
        Value::Object(object)
    }
}

/// A sticker to be added to a sticker set.
///
/// See also: <https://core.telegram.org/bots/api#inputsticker>.
#[must_use]
#[derive(Debug, Builder)]
pub struct InputSticker {
    #[builder(into)]
    pub sticker: InputFile,

    pub format: StickerFormat,

    /// One to twenty emoji associated with the sticker.
    #[builder(default)]
    pub emoji_list: Vec<String>,

    pub mask_position: Option<MaskPosition>,

    #[builder(default)]
    pub keywords: Vec<String>,
}

impl InputSticker {
    pub(crate) fn encode(self, request: &mut Request) -> Value {
        let mut object = Map::new();
        object.insert("sticker".into(), self.sticker.into_reference(request).into());
        object.insert("format".into(), self.format.as_str().into());
        object.insert("emoji_list".into(), self.emoji_list.into());
        if let Some(position) = self.mask_position {
            object.insert(
                "mask_position".into(),
                serde_json::json!({
                    "point": position.point,
                    "x_shift": position.x_shift,
                    "y_shift": position.y_shift,
                    "scale": position.scale,
                }),
            );
        }
        if !self.keywords.is_empty() {
            object.insert("keywords".into(), self.keywords.into());
        }
        Value::Object(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_file_name_from_path_ok() {
        let upload = Upload::path("/tmp/photos/cat.jpg");
        assert_eq!(upload.resolved_file_name().as_deref(), Some("cat.jpg"));

        let upload = Upload::path("/tmp/photos/cat.jpg").file_name("dog.jpg");
        assert_eq!(upload.resolved_file_name().as_deref(), Some("dog.jpg"));
    }

    #[tokio::test]
    async fn missing_path_fails_at_dispatch() {
        let upload = Upload::path("/definitely/not/here.png");
        let result = upload.into_part("file0").await;
        assert!(matches!(result, Err(Error::Attachment { name, .. }) if name == "file0"));
    }

    #[test]
    fn encode_media_with_upload_ok() {
        let mut request = Request::new("sendMediaGroup", crate::method::Encoding::Json, false);
        let media = InputMedia::builder()
            .kind(MediaKind::Photo)
            .media(InputFile::bytes("cat.jpg", b"meow".to_vec()))
            .caption("Cat")
            .build();
        let value = media.encode(&mut request);
        // language=json
        assert_eq!(
            value.to_string(),
            r#"{"type":"photo","media":"attach://file0","caption":"Cat"}"#,
        );
        assert_eq!(request.attachments().len(), 1);
    }

    #[test]
    fn encode_sticker_ok() {
        let mut request = Request::new("createNewStickerSet", crate::method::Encoding::Json, false);
        let sticker = InputSticker::builder()
            .sticker(InputFile::bytes("cat.webp", b"meow".to_vec()))
            .format(StickerFormat::Static)
            .emoji_list(vec!["🐱".to_owned()])
            .build();
        // language=json
        assert_eq!(
            sticker.encode(&mut request).to_string(),
            r#"{"sticker":"attach://file0","format":"static","emoji_list":["🐱"]}"#,
        );
    }
}
