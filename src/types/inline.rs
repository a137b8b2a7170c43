use crate::{prelude::*, types::Extra};

/// One result of an inline query.
///
/// The Bot API defines twenty kinds of results, each with its own fields, so apart from `type`
/// and `id` the fields are kept as an open set.
///
/// See also: <https://core.telegram.org/bots/api#inlinequeryresult>.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct InlineQueryResult {
    #[serde(rename = "type")]
    pub kind: String,

    pub id: String,

    #[serde(flatten)]
    pub fields: Extra,
}

impl InlineQueryResult {
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self { kind: kind.into(), id: id.into(), fields: Extra::new() }
    }

    /// [Article][1] sending a plain text message.
    ///
    /// [1]: https://core.telegram.org/bots/api#inlinequeryresultarticle
    pub fn article(
        id: impl Into<String>,
        title: impl Into<String>,
        message_text: impl Into<String>,
    ) -> Self {
        let mut content = Extra::new();
        content.insert("message_text".into(), message_text.into().into());
        Self::new("article", id)
            .field("title", title.into())
            .field("input_message_content", Value::Object(content))
    }

    /// [Photo][1] by URL.
    ///
    /// [1]: https://core.telegram.org/bots/api#inlinequeryresultphoto
    pub fn photo(
        id: impl Into<String>,
        photo_url: impl Into<String>,
        thumbnail_url: impl Into<String>,
    ) -> Self {
        Self::new("photo", id)
            .field("photo_url", photo_url.into())
            .field("thumbnail_url", thumbnail_url.into())
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

/// A message sent via a Web App on behalf of the user.
///
/// See also: <https://core.telegram.org/bots/api#sentwebappmessage>.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SentWebAppMessage {
    pub inline_message_id: Option<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

#[cfg(test)]
mod tests {
    use crate::testing::Result;

    use super::*;

    #[test]
    fn article_ok() -> Result {
        let result = InlineQueryResult::article("1", "Hello", "Hello, world!");
        // language=json
        assert_eq!(
            serde_json::to_string(&result)?,
            r#"{"type":"article","id":"1","title":"Hello","input_message_content":{"message_text":"Hello, world!"}}"#,
        );
        Ok(())
    }
}
