use std::path::Path;

use futures::{Stream, StreamExt, TryStreamExt, stream};
use secrecy::SecretString;
use serde::de::DeserializeOwned;

use crate::{
    api::updates::GET_UPDATES,
    config::Config,
    envelope,
    hydrate::hydrate,
    method::Method,
    prelude::*,
    request::{Params, Request},
    text,
    transport::Transport,
    types::{ChatId, File, Message, Update},
};

/// Telegram bot API connection.
///
/// Every call runs the same pipeline: the request is built from the method's field table, sent
/// once, its envelope decoded, and the result hydrated into the method's result type.
#[must_use]
#[derive(Clone)]
pub struct Bot {
    transport: Transport,
    config: Config,
}

impl Bot {
    pub fn new(token: impl Into<SecretString>) -> Result<Self> {
        Self::with_config(Config::new(token))
    }

    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { transport: Transport::new(&config)?, config })
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Call the Telegram Bot API method.
    ///
    /// `required` holds the method's required parameters; `optional` is an open bag of any other
    /// parameters the method accepts.
    #[instrument(skip_all, fields(method = method.name))]
    pub async fn call<R: DeserializeOwned>(
        &self,
        method: &Method<R>,
        required: Params,
        optional: Params,
    ) -> Result<R> {
        let request = Request::build(method, required, optional)?;
        let delivery = self.transport.send(request).await;
        hydrate(envelope::decode(delivery)?, method.shape)
    }

    /// Send a text message, split into several messages when it exceeds the configured limit.
    ///
    /// The parts are sent one after another; the first failure stops the sequence, leaving the
    /// preceding parts delivered.
    #[instrument(skip_all, fields(chat_id = %chat_id))]
    pub async fn send_text(
        &self,
        chat_id: ChatId,
        text: &str,
        optional: Params,
    ) -> Result<Vec<Message>> {
        if !self.config.split_long_text || text.chars().count() <= self.config.max_text_length {
            return Ok(vec![self.send_message(chat_id, text, optional).await?]);
        }
        let chunks = text::split(text, self.config.max_text_length);
        info!(n_chunks = chunks.len(), "✂️ Splitting the long text…");
        let mut messages = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            let message = self.send_message(chat_id.clone(), chunk, optional.try_clone()?).await?;
            messages.push(message);
        }
        Ok(messages)
    }

    /// Convert the bot into a [`Stream`] of [`Update`]'s, long polling `getUpdates`.
    ///
    /// Each poll completes before the next one starts, and the offset advances past the last
    /// received update.
    pub fn updates(
        self,
        offset: i64,
        poll_timeout: Duration,
    ) -> impl Stream<Item = Result<Update>> {
        let advance = move |(this, offset): (Self, i64)| async move {
            let optional = Params::new()
                .with("offset", offset)
                .with("timeout", poll_timeout.as_secs());
            let updates = this.call(&GET_UPDATES, Params::new(), optional).await?;
            let next_offset =
                updates.last().map_or(offset, |last_update: &Update| last_update.update_id + 1);
            info!(n = updates.len(), next_offset, "Received Telegram updates");
            Ok::<_, Error>(Some((stream::iter(updates).map(Ok), (this, next_offset))))
        };
        stream::try_unfold((self, offset), advance).try_flatten()
    }

    /// Download the file, previously resolved with [`Bot::get_file`], into `destination`.
    ///
    /// Returns the number of bytes written.
    pub async fn download_file(&self, file: &File, destination: &Path) -> Result<u64> {
        let file_path = file.file_path.as_deref().ok_or_else(|| {
            Error::invalid_parameter("file_path", "the file is not ready for download")
        })?;
        self.transport.download(file_path, destination).await
    }
}

#[cfg(test)]
mod tests {
    use mockito::{Matcher, Server};
    use serde_json::json;
    use url::Url;

    use super::*;
    use crate::{
        InputFile,
        api::{editing::MessageTarget, messages::SEND_MESSAGE},
        hydrate::ObjectOrBool,
        testing::Result,
        types::ParseMode,
    };

    const TOKEN: &str = "123:test";

    fn bot(server: &Server) -> Result<Bot> {
        let config = Config::builder().token(TOKEN).api_url(Url::parse(&server.url())?).build();
        Ok(Bot::with_config(config)?)
    }

    #[tokio::test]
    async fn get_me_ok() -> Result {
        let mut server = Server::new_async().await;
        // language=json
        let mock = server
            .mock("GET", "/bot123:test/getMe")
            .with_body(r#"{"ok": true, "result": {"id": 42, "is_bot": true, "first_name": "Test", "can_join_groups": true}}"#)
            .create_async()
            .await;
        let me = bot(&server)?.get_me().await?;
        mock.assert_async().await;
        assert_eq!(me.id, 42);
        assert!(me.is_bot);
        assert_eq!(me.extra["can_join_groups"], true);
        Ok(())
    }

    #[tokio::test]
    async fn api_error_ok() -> Result {
        let mut server = Server::new_async().await;
        // language=json
        server
            .mock("POST", "/bot123:test/sendMessage")
            .with_status(403)
            .with_body(r#"{"ok": false, "error_code": 403, "description": "Forbidden: bot was blocked by the user"}"#)
            .create_async()
            .await;
        let result = bot(&server)?.send_message(ChatId::from(1), "Hi", Params::new()).await;
        match result {
            Err(Error::Api { code, message, .. }) => {
                assert_eq!(code, 403);
                assert_eq!(message, "Forbidden: bot was blocked by the user");
            }
            other => panic!("unexpected result: {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn send_message_json_body_ok() -> Result {
        let mut server = Server::new_async().await;
        // language=json
        let mock = server
            .mock("POST", "/bot123:test/sendMessage")
            .match_body(Matcher::Json(json!({"chat_id": 42, "text": "Hello", "parse_mode": "HTML"})))
            .with_body(r#"{"ok": true, "result": {"message_id": 1, "date": 0, "chat": {"id": 42, "type": "private"}}}"#)
            .create_async()
            .await;
        let optional = Params::new().with("parse_mode", ParseMode::Html);
        let message = bot(&server)?.send_message(ChatId::from(42), "Hello", optional).await?;
        mock.assert_async().await;
        assert_eq!(message.message_id, 1);
        Ok(())
    }

    #[tokio::test]
    async fn send_text_splits_long_text_ok() -> Result {
        let mut server = Server::new_async().await;
        let text: String = (0..900).map(|i| format!("line {i:04}\n")).collect();
        assert_eq!(text.len(), 9000);
        let expected_chunks = [&text[..4096], &text[4096..8192], &text[8192..]];
        assert_eq!(expected_chunks.concat(), text);
        let mut mocks = Vec::new();
        for chunk in expected_chunks {
            // language=json
            let mock = server
                .mock("POST", "/bot123:test/sendMessage")
                .match_body(Matcher::PartialJson(json!({"chat_id": 42, "text": chunk})))
                .with_body(r#"{"ok": true, "result": {"message_id": 1}}"#)
                .expect(1)
                .create_async()
                .await;
            mocks.push(mock);
        }
        let messages = bot(&server)?.send_text(ChatId::from(42), &text, Params::new()).await?;
        for mock in mocks {
            mock.assert_async().await;
        }
        assert_eq!(messages.len(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn send_text_stops_on_failure_ok() -> Result {
        let mut server = Server::new_async().await;
        // language=json
        let mock = server
            .mock("POST", "/bot123:test/sendMessage")
            .with_status(429)
            .with_body(r#"{"ok": false, "error_code": 429, "description": "Too Many Requests: retry after 5", "parameters": {"retry_after": 5}}"#)
            .expect(1)
            .create_async()
            .await;
        let text = "a".repeat(9000);
        let error = bot(&server)?
            .send_text(ChatId::from(42), &text, Params::new())
            .await
            .expect_err("the first part must fail");
        mock.assert_async().await;
        assert_eq!(error.retry_after(), Some(Duration::from_secs(5)));
        Ok(())
    }

    #[tokio::test]
    async fn send_photo_multipart_ok() -> Result {
        let mut server = Server::new_async().await;
        let file = tempfile::Builder::new().suffix(".jpg").tempfile()?;
        std::fs::write(file.path(), b"not really a jpeg")?;
        // language=json
        let mock = server
            .mock("POST", "/bot123:test/sendPhoto")
            .match_header("content-type", Matcher::Regex("^multipart/form-data".into()))
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(r#"name="file0"; filename=".+\.jpg""#.into()),
                Matcher::Regex("attach://file0".into()),
                Matcher::Regex("not really a jpeg".into()),
            ]))
            .with_body(r#"{"ok": true, "result": {"message_id": 7}}"#)
            .create_async()
            .await;
        let message = bot(&server)?
            .send_photo(ChatId::from(42), InputFile::path(file.path()), Params::new())
            .await?;
        mock.assert_async().await;
        assert_eq!(message.message_id, 7);
        Ok(())
    }

    #[tokio::test]
    async fn edit_message_text_union_ok() -> Result {
        let mut server = Server::new_async().await;
        // language=json
        server
            .mock("POST", "/bot123:test/editMessageText")
            .with_body(r#"{"ok": true, "result": true}"#)
            .create_async()
            .await;
        let edited = bot(&server)?
            .edit_message_text(MessageTarget::Inline("abc".into()), "Edited", Params::new())
            .await?;
        assert_eq!(edited, ObjectOrBool::Bool(true));
        Ok(())
    }

    #[tokio::test]
    async fn missing_result_is_malformed_ok() -> Result {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/bot123:test/sendMessage")
            .with_body(r#"{"ok": true}"#)
            .create_async()
            .await;
        let required = Params::new().with("chat_id", 1_i64).with("text", "Hi");
        let result = bot(&server)?.call(&SEND_MESSAGE, required, Params::new()).await;
        assert!(matches!(result, Err(Error::MalformedResponse { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn transport_error_ok() -> Result {
        let config = Config::builder()
            .token(TOKEN)
            .api_url(Url::parse("http://127.0.0.1:9")?)
            .timeout(Duration::from_secs(1))
            .build();
        let result = Bot::with_config(config)?.get_me().await;
        assert!(matches!(result, Err(Error::Transport(_))));
        Ok(())
    }

    #[tokio::test]
    async fn updates_advance_offset_ok() -> Result {
        let mut server = Server::new_async().await;
        // language=json
        let first = server
            .mock("POST", "/bot123:test/getUpdates")
            .match_body(Matcher::PartialJson(json!({"offset": 0})))
            .with_body(r#"{"ok": true, "result": [{"update_id": 10}, {"update_id": 11}]}"#)
            .create_async()
            .await;
        // language=json
        let second = server
            .mock("POST", "/bot123:test/getUpdates")
            .match_body(Matcher::PartialJson(json!({"offset": 12})))
            .with_body(r#"{"ok": true, "result": [{"update_id": 12}]}"#)
            .create_async()
            .await;
        let updates: Vec<Update> = bot(&server)?
            .updates(0, Duration::from_secs(0))
            .take(3)
            .try_collect()
            .await?;
        first.assert_async().await;
        second.assert_async().await;
        let ids: Vec<_> = updates.iter().map(|update| update.update_id).collect();
        assert_eq!(ids, [10, 11, 12]);
        Ok(())
    }

    #[tokio::test]
    async fn download_file_ok() -> Result {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/file/bot123:test/photos/file_1.jpg")
            .with_body("jpeg bytes")
            .create_async()
            .await;
        // language=json
        let file: File = serde_json::from_str(
            r#"{"file_id": "x", "file_unique_id": "y", "file_path": "photos/file_1.jpg"}"#,
        )?;
        let directory = tempfile::tempdir()?;
        let destination = directory.path().join("file_1.jpg");
        let n_bytes = bot(&server)?.download_file(&file, &destination).await?;
        mock.assert_async().await;
        assert_eq!(n_bytes, 10);
        assert_eq!(std::fs::read(&destination)?, b"jpeg bytes");
        Ok(())
    }

    #[tokio::test]
    async fn interrupted_download_is_removed_ok() -> Result {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/file/bot123:test/videos/file_2.mp4")
            .with_chunked_body(|writer| {
                writer.write_all(b"first part")?;
                writer.flush()?;
                std::thread::sleep(Duration::from_secs(2));
                writer.write_all(b"never received")
            })
            .create_async()
            .await;
        let config = Config::builder()
            .token(TOKEN)
            .api_url(Url::parse(&server.url())?)
            .download_timeout(Duration::from_millis(200))
            .build();
        // language=json
        let file: File = serde_json::from_str(
            r#"{"file_id": "x", "file_unique_id": "y", "file_path": "videos/file_2.mp4"}"#,
        )?;
        let directory = tempfile::tempdir()?;
        let destination = directory.path().join("file_2.mp4");
        let result = Bot::with_config(config)?.download_file(&file, &destination).await;
        assert!(matches!(result, Err(Error::Transport(_))), "unexpected result: {result:?}");
        assert!(!destination.exists());
        Ok(())
    }

    #[tokio::test]
    async fn download_file_without_path_fails() -> Result {
        let server = Server::new_async().await;
        // language=json
        let file: File = serde_json::from_str(r#"{"file_id": "x", "file_unique_id": "y"}"#)?;
        let result = bot(&server)?.download_file(&file, Path::new("unused")).await;
        assert!(matches!(result, Err(Error::InvalidParameter { .. })));
        Ok(())
    }
}
