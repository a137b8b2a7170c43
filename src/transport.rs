//! Transport dispatcher: exactly one HTTP call per request, no retries.

use std::path::Path;

use futures::TryStreamExt;
use reqwest::{Client, Response, StatusCode, multipart::Form};
use secrecy::{ExposeSecret, SecretString};
use tokio::{fs::File, io::AsyncWriteExt};
use url::Url;

use crate::{
    client::build_client,
    config::Config,
    method::Encoding,
    prelude::*,
    request::Request,
};

/// Outcome of a dispatched request.
#[must_use]
#[derive(Debug)]
pub enum Delivery {
    /// The server answered, with any status.
    Received { status: StatusCode, body: Vec<u8> },

    /// The request never produced a response body.
    Failed(Error),
}

#[must_use]
#[derive(Clone)]
pub struct Transport {
    client: Client,
    token: SecretString,
    api_root: Url,
    timeout: Duration,
    download_timeout: Duration,
}

impl Transport {
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            client: build_client(config.timeout)?,
            token: config.token.clone(),
            api_root: config.api_root()?,
            timeout: config.timeout,
            download_timeout: config.download_timeout,
        })
    }

    /// Dispatch the request.
    ///
    /// The request is consumed: its attachments are opened here and released when the call
    /// returns, whatever the outcome.
    #[instrument(skip_all, fields(method = request.method()))]
    pub async fn send(&self, request: Request) -> Delivery {
        match self.try_send(request).await {
            Ok((status, body)) => {
                debug!(%status, n_bytes = body.len(), "Received response");
                Delivery::Received { status, body }
            }
            Err(error) => {
                debug!("Failed to send the request: {error:#}");
                Delivery::Failed(error)
            }
        }
    }

    async fn try_send(&self, request: Request) -> Result<(StatusCode, Vec<u8>)> {
        let url = self.join(&format!("bot{}/{}", self.token.expose_secret(), request.method()));
        let timeout = self.timeout_for(&request);
        let builder = if request.is_multipart() {
            debug!(n_attachments = request.attachments().len(), "Sending multipart request…");
            let (params, attachments) = request.into_parts();
            let mut form = Form::new();
            for (key, value) in params {
                let text = match value {
                    Value::String(text) => text,
                    value => value.to_string(),
                };
                form = form.text(key, text);
            }
            for attachment in attachments {
                let part = attachment.upload.into_part(&attachment.name).await?;
                form = form.part(attachment.name, part);
            }
            self.client.post(url).multipart(form)
        } else {
            match request.encoding() {
                Encoding::Json => {
                    debug!("Sending JSON request…");
                    self.client.post(url).json(request.params())
                }
                Encoding::Query => {
                    debug!("Sending query request…");
                    self.client.get(url).query(request.params())
                }
            }
        };
        let response = builder.timeout(timeout).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        Ok((status, body.to_vec()))
    }

    /// Long polling holds the connection for its own `timeout` on top of the usual one.
    fn timeout_for(&self, request: &Request) -> Duration {
        if request.is_long_polling() {
            let poll_secs =
                request.params().get("timeout").and_then(Value::as_u64).unwrap_or_default();
            self.timeout + Duration::from_secs(poll_secs)
        } else {
            self.timeout
        }
    }

    /// Stream a file from the file storage into `destination`, returning the number of bytes.
    ///
    /// A partially written `destination` is removed when the download fails.
    #[instrument(skip_all, fields(file_path = file_path))]
    pub async fn download(&self, file_path: &str, destination: &Path) -> Result<u64> {
        let url = self.join(&format!("file/bot{}/{file_path}", self.token.expose_secret()));
        info!(?destination, "⬇️ Downloading…");
        let response = self
            .client
            .get(url)
            .timeout(self.download_timeout)
            .send()
            .await?
            .error_for_status()?;
        let mut file = File::create(destination).await?;
        match write_body(response, &mut file).await {
            Ok(n_bytes) => {
                info!(n_bytes, "Downloaded");
                Ok(n_bytes)
            }
            Err(error) => {
                drop(file);
                if let Err(remove_error) = tokio::fs::remove_file(destination).await {
                    warn!("Failed to remove the partial download: {remove_error:#}");
                }
                Err(error)
            }
        }
    }

    fn join(&self, tail: &str) -> Url {
        let mut url = self.api_root.clone();
        let base = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{base}/{tail}"));
        url
    }
}

async fn write_body(response: Response, file: &mut File) -> Result<u64> {
    let mut stream = response.bytes_stream();
    let mut n_bytes = 0;
    while let Some(chunk) = stream.try_next().await? {
        file.write_all(&chunk).await?;
        n_bytes += chunk.len() as u64;
    }
    file.flush().await?;
    Ok(n_bytes)
}

#[cfg(test)]
mod tests {
    use crate::testing::Result;

    use super::*;

    #[test]
    fn join_keeps_base_path_ok() -> Result {
        let config = Config::builder()
            .token("123:abc")
            .api_url(Url::parse("http://localhost:8081/telegram/")?)
            .build();
        let transport = Transport::new(&config)?;
        assert_eq!(
            transport.join("bot123:abc/getMe").as_str(),
            "http://localhost:8081/telegram/bot123:abc/getMe",
        );
        Ok(())
    }
}
