//! Shared HTTP client.

use clap::crate_version;
use reqwest::{
    Client,
    header::{self, HeaderMap, HeaderValue},
};

use crate::prelude::*;

pub fn build_client(timeout: Duration) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::USER_AGENT,
        HeaderValue::from_static(concat!("tgbot-api / ", crate_version!(), " (Rust)")),
    );
    Ok(Client::builder()
        .gzip(true)
        .use_rustls_tls()
        .default_headers(headers)
        .timeout(timeout)
        .pool_idle_timeout(Some(Duration::from_secs(600)))
        .build()?)
}
