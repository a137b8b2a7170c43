//! Telegram Bot API client.
//!
//! One method per Bot API endpoint on [`Bot`], all sharing a single pipeline: build the request
//! from the method's field table, send it, decode the response envelope, and hydrate the result.
//!
//! ```no_run
//! # async fn run() -> tgbot_api::Result {
//! use tgbot_api::{Bot, Params};
//!
//! let bot = Bot::new("123456:ABC-DEF")?;
//! let me = bot.get_me().await?;
//! bot.send_message(42, format!("Hello from {}", me.first_name), Params::new()).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
mod bot;
mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod hydrate;
pub mod input_file;
pub mod method;
mod prelude;
pub mod request;
#[cfg(test)]
mod testing;
pub mod text;
pub mod transport;
pub mod types;
pub mod webhook;

pub use self::{
    api::{editing::MessageTarget, payments::InvoiceParams},
    bot::Bot,
    config::Config,
    error::{Error, ResponseParameters, Result},
    hydrate::ObjectOrBool,
    input_file::{InputFile, InputMedia, InputSticker, MediaKind, Upload},
    request::{Param, Params},
};
