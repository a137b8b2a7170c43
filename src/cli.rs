use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tgbot_api::types::AllowedUpdate;
use url::Url;

#[derive(Parser)]
#[command(author, version, about, long_about, propagate_version = true)]
pub struct Cli {
    #[clap(long, env = "BOT_TOKEN", hide_env_values = true)]
    pub bot_token: String,

    /// Bot API root, for example a local Bot API server.
    #[clap(long, env = "BOT_API_URL")]
    pub api_url: Option<Url>,

    /// Timeout of a single call, in seconds.
    #[clap(long, env = "BOT_TIMEOUT_SECS", default_value = "10")]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Test Telegram bot API token.
    GetMe,

    /// Manually check out the bot updates.
    GetUpdates {
        #[clap(long)]
        offset: Option<i64>,

        #[clap(long)]
        limit: Option<u32>,

        #[clap(long)]
        timeout_secs: Option<u64>,

        #[clap(long, value_delimiter = ',', num_args = 1..)]
        allowed_updates: Option<Vec<AllowedUpdate>>,
    },

    /// Send a text message, split into several messages when it is too long.
    SendMessage {
        /// Chat ID or `@channelusername`.
        chat_id: String,

        /// Message text, read from stdin when omitted.
        text: Option<String>,

        #[clap(long)]
        html: bool,
    },

    /// Upload a photo.
    SendPhoto {
        chat_id: String,

        path: PathBuf,

        #[clap(long)]
        caption: Option<String>,
    },

    /// Download a file by its ID.
    Download {
        file_id: String,

        destination: PathBuf,
    },

    /// Point the webhook to the URL.
    SetWebhook {
        url: Url,

        #[clap(long, env = "BOT_WEBHOOK_SECRET_TOKEN", hide_env_values = true)]
        secret_token: Option<String>,

        #[clap(long)]
        drop_pending_updates: bool,
    },

    /// Remove the webhook and switch back to `getUpdates`.
    DeleteWebhook {
        #[clap(long)]
        drop_pending_updates: bool,
    },

    /// Show the current webhook status.
    WebhookInfo,

    /// Parse a webhook request body from stdin and print the update.
    ParseUpdate,
}
