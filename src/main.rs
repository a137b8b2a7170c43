mod cli;
mod logging;

use std::{
    fmt::Debug,
    io::{Read, stdin},
};

use anyhow::Context;
use clap::Parser;
use secrecy::SecretString;
use tgbot_api::{
    Bot,
    Config,
    InputFile,
    Params,
    types::{ChatId, ParseMode},
    webhook,
};
use tracing::info;

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _stderr_guard = logging::init()?;

    let config = Config::builder()
        .token(SecretString::from(cli.bot_token))
        .maybe_api_url(cli.api_url)
        .timeout(std::time::Duration::from_secs(cli.timeout_secs))
        .build();
    let bot = Bot::with_config(config).context("failed to set up the bot")?;

    match cli.command {
        Command::GetMe => {
            print_debug(&bot.get_me().await?);
        }

        Command::GetUpdates { offset, limit, timeout_secs, allowed_updates } => {
            let optional = Params::new()
                .with("offset", offset)
                .with("limit", limit)
                .with("timeout", timeout_secs)
                .with_serialized("allowed_updates", &allowed_updates)?;
            for update in bot.get_updates(optional).await? {
                print_debug(&update);
            }
        }

        Command::SendMessage { chat_id, text, html } => {
            let text = match text {
                Some(text) => text,
                None => read_stdin()?,
            };
            let optional = Params::new().with("parse_mode", html.then_some(ParseMode::Html));
            let messages = bot.send_text(parse_chat_id(&chat_id), &text, optional).await?;
            info!(n_messages = messages.len(), "✅ Sent");
            for message in messages {
                print_debug(&message.message_id);
            }
        }

        Command::SendPhoto { chat_id, path, caption } => {
            let optional = Params::new().with("caption", caption);
            let message =
                bot.send_photo(parse_chat_id(&chat_id), InputFile::path(path), optional).await?;
            print_debug(&message.message_id);
        }

        Command::Download { file_id, destination } => {
            let file = bot.get_file(&file_id).await?;
            let n_bytes = bot.download_file(&file, &destination).await?;
            info!(n_bytes, ?destination, "✅ Downloaded");
        }

        Command::SetWebhook { url, secret_token, drop_pending_updates } => {
            let optional = Params::new()
                .with("secret_token", secret_token)
                .with("drop_pending_updates", drop_pending_updates);
            print_debug(&bot.set_webhook(&url, optional).await?);
        }

        Command::DeleteWebhook { drop_pending_updates } => {
            let optional = Params::new().with("drop_pending_updates", drop_pending_updates);
            print_debug(&bot.delete_webhook(optional).await?);
        }

        Command::WebhookInfo => {
            print_debug(&bot.get_webhook_info().await?);
        }

        Command::ParseUpdate => {
            let update = webhook::parse_update(read_stdin()?.as_bytes())?;
            print_debug(&update);
        }
    }

    Ok(())
}

fn parse_chat_id(chat_id: &str) -> ChatId {
    chat_id.parse::<i64>().map_or_else(|_| ChatId::from(chat_id), ChatId::from)
}

fn read_stdin() -> anyhow::Result<String> {
    let mut buffer = String::new();
    stdin().read_to_string(&mut buffer).context("failed to read stdin")?;
    Ok(buffer)
}

fn print_debug<T: Debug + ?Sized>(value: &T) {
    println!("{value:#?}");
}
