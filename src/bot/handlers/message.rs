use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use teloxide::utils::command::BotCommands;

use crate::bot::commands::Command;
use crate::laundry::dispatcher::LoadDispatcher;
use crate::laundry::registry::MachineRegistry;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    registry: Arc<MachineRegistry>,
    dispatcher: Arc<LoadDispatcher>,
) -> ResponseResult<()> {
    match cmd {
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string())
                .await?;
        }
        Command::Start => {
            let username = msg
                .from()
                .and_then(|u| u.username.as_ref())
                .map_or("unknown", |v| v);
            tracing::info!("User {} started the bot", username);

            let keyboard = InlineKeyboardMarkup::new(vec![vec![
                InlineKeyboardButton::callback("Status", "menu:status"),
                InlineKeyboardButton::callback("Load", "menu:load"),
            ]]);
            bot.send_message(msg.chat.id, "What would you like to do?")
                .reply_markup(keyboard)
                .await?;
        }
        Command::Status => {
            crate::bot::commands::status::handle_status(bot, msg, registry.as_ref()).await?;
        }
        Command::Load { machine } => {
            crate::bot::commands::load::handle_load(
                bot,
                msg,
                machine,
                registry.as_ref(),
                dispatcher.as_ref(),
            )
            .await?;
        }
    }
    Ok(())
}
