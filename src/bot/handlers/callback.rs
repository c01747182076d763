use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::laundry::dispatcher::LoadDispatcher;
use crate::laundry::registry::MachineRegistry;
use crate::laundry::status;
use crate::utils::validation::{validate_chat_id, validate_machine_token};

pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    registry: Arc<MachineRegistry>,
    dispatcher: Arc<LoadDispatcher>,
) -> ResponseResult<()> {
    let user_id = q.from.id.0;
    let username = q.from.username.as_ref().map_or("unknown", |v| v);
    let chat_id = q.message.as_ref().map(|m| m.chat.id.0).unwrap_or(0);

    if let Some(data) = q.data.clone() {
        tracing::info!(
            "Callback received: '{}' from user {} ({}) in chat {}",
            data,
            username,
            user_id,
            chat_id
        );

        match data.as_str() {
            "menu:status" => {
                bot.answer_callback_query(q.id).await?;
                if let Some(message) = q.message {
                    let report = status::report(registry.as_ref()).await.join("\n");
                    bot.edit_message_text(message.chat.id, message.id, report)
                        .await?;
                }
            }
            "menu:load" => {
                bot.answer_callback_query(q.id).await?;
                if let Some(message) = q.message {
                    let keyboard = load_menu_keyboard(registry.as_ref()).await;
                    bot.edit_message_text(
                        message.chat.id,
                        message.id,
                        "Which machine would you like to load?",
                    )
                    .reply_markup(keyboard)
                    .await?;
                }
            }
            other => {
                if let Some(machine_id) = other.strip_prefix("load:") {
                    handle_load_callback(bot, q, machine_id, dispatcher.as_ref()).await?;
                } else {
                    bot.answer_callback_query(q.id).text("Unknown action").await?;
                }
            }
        }
    } else {
        bot.answer_callback_query(q.id)
            .text("Invalid callback data format")
            .await?;
    }

    Ok(())
}

async fn handle_load_callback(
    bot: Bot,
    q: CallbackQuery,
    machine_id: &str,
    dispatcher: &LoadDispatcher,
) -> ResponseResult<()> {
    bot.answer_callback_query(q.id.clone()).await?;

    let chat_id = q.message.as_ref().map(|m| m.chat.id.0).unwrap_or(0);

    if let Err(e) = validate_machine_token(machine_id) {
        tracing::warn!("Callback with invalid machine token '{}': {}", machine_id, e);
        return Ok(());
    }

    if let Err(e) = validate_chat_id(chat_id) {
        tracing::warn!("Refusing claim from invalid chat {}: {}", chat_id, e);
        return Ok(());
    }

    let reply = match dispatcher.claim(machine_id, chat_id).await {
        Ok(outcome) => outcome.message().to_string(),
        Err(e) => {
            tracing::error!("Claim for '{}' failed: {}", machine_id, e);
            format!("Unknown machine '{machine_id}'.")
        }
    };

    if let Some(message) = q.message {
        bot.edit_message_text(message.chat.id, message.id, reply)
            .await?;
    }

    Ok(())
}

/// Machine picker keyboard: two machines per row, pool order, so the
/// washers land on the top row and the dryers below.
async fn load_menu_keyboard(registry: &MachineRegistry) -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = Vec::new();
    for pair in registry.entries().await.chunks(2) {
        rows.push(
            pair.iter()
                .map(|(id, name)| {
                    InlineKeyboardButton::callback(name.clone(), format!("load:{id}"))
                })
                .collect(),
        );
    }
    InlineKeyboardMarkup::new(rows)
}
