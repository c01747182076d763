use teloxide::prelude::*;

use crate::laundry::dispatcher::LoadDispatcher;
use crate::laundry::registry::MachineRegistry;
use crate::utils::validation::validate_machine_token;

pub async fn handle_load(
    bot: Bot,
    msg: Message,
    machine: String,
    registry: &MachineRegistry,
    dispatcher: &LoadDispatcher,
) -> ResponseResult<()> {
    let machine_id = machine.trim().to_lowercase();
    let chat_id = msg.chat.id.0;
    let user_id = msg.from().map(|u| u.id.0 as i64).unwrap_or(0);
    let username = msg
        .from()
        .and_then(|u| u.username.as_ref())
        .map_or("unknown", |v| v);

    tracing::info!(
        "Load command for '{}' by {} ({}) in chat {}",
        machine_id,
        username,
        user_id,
        chat_id
    );

    if let Err(e) = validate_machine_token(&machine_id) {
        tracing::warn!("Load command with invalid machine token: {}", e);
        bot.send_message(msg.chat.id, format!("{e}. Try /load washer1"))
            .await?;
        return Ok(());
    }

    match dispatcher.claim(&machine_id, chat_id).await {
        Ok(outcome) => {
            bot.send_message(msg.chat.id, outcome.message()).await?;
        }
        Err(e) => {
            tracing::warn!("Load command rejected: {}", e);
            let known = registry
                .entries()
                .await
                .into_iter()
                .map(|(id, _)| id)
                .collect::<Vec<_>>()
                .join(", ");
            bot.send_message(msg.chat.id, format!("{e}. Known machines: {known}"))
                .await?;
        }
    }

    Ok(())
}
