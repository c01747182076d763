use teloxide::prelude::*;

use crate::laundry::registry::MachineRegistry;
use crate::laundry::status;

pub async fn handle_status(
    bot: Bot,
    msg: Message,
    registry: &MachineRegistry,
) -> ResponseResult<()> {
    let report = status::report(registry).await.join("\n");
    bot.send_message(msg.chat.id, report).await?;
    Ok(())
}
