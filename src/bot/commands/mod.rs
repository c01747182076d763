pub mod load;
pub mod status;

use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Laundry Bot commands:")]
pub enum Command {
    #[command(description = "Display this help message")]
    Help,
    #[command(description = "Start the bot")]
    Start,
    #[command(description = "Show the status of every machine")]
    Status,
    #[command(description = "Load a machine, e.g. /load washer1")]
    Load { machine: String },
}
