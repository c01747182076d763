/// Command definitions and per-command handlers
pub mod commands;
/// Update dispatch: message and callback handlers
pub mod handlers;
