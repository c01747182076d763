/// Per-claim countdown tasks
pub mod countdown;
/// HTTP health endpoints
pub mod health;
/// Completion notification delivery
pub mod notify;
