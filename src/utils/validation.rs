use anyhow::{anyhow, Result};

/// Reject chat ids outside the ranges Telegram hands out.
pub fn validate_chat_id(chat_id: i64) -> Result<()> {
    if chat_id == 0 {
        return Err(anyhow!("Chat ID cannot be zero"));
    }

    // User chats are positive 32-bit ids
    if chat_id > 2_147_483_647 {
        return Err(anyhow!("Invalid user chat ID range"));
    }

    // Groups are small negative ids; supergroups start around -10^12
    if chat_id < -2_000_000_000_000 {
        return Err(anyhow!("Chat ID out of valid range"));
    }

    Ok(())
}

/// Validate a machine identifier as it arrives from a command argument or
/// `load:` callback data.
pub fn validate_machine_token(token: &str) -> Result<()> {
    let token = token.trim();

    if token.is_empty() {
        return Err(anyhow!("Machine identifier cannot be empty"));
    }

    if token.len() > 32 {
        return Err(anyhow!("Machine identifier is too long"));
    }

    if !token.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(anyhow!("Machine identifier contains invalid characters"));
    }

    Ok(())
}
