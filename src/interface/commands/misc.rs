//! # Miscellaneous Handlers
//!
//! Replies for unknown commands and the echo of free text outside a calculation.

use crate::domain::traits::ChatProvider;
use anyhow::Result;

pub async fn handle_unknown(chat: &impl ChatProvider, command: &str) -> Result<()> {
    tracing::info!("Unknown command '{}' in {}", command, chat.room_id());
    chat.send_message(crate::strings::messages::UNKNOWN_COMMAND)
        .await
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!(e))
}

/// Sent as plain text, exactly as typed.
pub async fn handle_echo(chat: &impl ChatProvider, text: &str) -> Result<()> {
    chat.send_plain(text)
        .await
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!(e))
}
