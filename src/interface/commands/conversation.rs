//! # Conversation Commands
//!
//! Handles `/start`, `/calc`, `/cancel` and the answers typed during a calculation.
//! The store lock is held only while the controller runs; replies are sent after it is released.

use crate::application::controller::{ConversationController, Greeting};
use crate::application::state::{BotState, ConversationKey};
use crate::domain::traits::ChatProvider;
use crate::domain::types::Reply;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

pub async fn handle_begin(
    state: &Arc<Mutex<BotState>>,
    chat: &impl ChatProvider,
    key: &ConversationKey,
    greeting: Greeting,
) -> Result<()> {
    let reply = {
        let mut guard = state.lock().await;
        ConversationController::new(guard.conversation(key), &key.sender).begin(greeting)
    };
    send(chat, &reply).await
}

pub async fn handle_cancel(
    state: &Arc<Mutex<BotState>>,
    chat: &impl ChatProvider,
    key: &ConversationKey,
) -> Result<()> {
    let reply = {
        let mut guard = state.lock().await;
        let reply = ConversationController::new(guard.conversation(key), &key.sender).cancel();
        guard.conversations.remove(key);
        reply
    };
    send(chat, &reply).await
}

/// Returns `false` when the sender has no calculation in progress.
pub async fn handle_answer(
    state: &Arc<Mutex<BotState>>,
    chat: &impl ChatProvider,
    key: &ConversationKey,
    text: &str,
) -> Result<bool> {
    let reply = {
        let mut guard = state.lock().await;
        if !guard.state_of(key).is_active() {
            return Ok(false);
        }
        let reply = ConversationController::new(guard.conversation(key), &key.sender)
            .handle_text(text);
        guard.remove_if_done(key);
        reply
    };

    match reply {
        Some(reply) => {
            send(chat, &reply).await?;
            Ok(true)
        }
        None => Ok(false),
    }
}

async fn send(chat: &impl ChatProvider, reply: &Reply) -> Result<()> {
    chat.send_reply(reply)
        .await
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!(e))
}
