//! # Command Router
//!
//! Routes incoming messages to the appropriate command handler (in `interface/commands`).
//! Slash commands are dispatched by name; free text goes to the sender's calculation if one is
//! in progress and is echoed back otherwise.

use anyhow::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::application::controller::Greeting;
use crate::application::state::{BotState, ConversationKey};
use crate::domain::traits::ChatProvider;
use crate::interface::commands;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Calc,
    Help,
    Cancel,
    Unknown(String),
}

impl Command {
    /// Parses `/name args`, ignoring case and a `@botname` suffix.
    /// Returns `None` for anything that is not a slash command.
    pub fn parse(message: &str) -> Option<Command> {
        let word = message.split_whitespace().next()?;
        let name = word.strip_prefix('/')?;
        let name = name.split('@').next().unwrap_or(name).to_lowercase();

        Some(match name.as_str() {
            "start" => Command::Start,
            "calc" => Command::Calc,
            "help" => Command::Help,
            "cancel" => Command::Cancel,
            _ => Command::Unknown(word.to_string()),
        })
    }
}

pub struct CommandRouter {
    state: Arc<Mutex<BotState>>,
}

impl CommandRouter {
    pub fn new(state: Arc<Mutex<BotState>>) -> Self {
        Self { state }
    }

    pub async fn route<C>(&self, chat: &C, message: &str, sender: &str) -> Result<()>
    where
        C: ChatProvider,
    {
        let msg = message.trim();
        if msg.is_empty() {
            return Ok(());
        }

        let key = ConversationKey::new(chat.room_id(), sender);
        let command = Command::parse(msg);
        tracing::info!(
            "Router dispatching cmd={:?} sender='{}' room='{}'",
            command,
            sender,
            key.room_id
        );

        match command {
            Some(Command::Start) => {
                commands::conversation::handle_begin(&self.state, chat, &key, Greeting::Start)
                    .await
            }
            Some(Command::Calc) => {
                commands::conversation::handle_begin(&self.state, chat, &key, Greeting::Calc)
                    .await
            }
            Some(Command::Cancel) => {
                commands::conversation::handle_cancel(&self.state, chat, &key).await
            }
            Some(Command::Help) => commands::help::handle_help(chat).await,
            Some(Command::Unknown(name)) => commands::misc::handle_unknown(chat, &name).await,
            None => {
                let handled =
                    commands::conversation::handle_answer(&self.state, chat, &key, msg).await?;
                if !handled {
                    commands::misc::handle_echo(chat, msg).await?;
                }
                Ok(())
            }
        }
    }
}
