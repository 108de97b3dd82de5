//! # Bot State
//!
//! Defines the dialogue state machine (`DialogueState`), the data collected during one
//! calculation (`Session`) and the in-memory store mapping each conversation to its state.
//! Conversations are keyed by room and sender, so users sharing a room never overwrite
//! each other's answers.

use crate::domain::types::Gender;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Which piece of information the bot is currently collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogueState {
    Gender,
    Weight,
    Height,
    #[default]
    Done,
}

impl DialogueState {
    /// Linear transition table for an accepted answer. `Done` has no successor.
    pub fn next(self) -> Option<DialogueState> {
        match self {
            DialogueState::Gender => Some(DialogueState::Weight),
            DialogueState::Weight => Some(DialogueState::Height),
            DialogueState::Height => Some(DialogueState::Done),
            DialogueState::Done => None,
        }
    }

    pub fn is_active(self) -> bool {
        self != DialogueState::Done
    }
}

/// Answers collected so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub gender: Option<Gender>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
}

impl Session {
    /// `None` until both measurements are recorded.
    pub fn bmi(&self) -> Option<f64> {
        Some(crate::domain::bmi::get_bmi(self.weight_kg?, self.height_cm?))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversation {
    pub state: DialogueState,
    pub session: Session,
    /// Set whenever the conversation is fetched from the store.
    pub last_activity: Option<Instant>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConversationKey {
    pub room_id: String,
    pub sender: String,
}

impl ConversationKey {
    pub fn new(room_id: impl Into<String>, sender: impl Into<String>) -> Self {
        Self {
            room_id: room_id.into(),
            sender: sender.into(),
        }
    }
}

/// State of every conversation the bot has seen since startup.
#[derive(Debug, Default)]
pub struct BotState {
    pub conversations: HashMap<ConversationKey, Conversation>,
}

impl BotState {
    /// Gets or creates the conversation for a room/sender pair and marks it active.
    pub fn conversation(&mut self, key: &ConversationKey) -> &mut Conversation {
        let conversation = self.conversations.entry(key.clone()).or_default();
        conversation.last_activity = Some(Instant::now());
        conversation
    }

    pub fn state_of(&self, key: &ConversationKey) -> DialogueState {
        self.conversations
            .get(key)
            .map(|c| c.state)
            .unwrap_or_default()
    }

    /// Removes the conversation once its dialogue has ended.
    pub fn remove_if_done(&mut self, key: &ConversationKey) {
        if !self.state_of(key).is_active() {
            self.conversations.remove(key);
        }
    }

    /// Drops conversations nobody has answered for `max_idle`. Returns how many were dropped.
    pub fn evict_idle(&mut self, max_idle: Duration) -> usize {
        let before = self.conversations.len();
        self.conversations.retain(|_, c| {
            c.last_activity
                .is_some_and(|at| at.elapsed() < max_idle)
        });
        before - self.conversations.len()
    }
}
