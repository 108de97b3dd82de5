//! # Matrix Service Adapter
//!
//! Implements the `ChatProvider` trait for the Matrix protocol using the `matrix_sdk`.
//! This module acts as the bridge between the generic `ChatProvider` interface used by the bot's core logic
//! and the specific implementation details of the Matrix SDK.
//!
//! Matrix has no quick-reply keyboards, so a keyboard is rendered as a line of choices under the text.

use crate::domain::traits::ChatProvider;
use crate::domain::types::{Keyboard, Reply};
use async_trait::async_trait;
use matrix_sdk::room::Room;
use matrix_sdk::ruma::events::room::message::RoomMessageEventContent;

#[derive(Clone)]
pub struct MatrixService {
    room: Room,
}

impl MatrixService {
    pub fn new(room: Room) -> Self {
        Self { room }
    }
}

/// Markdown body for a reply, keyboard included.
pub fn render_reply(reply: &Reply) -> String {
    match &reply.keyboard {
        Some(keyboard) => format!("{}\n{}", reply.text.trim_end(), render_keyboard(keyboard)),
        None => reply.text.clone(),
    }
}

fn render_keyboard(keyboard: &Keyboard) -> String {
    let mut out = String::new();
    for row in &keyboard.rows {
        let buttons: Vec<String> = row.iter().map(|b| format!("`{b}`")).collect();
        out.push_str(&format!("➡️ {}\n", buttons.join(" · ")));
    }
    if let Some(placeholder) = &keyboard.placeholder {
        out.push_str(&format!("_{placeholder}_\n"));
    }
    out
}

#[async_trait]
impl ChatProvider for MatrixService {
    fn room_id(&self) -> String {
        self.room.room_id().as_str().to_string()
    }

    async fn send_message(&self, content: &str) -> Result<String, String> {
        tracing::info!("Bot sending message to {}: {}", self.room_id(), content);
        self.room
            .send(RoomMessageEventContent::text_markdown(content))
            .await
            .map(|resp| resp.event_id.to_string())
            .map_err(|e| e.to_string())
    }

    async fn send_plain(&self, content: &str) -> Result<String, String> {
        tracing::info!("Bot sending plain text to {}: {}", self.room_id(), content);
        self.room
            .send(RoomMessageEventContent::text_plain(content))
            .await
            .map(|resp| resp.event_id.to_string())
            .map_err(|e| e.to_string())
    }

    async fn send_reply(&self, reply: &Reply) -> Result<String, String> {
        tracing::debug!(
            keyboard = reply.keyboard.is_some(),
            one_time = reply.keyboard.as_ref().is_some_and(|k| k.one_time),
            remove_keyboard = reply.remove_keyboard,
            "Rendering reply for {}",
            self.room_id()
        );
        self.send_message(&render_reply(reply)).await
    }

    async fn typing(&self, active: bool) -> Result<(), String> {
        self.room
            .typing_notice(active)
            .await
            .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain_reply() {
        let reply = Reply::text("Great! Now please enter your WEIGHT").remove_keyboard();
        assert_eq!(render_reply(&reply), "Great! Now please enter your WEIGHT");
    }

    #[test]
    fn test_render_gender_keyboard() {
        let reply = Reply::text("Please enter your gender\n").with_keyboard(Keyboard::gender());
        assert_eq!(
            render_reply(&reply),
            "Please enter your gender\n➡️ `Man` · `Woman`\n_Are you a Man or a Woman?_\n"
        );
    }

    #[test]
    fn test_render_keyboard_without_placeholder() {
        let keyboard = Keyboard {
            rows: vec![vec!["A".into()], vec!["B".into(), "C".into()]],
            one_time: false,
            placeholder: None,
        };
        assert_eq!(render_keyboard(&keyboard), "➡️ `A`\n➡️ `B` · `C`\n");
    }
}
