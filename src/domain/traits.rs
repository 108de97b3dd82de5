//! # Domain Traits
//!
//! Abstract interface for the chat transport.
//! Allows for pluggable implementations in the Infrastructure layer.

use crate::domain::types::Reply;
use async_trait::async_trait;

/// Abstract interface for a Chat Provider (e.g., Matrix, Console)
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send a markdown message to the room
    async fn send_message(&self, content: &str) -> Result<String, String>;

    /// Send text exactly as given, without markdown rendering
    async fn send_plain(&self, content: &str) -> Result<String, String>;

    /// Send a reply, rendering its keyboard the way the transport can
    async fn send_reply(&self, reply: &Reply) -> Result<String, String>;

    /// Send a typing indicator
    async fn typing(&self, active: bool) -> Result<(), String>;

    /// Get the current room ID
    fn room_id(&self) -> String;
}
