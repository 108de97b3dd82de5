//! # Application Layer
//!
//! Contains the core business logic and orchestration of the bot.
//! This includes the conversation controller, command routing and state management.

pub mod controller;
pub mod router;
pub mod state;
