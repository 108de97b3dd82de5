//! # Command Handlers
//!
//! Contains specific handler functions for each supported command (e.g., /start, /calc, /help).
//! These handlers are invoked by the Router.

pub mod conversation;
pub mod help;
pub mod misc;
