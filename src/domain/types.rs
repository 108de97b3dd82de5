//! # Domain Types
//!
//! Common data structures and enums used across the application logic.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Man,
    Woman,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Man, Gender::Woman];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Man => "Man",
            Gender::Woman => "Woman",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = crate::domain::bmi::BmiError;

    /// Exact match only, like the keyboard buttons.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Man" => Ok(Gender::Man),
            "Woman" => Ok(Gender::Woman),
            other => Err(crate::domain::bmi::BmiError::InvalidGender(other.to_string())),
        }
    }
}

/// A quick-reply keyboard offered alongside a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyboard {
    pub rows: Vec<Vec<String>>,
    /// Hide the keyboard once a button is used.
    pub one_time: bool,
    pub placeholder: Option<String>,
}

impl Keyboard {
    pub fn gender() -> Self {
        Self {
            rows: vec![Gender::ALL.iter().map(|g| g.as_str().to_string()).collect()],
            one_time: true,
            placeholder: Some(crate::strings::messages::GENDER_PLACEHOLDER.to_string()),
        }
    }
}

/// One outbound message produced by the conversation logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub keyboard: Option<Keyboard>,
    /// Ask the client to drop any keyboard shown earlier.
    pub remove_keyboard: bool,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
            remove_keyboard: false,
        }
    }

    pub fn with_keyboard(mut self, keyboard: Keyboard) -> Self {
        self.keyboard = Some(keyboard);
        self.remove_keyboard = false;
        self
    }

    pub fn remove_keyboard(mut self) -> Self {
        self.keyboard = None;
        self.remove_keyboard = true;
        self
    }
}
