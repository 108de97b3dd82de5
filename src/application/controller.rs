//! # Conversation Controller
//!
//! Drives one conversation through the gender → weight → height dialogue.
//! Pure and synchronous: it mutates the conversation it borrows and returns the reply to send,
//! leaving transport to the caller.

use crate::application::state::{Conversation, DialogueState, Session};
use crate::domain::bmi::{self, BmiError, Measurement};
use crate::domain::types::{Gender, Keyboard, Reply};
use crate::strings::{logs, messages};

/// How a new calculation was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greeting {
    /// `/start`: includes the welcome line.
    Start,
    /// `/calc`
    Calc,
}

pub struct ConversationController<'a> {
    conversation: &'a mut Conversation,
    sender: &'a str,
}

impl<'a> ConversationController<'a> {
    pub fn new(conversation: &'a mut Conversation, sender: &'a str) -> Self {
        Self {
            conversation,
            sender,
        }
    }

    /// Resets the session and asks for the gender.
    pub fn begin(&mut self, greeting: Greeting) -> Reply {
        self.conversation.session = Session::default();
        self.conversation.state = DialogueState::Gender;
        Reply::text(messages::start_prompt(greeting == Greeting::Start))
            .with_keyboard(Keyboard::gender())
    }

    pub fn on_gender(&mut self, text: &str) -> Result<Reply, BmiError> {
        let gender: Gender = text.parse()?;
        tracing::info!("{}", logs::gender_of(self.sender, gender.as_str()));
        self.conversation.session.gender = Some(gender);
        self.advance();
        Ok(Reply::text(messages::ask_weight()).remove_keyboard())
    }

    pub fn on_weight(&mut self, text: &str) -> Result<Reply, BmiError> {
        let weight = bmi::parse_measurement(Measurement::Weight, text)?;
        tracing::info!("{}", logs::weight_of(self.sender, weight));
        self.conversation.session.weight_kg = Some(weight);
        self.advance();
        Ok(Reply::text(messages::ask_height()))
    }

    pub fn on_height(&mut self, text: &str) -> Result<Reply, BmiError> {
        let height = bmi::parse_measurement(Measurement::Height, text)?;
        let session = &mut self.conversation.session;
        if session.weight_kg.is_none() {
            return Err(BmiError::Incomplete(Measurement::Weight));
        }
        tracing::info!("{}", logs::height_of(self.sender, height));
        session.height_cm = Some(height);
        let value = session
            .bmi()
            .ok_or(BmiError::Incomplete(Measurement::Height))?;
        let gender = session.gender.map(|g| g.to_string()).unwrap_or_default();
        tracing::info!("{}", logs::bmi_of(self.sender, &gender, value));
        self.advance();
        Ok(Reply::text(messages::bmi_result(value)).remove_keyboard())
    }

    /// Abandons the session from any state.
    pub fn cancel(&mut self) -> Reply {
        tracing::info!("{}", logs::cancelled_by(self.sender));
        self.conversation.session = Session::default();
        self.conversation.state = DialogueState::Done;
        Reply::text(messages::cancelled()).remove_keyboard()
    }

    /// Feeds free text to the step currently collecting input.
    /// Returns `None` when no calculation is in progress.
    pub fn handle_text(&mut self, text: &str) -> Option<Reply> {
        let result = match self.conversation.state {
            DialogueState::Gender => self.on_gender(text),
            DialogueState::Weight => self.on_weight(text),
            DialogueState::Height => self.on_height(text),
            DialogueState::Done => return None,
        };

        Some(result.unwrap_or_else(|err| {
            tracing::warn!("{}", logs::rejected_input(self.sender, &err.to_string()));
            if let Some(field) = err.measurement() {
                return Reply::text(messages::invalid_measurement(field, &err));
            }
            match err {
                BmiError::Incomplete(_) => {
                    self.conversation.session = Session::default();
                    self.conversation.state = DialogueState::Done;
                    Reply::text(messages::incomplete_session()).remove_keyboard()
                }
                _ => Reply::text(messages::choose_gender()).with_keyboard(Keyboard::gender()),
            }
        }))
    }

    fn advance(&mut self) {
        self.conversation.state = self.conversation.state.next().unwrap_or_default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(conversation: &mut Conversation, text: &str) -> Reply {
        ConversationController::new(conversation, "@alice:hs")
            .handle_text(text)
            .unwrap()
    }

    #[test]
    fn test_full_dialogue() {
        let mut conversation = Conversation::default();

        let reply = ConversationController::new(&mut conversation, "@alice:hs").begin(Greeting::Start);
        assert!(reply.text.contains("Welcome"));
        assert_eq!(reply.keyboard, Some(Keyboard::gender()));
        assert_eq!(conversation.state, DialogueState::Gender);

        let reply = answer(&mut conversation, "Man");
        assert!(reply.text.contains("WEIGHT"));
        assert!(reply.remove_keyboard);
        assert_eq!(conversation.state, DialogueState::Weight);

        let reply = answer(&mut conversation, "70");
        assert!(reply.text.contains("HEIGHT"));
        assert_eq!(conversation.state, DialogueState::Height);

        let reply = answer(&mut conversation, "175");
        assert!(reply.text.contains("22.857"));
        assert_eq!(conversation.state, DialogueState::Done);

        assert_eq!(conversation.session.gender, Some(Gender::Man));
        assert_eq!(conversation.session.weight_kg, Some(70.0));
        assert_eq!(conversation.session.height_cm, Some(175.0));
    }

    #[test]
    fn test_calc_greeting_skips_welcome() {
        let mut conversation = Conversation::default();
        let reply = ConversationController::new(&mut conversation, "@a:hs").begin(Greeting::Calc);
        assert!(!reply.text.contains("Welcome"));
        assert!(reply.text.contains("Please enter your gender"));
    }

    #[test]
    fn test_begin_resets_session() {
        let mut conversation = Conversation {
            state: DialogueState::Height,
            session: Session {
                gender: Some(Gender::Woman),
                weight_kg: Some(60.0),
                height_cm: None,
            },
            ..Default::default()
        };
        ConversationController::new(&mut conversation, "@a:hs").begin(Greeting::Calc);
        assert_eq!(conversation.state, DialogueState::Gender);
        assert_eq!(conversation.session, Session::default());
    }

    #[test]
    fn test_cancel_from_every_state() {
        for state in [
            DialogueState::Gender,
            DialogueState::Weight,
            DialogueState::Height,
            DialogueState::Done,
        ] {
            let mut conversation = Conversation {
                state,
                session: Session {
                    gender: Some(Gender::Man),
                    weight_kg: Some(70.0),
                    height_cm: None,
                },
                ..Default::default()
            };
            let reply = ConversationController::new(&mut conversation, "@a:hs").cancel();
            assert!(reply.text.starts_with("Bye!"));
            assert!(!reply.text.contains("BMI is"));
            assert_eq!(conversation.state, DialogueState::Done);
            assert_eq!(conversation.session, Session::default());

            assert!(
                ConversationController::new(&mut conversation, "@a:hs")
                    .handle_text("175")
                    .is_none()
            );
        }
    }

    #[test]
    fn test_invalid_gender_reoffers_keyboard() {
        let mut conversation = Conversation {
            state: DialogueState::Gender,
            ..Default::default()
        };
        let reply = answer(&mut conversation, "Robot");
        assert!(reply.text.contains("Man"));
        assert_eq!(reply.keyboard, Some(Keyboard::gender()));
        assert_eq!(conversation.state, DialogueState::Gender);
        assert_eq!(conversation.session.gender, None);
    }

    #[test]
    fn test_invalid_weight_keeps_state() {
        let mut conversation = Conversation {
            state: DialogueState::Weight,
            ..Default::default()
        };
        let reply = answer(&mut conversation, "heavy");
        assert!(reply.text.contains("'heavy' is not a number"));
        assert_eq!(conversation.state, DialogueState::Weight);

        let reply = answer(&mut conversation, "0");
        assert!(reply.text.contains("greater than zero"));
        assert_eq!(conversation.state, DialogueState::Weight);

        answer(&mut conversation, "80");
        assert_eq!(conversation.state, DialogueState::Height);
    }

    #[test]
    fn test_invalid_height_keeps_state() {
        let mut conversation = Conversation {
            state: DialogueState::Height,
            session: Session {
                gender: Some(Gender::Woman),
                weight_kg: Some(55.0),
                height_cm: None,
            },
            ..Default::default()
        };
        let reply = answer(&mut conversation, "tall");
        assert!(reply.text.contains("centimeters"));
        assert_eq!(conversation.state, DialogueState::Height);
        assert_eq!(conversation.session.height_cm, None);
    }

    #[test]
    fn test_height_without_weight_ends_dialogue() {
        let mut conversation = Conversation {
            state: DialogueState::Height,
            ..Default::default()
        };
        let reply = answer(&mut conversation, "175");
        assert!(!reply.text.contains("BMI is"));
        assert!(reply.text.contains("/calc"));
        assert_eq!(conversation.state, DialogueState::Done);
    }

    #[test]
    fn test_tiny_height_is_rejected() {
        let mut conversation = Conversation {
            state: DialogueState::Height,
            session: Session {
                gender: Some(Gender::Man),
                weight_kg: Some(70.0),
                height_cm: None,
            },
            ..Default::default()
        };
        let reply = answer(&mut conversation, "1e-200");
        assert!(!reply.text.contains("inf"));
        assert!(!reply.text.contains("BMI is"));
        assert!(reply.text.contains("Please enter your height"));
        assert_eq!(conversation.state, DialogueState::Height);
        assert_eq!(conversation.session.height_cm, None);

        let reply = answer(&mut conversation, "175");
        assert!(reply.text.contains("22.857"));
    }

    #[test]
    fn test_huge_weight_is_rejected() {
        let mut conversation = Conversation {
            state: DialogueState::Weight,
            ..Default::default()
        };
        let reply = answer(&mut conversation, "1e308");
        assert!(reply.text.contains("must be between 1 and 700"));
        assert!(reply.text.contains("Please enter your weight"));
        assert_eq!(conversation.state, DialogueState::Weight);
        assert_eq!(conversation.session.weight_kg, None);
    }
}
