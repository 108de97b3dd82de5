//! # Messages
//!
//! Contains constant strings and format functions for user-facing messages.

use crate::domain::bmi::{BmiError, Measurement};

pub const WELCOME: &str = "👋 Hello. Welcome to the **BMI-Index calculator** Bot!\n";
pub const INSTRUCTION: &str = "Please enter your gender, then your weight and then your height in kilograms and centimeters respectively:\n";
pub const CANCEL_INSTRUCTION: &str = "(You can cancel the calculation by entering `/cancel` command)\n";
pub const NEW_CALC_INSTRUCTION: &str =
    "You can have a new calculation anytime. Just enter the `/calc` command.\n";

pub const GENDER_PLACEHOLDER: &str = "Are you a Man or a Woman?";
pub const UNKNOWN_COMMAND: &str = "❓ Sorry, such command does not exist. Please try again.";

pub fn start_prompt(welcome: bool) -> String {
    let greeting = if welcome { WELCOME } else { "" };
    format!("{greeting}{INSTRUCTION}{CANCEL_INSTRUCTION}")
}

pub fn choose_gender() -> String {
    format!("⚠️ Please choose **Man** or **Woman**.\n{CANCEL_INSTRUCTION}")
}

pub fn ask_weight() -> String {
    format!("Great! Now please enter your **WEIGHT** in kilograms:\n{CANCEL_INSTRUCTION}")
}

pub fn ask_height() -> String {
    format!("Great! Now please enter your **HEIGHT** in centimeters:\n{CANCEL_INSTRUCTION}")
}

pub fn bmi_result(bmi: f64) -> String {
    format!("Thank you!\nYour BMI is: **{bmi}**\n{NEW_CALC_INSTRUCTION}")
}

pub fn incomplete_session() -> String {
    format!("⚠️ This calculation is missing some answers and was reset.\n{NEW_CALC_INSTRUCTION}")
}

pub fn cancelled() -> String {
    format!("Bye! I hope I can help you again with a new calculation some day.\n{NEW_CALC_INSTRUCTION}")
}

pub fn invalid_measurement(field: Measurement, err: &BmiError) -> String {
    let example = match field {
        Measurement::Weight => "70",
        Measurement::Height => "175",
    };
    format!(
        "⚠️ {err}. Please enter your {} in {} as a number, e.g. `{example}`.\n{CANCEL_INSTRUCTION}",
        field.name(),
        field.unit(),
    )
}
