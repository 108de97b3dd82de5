//! # Help Text
//!
//! Displayed to the user via the `/help` command.

pub const MAIN: &str = concat!(
    "**⚖️ BMI Bot Help**\n",
    "I calculate your Body Mass Index from your weight and height.\n",
    "\n",
    "**Commands**\n",
    "* /start: Welcome message and a new calculation\n",
    "* /calc: Start a new calculation\n",
    "* /cancel: Cancel the current calculation\n",
    "* /help: Show this message\n",
    "\n",
    "Weight is entered in kilograms, height in centimeters.\n"
);
