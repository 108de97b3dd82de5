//! # BMI
//!
//! The Body Mass Index formula and validation of the raw measurements typed by users.

use thiserror::Error;

/// Which measurement a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measurement {
    Weight,
    Height,
}

impl Measurement {
    pub fn name(&self) -> &'static str {
        match self {
            Measurement::Weight => "weight",
            Measurement::Height => "height",
        }
    }

    /// Accepted range, inclusive. Keeps the BMI finite for any accepted pair.
    pub fn range(&self) -> (f64, f64) {
        match self {
            Measurement::Weight => (1.0, 700.0),
            Measurement::Height => (30.0, 300.0),
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Measurement::Weight => "kilograms",
            Measurement::Height => "centimeters",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BmiError {
    #[error("'{0}' is not a valid gender")]
    InvalidGender(String),

    #[error("'{input}' is not a number")]
    NotANumber { field: Measurement, input: String },

    #[error("value must be greater than zero, got {value}")]
    NotPositive { field: Measurement, value: f64 },

    #[error("value must be between {min} and {max}")]
    OutOfRange {
        field: Measurement,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("no {} recorded for this calculation", .0.name())]
    Incomplete(Measurement),
}

/// BMI from weight in kilograms and height in centimeters.
pub fn get_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Parses a user-entered measurement. Accepts a decimal comma.
pub fn parse_measurement(field: Measurement, input: &str) -> Result<f64, BmiError> {
    let normalized = input.trim().replace(',', ".");
    let value: f64 = normalized.parse().map_err(|_| BmiError::NotANumber {
        field,
        input: input.trim().to_string(),
    })?;

    if !value.is_finite() {
        return Err(BmiError::NotANumber {
            field,
            input: input.trim().to_string(),
        });
    }
    if value <= 0.0 {
        return Err(BmiError::NotPositive { field, value });
    }
    let (min, max) = field.range();
    if !(min..=max).contains(&value) {
        return Err(BmiError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(value)
}

impl BmiError {
    /// The measurement a validation error refers to, if any.
    pub fn measurement(&self) -> Option<Measurement> {
        match self {
            BmiError::NotANumber { field, .. }
            | BmiError::NotPositive { field, .. }
            | BmiError::OutOfRange { field, .. } => Some(*field),
            BmiError::InvalidGender(_) | BmiError::Incomplete(_) => None,
        }
    }
}
