//! Field constraints enforced on every write to the contact store.
//!
//! Field | Constraint
//! ---|---
//! `name` | Required, not empty.
//! `number` | Required, at least [`NUMBER_MIN_LENGTH`] characters, two or three digits, a `-` and more digits. For example `040-1234567`.
//!
//! Each field reports at most one violation. For the `number`, the length is
//! checked before the format.
use std::fmt;

use derive_more::Display;
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

/// Minimum length of a phone number.
pub const NUMBER_MIN_LENGTH: usize = 8;

lazy_static! {
    static ref NUMBER_FORMAT: Regex = Regex::new(r"^\d{2,3}-\d+$").expect("the phone number pattern should be a valid regex");
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Display)]
pub enum Field {
    #[display("name")]
    Name,
    #[display("number")]
    Number,
}

/// A constraint that a field value does not satisfy.
#[derive(Error, PartialEq, Eq, Debug, Clone)]
pub enum Violation {
    #[error("Path `{field}` is required.")]
    Required { field: Field },

    #[error("Path `{field}` (`{value}`) is shorter than the minimum allowed length ({min_length}).")]
    TooShort { field: Field, value: String, min_length: usize },

    #[error("`{value}` is not a valid phone number!")]
    InvalidPhoneNumber { value: String },
}

impl Violation {
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Violation::Required { field } | Violation::TooShort { field, .. } => *field,
            Violation::InvalidPhoneNumber { .. } => Field::Number,
        }
    }
}

/// One or more fields of a contact are not valid.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reasons = self
            .violations
            .iter()
            .map(|violation| format!("{}: {violation}", violation.field()))
            .collect::<Vec<String>>()
            .join(", ");

        write!(f, "Contact validation failed: {reasons}")
    }
}

impl std::error::Error for ValidationError {}

impl From<Violation> for ValidationError {
    fn from(violation: Violation) -> Self {
        Self {
            violations: vec![violation],
        }
    }
}

/// # Errors
///
/// Will return a [`Violation`] if the name is missing or empty.
pub fn check_name(name: Option<&str>) -> Result<&str, Violation> {
    match name {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(Violation::Required { field: Field::Name }),
    }
}

/// # Errors
///
/// Will return a [`Violation`] if the number is missing, too short or it
/// does not look like a phone number.
pub fn check_number(number: Option<&str>) -> Result<&str, Violation> {
    let number = match number {
        Some(number) if !number.is_empty() => number,
        _ => return Err(Violation::Required { field: Field::Number }),
    };

    if number.chars().count() < NUMBER_MIN_LENGTH {
        return Err(Violation::TooShort {
            field: Field::Number,
            value: number.to_owned(),
            min_length: NUMBER_MIN_LENGTH,
        });
    }

    if !NUMBER_FORMAT.is_match(number) {
        return Err(Violation::InvalidPhoneNumber {
            value: number.to_owned(),
        });
    }

    Ok(number)
}

/// Validates all the fields of a contact before it's inserted.
///
/// # Errors
///
/// Will return a [`ValidationError`] with one violation per invalid field.
pub fn validate_new_contact<'a>(name: Option<&'a str>, number: Option<&'a str>) -> Result<(&'a str, &'a str), ValidationError> {
    match (check_name(name), check_number(number)) {
        (Ok(name), Ok(number)) => Ok((name, number)),
        (name, number) => Err(ValidationError {
            violations: [name.err(), number.err()].into_iter().flatten().collect(),
        }),
    }
}

/// Validates the new number of an existing contact.
///
/// # Errors
///
/// Will return a [`ValidationError`] if the number is not valid.
pub fn validate_number_update(number: Option<&str>) -> Result<&str, ValidationError> {
    Ok(check_number(number)?)
}
