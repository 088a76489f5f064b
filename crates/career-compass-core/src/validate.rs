//! Intake validation for identity fields.
//!
//! These checks guard the interactive profile intake; they fail fast with a
//! [`ValidationError`] kind the prompt loop can branch on. Skill-level and
//! catalog validation live on the entities themselves.

use crate::error::{Result, ValidationError};

/// A person's name: 2–50 characters after trimming, letters and spaces only
/// (accented letters included).
pub fn validate_person_name(name: &str) -> Result<()> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::InvalidName("name must not be empty".into()));
    }
    if trimmed.chars().count() < 2 {
        return Err(ValidationError::InvalidName(
            "name must have at least 2 characters".into(),
        ));
    }
    if trimmed.chars().count() > 50 {
        return Err(ValidationError::InvalidName(
            "name must have at most 50 characters".into(),
        ));
    }
    if !trimmed.chars().all(|c| c.is_alphabetic() || c == ' ') {
        return Err(ValidationError::InvalidName(
            "name must contain only letters and spaces".into(),
        ));
    }
    Ok(())
}

/// Age between 14 and 100 inclusive.
pub fn validate_age(age: u32) -> Result<()> {
    if !(14..=100).contains(&age) {
        return Err(ValidationError::AgeOutOfRange(age));
    }
    Ok(())
}

/// Current field of work: 3–100 characters after trimming.
pub fn validate_field(field: &str) -> Result<()> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::InvalidField("field must not be empty".into()));
    }
    if trimmed.chars().count() < 3 {
        return Err(ValidationError::InvalidField(
            "field must have at least 3 characters".into(),
        ));
    }
    if trimmed.chars().count() > 100 {
        return Err(ValidationError::InvalidField(
            "field must have at most 100 characters".into(),
        ));
    }
    Ok(())
}
