//! Validation errors raised at entity construction and mutation boundaries.
//!
//! The matching engine itself is total over valid inputs and never produces
//! errors; everything that can go wrong goes wrong here, synchronously, at
//! the point a caller tries to build or mutate an entity with bad data.
//! Callers branch on the variant rather than parsing message text.

/// Error raised when entity data fails domain validation.
///
/// Each variant corresponds to one invariant of the data model. Messages are
/// human-readable and safe to show directly in a terminal prompt loop.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Skill category string is not one of `technical`, `behavioral`, `hybrid`.
    #[error("unknown skill category: {0} (expected technical, behavioral, or hybrid)")]
    InvalidCategory(String),

    /// Skill future-demand rating outside the 1–5 scale.
    #[error("future demand level must be between 1 and 5, got {0}")]
    DemandLevelOutOfRange(u8),

    /// Profile skill rating outside the 1–5 scale.
    #[error("skill level must be between 1 and 5, got {0}")]
    SkillLevelOutOfRange(u8),

    /// A name field (skill or career) was empty or whitespace.
    #[error("name must not be empty")]
    EmptyName,

    /// Person name failed intake validation.
    #[error("invalid name: {0}")]
    InvalidName(String),

    /// Age outside the accepted 14–100 range.
    #[error("age must be between 14 and 100, got {0}")]
    AgeOutOfRange(u32),

    /// Current-field string failed intake validation.
    #[error("invalid field of work: {0}")]
    InvalidField(String),
}

/// Convenience alias for fallible constructors and mutators in this crate.
pub type Result<T> = std::result::Result<T, ValidationError>;
