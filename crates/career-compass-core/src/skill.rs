//! Skill catalog entries.
//!
//! A [`Skill`] is a named capability with a closed [`SkillCategory`] and a
//! 1–5 future-demand rating. Skills are built once when the catalog is
//! constructed and are immutable afterwards; profiles and careers refer to
//! them by name only. Names are compared exactly (case- and
//! format-sensitive), so intake code should pass user input through
//! [`normalize_skill_name`] before using it as a key.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

/// Closed set of skill categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    /// Hard, tool- or discipline-specific skills (programming, data analysis).
    Technical,
    /// Interpersonal and cognitive skills (leadership, communication).
    Behavioral,
    /// Skills that blend both (adaptability, innovation).
    Hybrid,
}

impl SkillCategory {
    /// Parse a category from its lowercase string form.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "technical" => Ok(Self::Technical),
            "behavioral" => Ok(Self::Behavioral),
            "hybrid" => Ok(Self::Hybrid),
            other => Err(ValidationError::InvalidCategory(other.to_string())),
        }
    }

    /// Lowercase string form, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::Behavioral => "behavioral",
            Self::Hybrid => "hybrid",
        }
    }
}

impl std::fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named capability tracked by the system.
#[derive(Debug, Clone, Serialize)]
pub struct Skill {
    /// Unique identifier, used as the map key everywhere skills are referenced.
    pub name: String,
    pub category: SkillCategory,
    /// Optional free-text description for catalog listings.
    pub description: Option<String>,
    /// Projected demand on a 1–5 scale.
    pub future_demand_level: u8,
}

impl Skill {
    /// Build a skill, validating the name and demand rating.
    pub fn new(
        name: impl Into<String>,
        category: SkillCategory,
        description: Option<&str>,
        future_demand_level: u8,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !(1..=5).contains(&future_demand_level) {
            return Err(ValidationError::DemandLevelOutOfRange(future_demand_level));
        }
        Ok(Self {
            name,
            category,
            description: description.map(str::to_string),
            future_demand_level,
        })
    }

    pub fn is_technical(&self) -> bool {
        self.category == SkillCategory::Technical
    }

    pub fn is_behavioral(&self) -> bool {
        self.category == SkillCategory::Behavioral
    }

    /// Demand rating of 4 or 5.
    pub fn is_high_demand(&self) -> bool {
        self.future_demand_level >= 4
    }
}

/// Normalize free-form user input into the catalog's key format:
/// trimmed, lowercased, inner spaces replaced with underscores.
pub fn normalize_skill_name(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parse_round_trip() {
        for s in ["technical", "behavioral", "hybrid"] {
            let cat = SkillCategory::parse(s).unwrap();
            assert_eq!(cat.as_str(), s);
        }
    }

    #[test]
    fn category_rejects_unknown() {
        let err = SkillCategory::parse("mystical").unwrap_err();
        assert_eq!(err, ValidationError::InvalidCategory("mystical".into()));
    }

    #[test]
    fn demand_level_bounds() {
        assert!(Skill::new("programming", SkillCategory::Technical, None, 5).is_ok());
        assert!(Skill::new("programming", SkillCategory::Technical, None, 1).is_ok());
        assert_eq!(
            Skill::new("programming", SkillCategory::Technical, None, 0).unwrap_err(),
            ValidationError::DemandLevelOutOfRange(0)
        );
        assert_eq!(
            Skill::new("programming", SkillCategory::Technical, None, 6).unwrap_err(),
            ValidationError::DemandLevelOutOfRange(6)
        );
    }

    #[test]
    fn empty_name_rejected() {
        assert_eq!(
            Skill::new("   ", SkillCategory::Hybrid, None, 3).unwrap_err(),
            ValidationError::EmptyName
        );
    }

    #[test]
    fn predicates() {
        let s = Skill::new("leadership", SkillCategory::Behavioral, None, 4).unwrap();
        assert!(s.is_behavioral());
        assert!(!s.is_technical());
        assert!(s.is_high_demand());
        let s = Skill::new("design", SkillCategory::Technical, None, 3).unwrap();
        assert!(!s.is_high_demand());
    }

    #[test]
    fn normalization() {
        assert_eq!(normalize_skill_name("  Data Analysis "), "data_analysis");
        assert_eq!(normalize_skill_name(""), "");
    }
}
