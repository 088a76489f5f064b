//! User profiles: self-rated skill levels plus identity data.
//!
//! A [`Profile`] maps skill names to 1–5 levels. Reads never fail: a skill
//! the user has not rated reports level 0 (the "unrated" sentinel), which is
//! what makes the scoring formula total. Writes are validated before the map
//! is touched, so a profile can never hold an out-of-range level.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{Result, ValidationError};

/// Skill level regarded as minimally adequate; anything below it is a gap.
pub const ADEQUATE_LEVEL: u8 = 3;

/// Skills the readiness heuristic treats as future-proofing, by catalog name.
pub const FUTURE_SKILLS: [&str; 6] = [
    "programming",
    "data_analysis",
    "creativity",
    "adaptability",
    "leadership",
    "communication",
];

/// Future-readiness bucket derived from [`Profile::future_readiness`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Readiness {
    /// 80% or more of the maximum future-skill score.
    WellPrepared,
    /// 60% or more.
    Prepared,
    /// 40% or more.
    Developing,
    NeedsDevelopment,
}

impl std::fmt::Display for Readiness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::WellPrepared => "Well prepared",
            Self::Prepared => "Prepared",
            Self::Developing => "Developing",
            Self::NeedsDevelopment => "Needs development",
        })
    }
}

/// A user's self-reported skill levels and identity data.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: String,
    pub age: u32,
    pub current_field: Option<String>,
    skill_levels: BTreeMap<String, u8>,
    goals: Vec<String>,
    /// When the profile was created. Informational only; scoring ignores it.
    pub created_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(name: impl Into<String>, age: u32, current_field: Option<&str>) -> Self {
        Self {
            name: name.into(),
            age,
            current_field: current_field.map(str::to_string),
            skill_levels: BTreeMap::new(),
            goals: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Set (or overwrite) the level for a skill. Fails before mutating if the
    /// level is outside 1–5.
    pub fn set_skill_level(&mut self, skill: impl Into<String>, level: u8) -> Result<()> {
        if !(1..=5).contains(&level) {
            return Err(ValidationError::SkillLevelOutOfRange(level));
        }
        self.skill_levels.insert(skill.into(), level);
        Ok(())
    }

    /// Remove a skill rating. Removing an absent skill is a no-op.
    pub fn remove_skill(&mut self, skill: &str) {
        self.skill_levels.remove(skill);
    }

    /// Level for a skill, or 0 when the skill has not been rated.
    pub fn skill_level(&self, skill: &str) -> u8 {
        self.skill_levels.get(skill).copied().unwrap_or(0)
    }

    pub fn has_skill(&self, skill: &str) -> bool {
        self.skill_levels.contains_key(skill)
    }

    /// Number of rated skills.
    pub fn skill_count(&self) -> usize {
        self.skill_levels.len()
    }

    /// All rated skills with their levels.
    pub fn skills(&self) -> impl Iterator<Item = (&str, u8)> {
        self.skill_levels.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Record a goal. Duplicates are ignored.
    pub fn add_goal(&mut self, goal: impl Into<String>) {
        let goal = goal.into();
        if !self.goals.contains(&goal) {
            self.goals.push(goal);
        }
    }

    pub fn goals(&self) -> &[String] {
        &self.goals
    }

    /// Rated skills at or above `min_level`.
    pub fn skills_at_or_above(&self, min_level: u8) -> impl Iterator<Item = (&str, u8)> {
        self.skills().filter(move |(_, lvl)| *lvl >= min_level)
    }

    /// Rated skills at level 4 or 5.
    pub fn strengths(&self) -> impl Iterator<Item = (&str, u8)> {
        self.skills_at_or_above(4)
    }

    /// Rated skills at level 3 or below.
    pub fn development_areas(&self) -> impl Iterator<Item = (&str, u8)> {
        self.skills().filter(|(_, lvl)| *lvl <= 3)
    }

    /// Sum of all rated levels.
    pub fn total_score(&self) -> u32 {
        self.skill_levels.values().map(|v| u32::from(*v)).sum()
    }

    /// Mean rated level, or 0.0 for an empty profile.
    pub fn average_level(&self) -> f64 {
        if self.skill_levels.is_empty() {
            return 0.0;
        }
        f64::from(self.total_score()) / self.skill_levels.len() as f64
    }

    /// How prepared the profile is for [`FUTURE_SKILLS`], as a percentage of
    /// the maximum possible score plus a readiness bucket.
    pub fn future_readiness(&self) -> (f64, Readiness) {
        let max = (FUTURE_SKILLS.len() * 5) as f64;
        let total: u32 = FUTURE_SKILLS
            .iter()
            .map(|s| u32::from(self.skill_level(s)))
            .sum();
        let percent = f64::from(total) / max * 100.0;

        let bucket = if percent >= 80.0 {
            Readiness::WellPrepared
        } else if percent >= 60.0 {
            Readiness::Prepared
        } else if percent >= 40.0 {
            Readiness::Developing
        } else {
            Readiness::NeedsDevelopment
        };
        (percent, bucket)
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} — {} skills rated", self.name, self.skill_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrated_skill_reads_as_zero() {
        let profile = Profile::new("Ana", 28, None);
        assert_eq!(profile.skill_level("programming"), 0);
        assert!(!profile.has_skill("programming"));
    }

    #[test]
    fn set_overwrites_and_remove_deletes() {
        let mut profile = Profile::new("Ana", 28, Some("Design"));
        profile.set_skill_level("design", 2).unwrap();
        profile.set_skill_level("design", 5).unwrap();
        assert_eq!(profile.skill_level("design"), 5);
        profile.remove_skill("design");
        assert_eq!(profile.skill_level("design"), 0);
        // removing again is fine
        profile.remove_skill("design");
    }

    #[test]
    fn out_of_range_level_rejected_before_mutation() {
        let mut profile = Profile::new("Ana", 28, None);
        assert_eq!(
            profile.set_skill_level("programming", 0).unwrap_err(),
            ValidationError::SkillLevelOutOfRange(0)
        );
        assert_eq!(
            profile.set_skill_level("programming", 6).unwrap_err(),
            ValidationError::SkillLevelOutOfRange(6)
        );
        assert!(!profile.has_skill("programming"));
    }

    #[test]
    fn goals_are_deduplicated() {
        let mut profile = Profile::new("Ana", 28, None);
        profile.add_goal("Change careers");
        profile.add_goal("Change careers");
        profile.add_goal("Work remotely");
        assert_eq!(profile.goals(), ["Change careers", "Work remotely"]);
    }

    #[test]
    fn aggregates() {
        let mut profile = Profile::new("Ana", 28, None);
        profile.set_skill_level("programming", 5).unwrap();
        profile.set_skill_level("design", 2).unwrap();
        profile.set_skill_level("leadership", 4).unwrap();
        assert_eq!(profile.total_score(), 11);
        assert!((profile.average_level() - 11.0 / 3.0).abs() < 1e-9);
        let strengths: Vec<_> = profile.strengths().map(|(n, _)| n).collect();
        assert_eq!(strengths, ["leadership", "programming"]);
        let dev: Vec<_> = profile.development_areas().map(|(n, _)| n).collect();
        assert_eq!(dev, ["design"]);
    }

    #[test]
    fn empty_profile_average_is_zero() {
        assert_eq!(Profile::new("Ana", 28, None).average_level(), 0.0);
    }

    #[test]
    fn future_readiness_buckets() {
        let mut profile = Profile::new("Ana", 28, None);
        let (pct, bucket) = profile.future_readiness();
        assert_eq!(pct, 0.0);
        assert_eq!(bucket, Readiness::NeedsDevelopment);

        for skill in FUTURE_SKILLS {
            profile.set_skill_level(skill, 5).unwrap();
        }
        let (pct, bucket) = profile.future_readiness();
        assert_eq!(pct, 100.0);
        assert_eq!(bucket, Readiness::WellPrepared);

        for skill in FUTURE_SKILLS {
            profile.set_skill_level(skill, 3).unwrap();
        }
        let (pct, bucket) = profile.future_readiness();
        assert_eq!(pct, 60.0);
        assert_eq!(bucket, Readiness::Prepared);
    }
}
