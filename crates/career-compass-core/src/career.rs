//! Career archetypes and their tiered skill requirements.
//!
//! A [`Career`] carries three ordered lists of required skill names, one per
//! [`Tier`]. Tiers carry the scoring weights used by the matching engine:
//! essential 3, important 2, desirable 1. Within one tier a skill name is
//! unique (re-adding is a no-op); across tiers the same name may appear more
//! than once, and the scoring formula deliberately counts it once per tier,
//! so nothing here deduplicates across tiers.

use serde::Serialize;

/// Requirement tier, ordered by importance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Essential,
    Important,
    Desirable,
}

impl Tier {
    /// Scoring weight for this tier.
    pub fn weight(&self) -> u32 {
        match self {
            Self::Essential => 3,
            Self::Important => 2,
            Self::Desirable => 1,
        }
    }

    /// All tiers in scoring and traversal order.
    pub const ALL: [Tier; 3] = [Tier::Essential, Tier::Important, Tier::Desirable];
}

/// Attractiveness bucket derived from projected growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Attractiveness {
    /// Growth of 200% or more.
    High,
    /// Growth of 100% or more.
    Medium,
    Low,
}

impl std::fmt::Display for Attractiveness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        })
    }
}

/// A role archetype with tiered skill requirements and growth/salary metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Career {
    pub name: String,
    pub description: String,
    /// Projected growth over the forecast window, in percent.
    pub projected_growth_percent: i32,
    pub average_salary: f64,
    essential_skills: Vec<String>,
    important_skills: Vec<String>,
    desirable_skills: Vec<String>,
}

impl Career {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        projected_growth_percent: i32,
        average_salary: f64,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            projected_growth_percent,
            average_salary,
            essential_skills: Vec::new(),
            important_skills: Vec::new(),
            desirable_skills: Vec::new(),
        }
    }

    fn tier_mut(&mut self, tier: Tier) -> &mut Vec<String> {
        match tier {
            Tier::Essential => &mut self.essential_skills,
            Tier::Important => &mut self.important_skills,
            Tier::Desirable => &mut self.desirable_skills,
        }
    }

    /// The skill names in one tier, in insertion order.
    pub fn skills_in(&self, tier: Tier) -> &[String] {
        match tier {
            Tier::Essential => &self.essential_skills,
            Tier::Important => &self.important_skills,
            Tier::Desirable => &self.desirable_skills,
        }
    }

    /// Add a skill to a tier. Re-adding a name already in that tier is a
    /// no-op; the same name in a different tier is kept.
    pub fn add_skill(&mut self, tier: Tier, skill: impl Into<String>) -> &mut Self {
        let skill = skill.into();
        let list = self.tier_mut(tier);
        if !list.contains(&skill) {
            list.push(skill);
        }
        self
    }

    pub fn add_essential(&mut self, skill: impl Into<String>) -> &mut Self {
        self.add_skill(Tier::Essential, skill)
    }

    pub fn add_important(&mut self, skill: impl Into<String>) -> &mut Self {
        self.add_skill(Tier::Important, skill)
    }

    pub fn add_desirable(&mut self, skill: impl Into<String>) -> &mut Self {
        self.add_skill(Tier::Desirable, skill)
    }

    /// All required skill names, essential → important → desirable, each tier
    /// in insertion order. Not deduplicated across tiers.
    pub fn all_required_skills(&self) -> impl Iterator<Item = &str> {
        Tier::ALL
            .iter()
            .flat_map(|t| self.skills_in(*t))
            .map(String::as_str)
    }

    /// Total number of requirement entries across all tiers.
    pub fn requirement_count(&self) -> usize {
        Tier::ALL.iter().map(|t| self.skills_in(*t).len()).sum()
    }

    /// A high-growth role: 150% projected growth or more.
    pub fn is_future_career(&self) -> bool {
        self.projected_growth_percent >= 150
    }

    /// Attractiveness bucket from projected growth.
    pub fn attractiveness(&self) -> Attractiveness {
        if self.projected_growth_percent >= 200 {
            Attractiveness::High
        } else if self.projected_growth_percent >= 100 {
            Attractiveness::Medium
        } else {
            Attractiveness::Low
        }
    }
}

impl std::fmt::Display for Career {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (growth: {}%)", self.name, self.projected_growth_percent)
    }
}
