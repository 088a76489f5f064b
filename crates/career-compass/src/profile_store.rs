//! Profile persistence as TOML documents.
//!
//! Profiles round-trip through a raw serde document rather than
//! deserializing straight into [`Profile`], so every skill level read from
//! disk goes back through the core's validated setter. A hand-edited file
//! with a level of 7 fails loading with the same error the interactive
//! intake would have shown.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use career_compass_core::Profile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// On-disk profile shape. The `skills` table comes last so the TOML
/// serializer emits all plain values before it.
#[derive(Debug, Serialize, Deserialize)]
struct ProfileDoc {
    name: String,
    age: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    current_field: Option<String>,
    created_at: DateTime<Utc>,
    #[serde(default)]
    goals: Vec<String>,
    #[serde(default)]
    skills: BTreeMap<String, u8>,
}

/// Load a profile from a TOML file, re-validating every skill level.
pub fn load(path: &Path) -> Result<Profile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read profile {}", path.display()))?;
    let doc: ProfileDoc = toml::from_str(&raw)
        .with_context(|| format!("failed to parse profile {}", path.display()))?;

    let mut profile = Profile::new(doc.name, doc.age, doc.current_field.as_deref());
    profile.created_at = doc.created_at;
    for (skill, level) in doc.skills {
        profile
            .set_skill_level(skill, level)
            .with_context(|| format!("invalid skill level in {}", path.display()))?;
    }
    for goal in doc.goals {
        profile.add_goal(goal);
    }
    Ok(profile)
}

/// Write a profile to a TOML file.
pub fn save(profile: &Profile, path: &Path) -> Result<()> {
    let doc = ProfileDoc {
        name: profile.name.clone(),
        age: profile.age,
        current_field: profile.current_field.clone(),
        created_at: profile.created_at,
        goals: profile.goals().to_vec(),
        skills: profile.skills().map(|(n, l)| (n.to_string(), l)).collect(),
    };
    let raw = toml::to_string_pretty(&doc).context("failed to serialize profile")?;
    std::fs::write(path, raw)
        .with_context(|| format!("failed to write profile {}", path.display()))?;
    Ok(())
}
