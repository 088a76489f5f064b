//! Built-in skill and career catalogs.
//!
//! The catalogs are constructed once at startup and passed by reference into
//! the matching engine; there is no ambient global state. Skill names are
//! the canonical map keys used by careers and profiles alike.

use anyhow::Result;
use career_compass_core::{Career, Skill, SkillCategory};

/// Goal suggestions offered during interactive intake.
pub const SUGGESTED_GOALS: [&str; 10] = [
    "Change careers",
    "Get promoted at my current company",
    "Increase my salary",
    "Work remotely",
    "Start my own business",
    "Specialize in technology",
    "Develop leadership skills",
    "Work abroad",
    "Improve work-life balance",
    "Have a positive impact on society",
];

/// Build the skill catalog.
///
/// Fails only if a seed entry violates the skill invariants, which would be
/// a programming error caught by the tests below.
pub fn build_skills() -> Result<Vec<Skill>> {
    use SkillCategory::{Behavioral, Hybrid, Technical};

    let skills = vec![
        Skill::new("programming", Technical, Some("Software development"), 5)?,
        Skill::new("data_analysis", Technical, Some("Working with data"), 4)?,
        Skill::new("design", Technical, Some("Graphic and UX design"), 3)?,
        Skill::new("creativity", Behavioral, Some("Creative thinking"), 4)?,
        Skill::new("leadership", Behavioral, Some("Leading teams"), 4)?,
        Skill::new("communication", Behavioral, Some("Effective communication"), 4)?,
        Skill::new("adaptability", Hybrid, Some("Flexibility under change"), 5)?,
        Skill::new("innovation", Hybrid, Some("Ability to innovate"), 4)?,
    ];
    Ok(skills)
}

/// Build the career catalog, in presentation order.
///
/// Catalog order matters: the engine's tie-break keeps it for equal scores.
pub fn build_careers() -> Vec<Career> {
    let mut careers = Vec::new();

    let mut developer = Career::new(
        "Software Developer",
        "Building applications and systems",
        200,
        8000.0,
    );
    developer
        .add_essential("programming")
        .add_important("data_analysis")
        .add_desirable("creativity");
    careers.push(developer);

    let mut designer = Career::new(
        "Digital Designer",
        "Designing digital interfaces and experiences",
        150,
        6000.0,
    );
    designer
        .add_essential("design")
        .add_essential("creativity")
        .add_important("communication");
    careers.push(designer);

    let mut manager = Career::new(
        "Project Manager",
        "Managing projects and teams",
        120,
        7000.0,
    );
    manager
        .add_essential("leadership")
        .add_essential("communication")
        .add_important("adaptability");
    careers.push(manager);

    let mut consultant = Career::new(
        "Innovation Consultant",
        "Consulting on innovation processes",
        180,
        9000.0,
    );
    consultant
        .add_essential("innovation")
        .add_essential("adaptability")
        .add_important("leadership");
    careers.push(consultant);

    careers
}
