//! Interactive profile intake.
//!
//! Walks the user through identity questions, a rating pass over the skill
//! catalog, and goal selection, re-prompting on validation failures via
//! `dialoguer`'s validator hooks. The result is a fully validated
//! [`Profile`] ready to save.

use anyhow::Result;
use career_compass_core::{validate, Profile, Skill};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};

use crate::catalog::SUGGESTED_GOALS;
use crate::render::level_label;

/// Run the interactive intake flow and return the completed profile.
pub fn run(skills: &[Skill]) -> Result<Profile> {
    let theme = ColorfulTheme::default();

    println!("Create a new profile");
    println!("--------------------");

    let name: String = Input::with_theme(&theme)
        .with_prompt("Your name")
        .validate_with(|input: &String| {
            validate::validate_person_name(input).map_err(|e| e.to_string())
        })
        .interact_text()?;

    let age: u32 = Input::with_theme(&theme)
        .with_prompt("Your age")
        .validate_with(|input: &u32| validate::validate_age(*input).map_err(|e| e.to_string()))
        .interact_text()?;

    let current_field: Option<String> = if Confirm::with_theme(&theme)
        .with_prompt("Are you currently working in a field?")
        .default(true)
        .interact()?
    {
        let field: String = Input::with_theme(&theme)
            .with_prompt("Current field of work")
            .validate_with(|input: &String| {
                validate::validate_field(input).map_err(|e| e.to_string())
            })
            .interact_text()?;
        Some(field.trim().to_string())
    } else {
        None
    };

    let mut profile = Profile::new(name.trim(), age, current_field.as_deref());

    println!();
    println!("Rate your skills (skip the ones you don't have):");
    let level_items: Vec<String> = std::iter::once("Skip".to_string())
        .chain((1..=5).map(|lvl| format!("{lvl} — {}", level_label(lvl))))
        .collect();

    for skill in skills {
        let prompt = match &skill.description {
            Some(desc) => format!("{} ({desc})", skill.name),
            None => skill.name.clone(),
        };
        let choice = Select::with_theme(&theme)
            .with_prompt(prompt)
            .items(&level_items)
            .default(0)
            .interact()?;
        if choice > 0 {
            // choices 1..=5 map directly to levels, already in range
            profile.set_skill_level(&skill.name, choice as u8)?;
        }
    }

    println!();
    let selected = MultiSelect::with_theme(&theme)
        .with_prompt("Select your goals (space to toggle, enter to confirm)")
        .items(&SUGGESTED_GOALS)
        .interact()?;
    for idx in selected {
        profile.add_goal(SUGGESTED_GOALS[idx]);
    }

    println!();
    println!("Profile created: {profile}");
    Ok(profile)
}
