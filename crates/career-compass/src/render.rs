//! Terminal rendering for catalogs, profiles, and match results.
//!
//! The engine returns plain data; everything user-facing (level labels,
//! salary formatting, column alignment) happens here so the core stays
//! presentation-free.

use career_compass_core::{Career, MatchReport, Profile, Recommendation, Skill, Tier};

use crate::config::OutputConfig;

/// Descriptive label for a 1–5 level; 0 and anything out of range render as
/// "Unrated".
pub fn level_label(level: u8) -> &'static str {
    match level {
        1 => "Beginner",
        2 => "Basic",
        3 => "Intermediate",
        4 => "Advanced",
        5 => "Expert",
        _ => "Unrated",
    }
}

/// Single-character marker used in skill listings.
pub fn level_marker(level: u8) -> &'static str {
    match level {
        1 => "▁",
        2 => "▂",
        3 => "▄",
        4 => "▆",
        5 => "█",
        _ => "·",
    }
}

/// Format a salary with a thousands separator, e.g. `$ 8,000`.
pub fn format_salary(amount: f64, output: &OutputConfig) -> String {
    if amount <= 0.0 {
        return "not available".to_string();
    }
    let whole = amount.round() as u64;
    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{} {}", output.currency, grouped)
}

/// Print the skill catalog grouped by category.
pub fn print_skills(skills: &[Skill]) {
    println!("Available skills");
    println!("================");
    println!();
    for skill in skills {
        println!(
            "  {:<16} {:<12} demand {}/5  {}",
            skill.name,
            skill.category,
            skill.future_demand_level,
            skill.description.as_deref().unwrap_or("")
        );
    }
}

/// Print the career catalog with growth, salary, and tiered requirements.
pub fn print_careers(careers: &[Career], output: &OutputConfig) {
    println!("Career catalog");
    println!("==============");
    for career in careers {
        println!();
        println!("  {}", career.name);
        println!("    {}", career.description);
        println!(
            "    Growth: {}%  ({})  Salary: {}",
            career.projected_growth_percent,
            career.attractiveness(),
            format_salary(career.average_salary, output)
        );
        for tier in Tier::ALL {
            let skills = career.skills_in(tier);
            if !skills.is_empty() {
                println!("    {:?}: {}", tier, skills.join(", "));
            }
        }
    }
}

/// Print a profile summary with rated skills and goals.
pub fn print_profile(profile: &Profile) {
    println!("Profile: {}", profile.name);
    println!("  Age:   {}", profile.age);
    if let Some(field) = &profile.current_field {
        println!("  Field: {field}");
    }
    println!("  Created: {}", profile.created_at.format("%Y-%m-%d %H:%M"));
    println!();
    if profile.skill_count() == 0 {
        println!("  No skills rated yet.");
    } else {
        println!("  Skills ({}):", profile.skill_count());
        for (skill, level) in profile.skills() {
            println!(
                "    {} {:<16} {} ({}/5)",
                level_marker(level),
                skill,
                level_label(level),
                level
            );
        }
        println!("  Average level: {:.1}", profile.average_level());
    }
    if !profile.goals().is_empty() {
        println!();
        println!("  Goals:");
        for goal in profile.goals() {
            println!("    - {goal}");
        }
    }
}

/// Print ranked recommendations as a numbered list.
pub fn print_recommendations(recommendations: &[Recommendation<'_>], output: &OutputConfig) {
    if recommendations.is_empty() {
        println!("No careers in the catalog to recommend.");
        return;
    }
    println!("Best matches");
    println!("============");
    for (i, rec) in recommendations.iter().enumerate() {
        println!();
        println!("  {}. {}  —  {:.1}% compatible", i + 1, rec.career.name, rec.score);
        println!(
            "     Growth: {}%  Salary: {}{}",
            rec.career.projected_growth_percent,
            format_salary(rec.career.average_salary, output),
            if rec.career.is_future_career() {
                "  [future career]"
            } else {
                ""
            }
        );
    }
}

/// Print a gap list for one career.
pub fn print_gaps(career: &Career, gaps: &[String]) {
    if gaps.is_empty() {
        println!(
            "No gaps — every skill {} requires is already at level 3 or above.",
            career.name
        );
        return;
    }
    println!("Skills to develop for {}:", career.name);
    for gap in gaps {
        println!("  - {gap}");
    }
}

/// Print the full advisory report.
pub fn print_report(report: &MatchReport<'_>, output: &OutputConfig) {
    let title = format!("Career report for {}", report.profile_name);
    println!("{title}");
    println!("{}", "=".repeat(title.chars().count()));
    println!();
    println!("  Rated skills: {}", report.rated_skill_count);
    println!(
        "  Future readiness: {:.1}% — {}",
        report.future_readiness_percent, report.future_readiness
    );
    println!();
    print_recommendations(&report.recommendations, output);
    if let Some(top) = report.recommendations.first() {
        println!();
        print_gaps(top.career, &report.development_areas);
    }
}
