//! # Career Compass CLI (`careers`)
//!
//! The `careers` binary is the interactive front end for the matching engine.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `careers skills` | List the skill catalog |
//! | `careers careers` | List the career catalog with requirements |
//! | `careers new` | Create a profile interactively and save it |
//! | `careers show` | Display a saved profile |
//! | `careers recommend` | Rank careers against a profile |
//! | `careers gaps` | List skill gaps against one career |
//! | `careers report` | Full advisory report (matches + gaps + readiness) |
//!
//! ## Examples
//!
//! ```bash
//! careers new --output ana.toml
//! careers recommend --profile ana.toml --limit 3
//! careers gaps --profile ana.toml --career "Software Developer"
//! careers report --profile ana.toml --json
//! ```

use std::path::PathBuf;

use anyhow::{bail, Result};
use career_compass_core::MatchEngine;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use career_compass::{catalog, config, intake, profile_store, render};

/// Career Compass — rate your skills, get ranked career matches and
/// skill-gap analysis.
#[derive(Parser)]
#[command(
    name = "careers",
    about = "Career Compass — career recommendations from self-rated skills",
    version,
    long_about = "Career Compass scores a profile of self-rated skills against a catalog of \
    career archetypes using tier-weighted compatibility scoring, ranks the best matches, and \
    lists the skill gaps for any career. Profiles are plain TOML files."
)]
struct Cli {
    /// Path to configuration file (TOML). Missing file means defaults.
    #[arg(long, global = true, default_value = "./careers.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// List the skill catalog.
    Skills,

    /// List the career catalog with growth, salary, and requirements.
    Careers,

    /// Create a new profile interactively and save it as TOML.
    New {
        /// Where to write the profile.
        #[arg(long, default_value = "profile.toml")]
        output: PathBuf,
    },

    /// Display a saved profile.
    Show {
        /// Path to the profile TOML file.
        #[arg(long, default_value = "profile.toml")]
        profile: PathBuf,
    },

    /// Rank careers by compatibility with a profile.
    Recommend {
        /// Path to the profile TOML file.
        #[arg(long, default_value = "profile.toml")]
        profile: PathBuf,

        /// Maximum number of careers to return (defaults from config).
        #[arg(long)]
        limit: Option<usize>,

        /// Print the ranked list as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// List the skills a profile still needs for one career.
    Gaps {
        /// Path to the profile TOML file.
        #[arg(long, default_value = "profile.toml")]
        profile: PathBuf,

        /// Career name, exactly as listed by `careers careers`.
        #[arg(long)]
        career: String,

        /// Print the gap list as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Full advisory report: ranked matches, gaps for the top match, and
    /// future readiness.
    Report {
        /// Path to the profile TOML file.
        #[arg(long, default_value = "profile.toml")]
        profile: PathBuf,

        /// Print the report as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = config::load(&cli.config)?;

    let skills = catalog::build_skills()?;
    let careers = catalog::build_careers();
    debug!(skills = skills.len(), careers = careers.len(), "catalog built");
    let engine = MatchEngine::new(&careers);

    match cli.command {
        Commands::Skills => {
            render::print_skills(&skills);
        }
        Commands::Careers => {
            render::print_careers(&careers, &config.output);
        }
        Commands::New { output } => {
            let profile = intake::run(&skills)?;
            profile_store::save(&profile, &output)?;
            println!("Saved profile to {}", output.display());
        }
        Commands::Show { profile } => {
            let profile = profile_store::load(&profile)?;
            render::print_profile(&profile);
        }
        Commands::Recommend {
            profile,
            limit,
            json,
        } => {
            let profile = profile_store::load(&profile)?;
            let limit = limit.unwrap_or(config.recommendation.limit);
            let ranked = engine.recommend(&profile, limit);
            if json {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
            } else {
                render::print_recommendations(&ranked, &config.output);
            }
        }
        Commands::Gaps {
            profile,
            career,
            json,
        } => {
            let profile = profile_store::load(&profile)?;
            let Some(career) = careers.iter().find(|c| c.name == career) else {
                bail!(
                    "unknown career: {career}. Run `careers careers` to list the catalog."
                );
            };
            let gaps = engine.identify_gaps(&profile, career);
            if json {
                println!("{}", serde_json::to_string_pretty(&gaps)?);
            } else {
                render::print_gaps(career, &gaps);
            }
        }
        Commands::Report { profile, json } => {
            let profile = profile_store::load(&profile)?;
            let report = engine.report(&profile);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                render::print_report(&report, &config.output);
            }
        }
    }

    Ok(())
}
