//! # Career Compass Core
//!
//! Shared domain logic for Career Compass: the data model (skills, careers,
//! profiles), intake validation, and the career matching engine.
//!
//! This crate performs no I/O and has no terminal, filesystem, or async
//! dependencies. The calling application owns the catalogs and the profile,
//! builds them through the validated constructors here, and hands them to
//! [`engine::MatchEngine`] by reference for scoring, ranking, and gap
//! analysis. Everything the engine returns is plain data; presentation is
//! the caller's job.

pub mod career;
pub mod engine;
pub mod error;
pub mod profile;
pub mod skill;
pub mod validate;

pub use career::{Attractiveness, Career, Tier};
pub use engine::{MatchEngine, MatchReport, Recommendation, DEFAULT_LIMIT};
pub use error::ValidationError;
pub use profile::{Profile, Readiness, ADEQUATE_LEVEL, FUTURE_SKILLS};
pub use skill::{normalize_skill_name, Skill, SkillCategory};
