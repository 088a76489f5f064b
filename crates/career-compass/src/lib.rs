//! # Career Compass
//!
//! **An interactive career guidance tool.**
//!
//! Users rate their skills against a built-in catalog; the matching engine in
//! [`career_compass_core`] scores that profile against a catalog of career
//! archetypes, ranks the best matches, and lists the skill gaps for the top
//! match.
//!
//! ## Data Flow
//!
//! 1. [`catalog`] builds the skill and career catalogs once at startup.
//! 2. [`intake`] collects a profile interactively (or [`profile_store`]
//!    loads one from a TOML file).
//! 3. The core's `MatchEngine` borrows the catalog and the profile and
//!    returns plain scored data.
//! 4. [`render`] turns that data into terminal output; `--json` prints the
//!    serialized form instead.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`catalog`] | Built-in skill and career seed data |
//! | [`config`] | TOML configuration (limits, presentation) |
//! | [`profile_store`] | Profile TOML load/save with re-validation |
//! | [`intake`] | Interactive profile builder |
//! | [`render`] | Terminal rendering of catalogs and results |

pub mod catalog;
pub mod config;
pub mod intake;
pub mod profile_store;
pub mod render;
