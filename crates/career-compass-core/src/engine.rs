//! The career matching engine: compatibility scoring, ranked
//! recommendations, and skill-gap analysis.
//!
//! The engine borrows a career catalog and holds no other state. All three
//! operations are pure and total: any profile (including an empty one) and
//! any career (including one with no requirements) produce a defined result,
//! never an error.
//!
//! # Scoring
//!
//! Compatibility is a weighted-sum ratio. Every requirement entry contributes
//! `level × weight` user points against `5 × weight` maximum points, with
//! tier weights essential 3, important 2, desirable 1. A skill listed in two
//! tiers is counted once per tier; the formula does not deduplicate, and the
//! gap traversal mirrors that. The ratio is scaled to 0–100 and rounded to
//! one decimal place, half away from zero.

use serde::Serialize;

use crate::career::{Career, Tier};
use crate::profile::{Profile, Readiness, ADEQUATE_LEVEL};

/// Default number of recommendations returned by [`MatchEngine::report`]
/// and the conventional `limit` for [`MatchEngine::recommend`].
pub const DEFAULT_LIMIT: usize = 3;

/// Maximum self-rated skill level; one requirement entry is worth
/// `MAX_LEVEL × weight` points.
const MAX_LEVEL: u32 = 5;

/// Round to one decimal place, half away from zero.
///
/// This is the crate's single rounding rule for scores. `f64::round` rounds
/// halves away from zero, so `36.05` becomes `36.1` rather than the
/// banker's `36.0`.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// A career paired with its compatibility score, best match first.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation<'a> {
    pub career: &'a Career,
    /// Compatibility in `[0.0, 100.0]`, one decimal place.
    pub score: f64,
}

/// Plain-data summary produced by [`MatchEngine::report`].
///
/// Rendering (currency, level labels, colors) is the caller's concern; this
/// struct only carries the numbers and names.
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport<'a> {
    pub profile_name: String,
    pub rated_skill_count: usize,
    pub recommendations: Vec<Recommendation<'a>>,
    /// Gaps against the top recommendation; empty when the catalog is empty.
    pub development_areas: Vec<String>,
    pub future_readiness_percent: f64,
    pub future_readiness: Readiness,
}

/// Stateless matching engine over a borrowed career catalog.
pub struct MatchEngine<'a> {
    careers: &'a [Career],
}

impl<'a> MatchEngine<'a> {
    pub fn new(careers: &'a [Career]) -> Self {
        Self { careers }
    }

    /// The catalog this engine ranks against.
    pub fn careers(&self) -> &'a [Career] {
        self.careers
    }

    /// Weighted-sum compatibility between a profile and one career, in
    /// `[0.0, 100.0]` with one decimal place.
    ///
    /// A career with no requirements in any tier scores exactly `0.0`; no
    /// division is attempted.
    pub fn compatibility(&self, profile: &Profile, career: &Career) -> f64 {
        let mut user_points: u32 = 0;
        let mut max_points: u32 = 0;

        for tier in Tier::ALL {
            let weight = tier.weight();
            for skill in career.skills_in(tier) {
                user_points += u32::from(profile.skill_level(skill)) * weight;
                max_points += MAX_LEVEL * weight;
            }
        }

        if max_points == 0 {
            return 0.0;
        }
        round_to_tenth(f64::from(user_points) / f64::from(max_points) * 100.0)
    }

    /// Score every career in the catalog and return the best `limit` matches,
    /// sorted by descending score.
    ///
    /// The sort is stable: careers with equal scores keep their catalog
    /// order. Asking for more entries than the catalog holds returns the
    /// whole catalog, fully ranked.
    pub fn recommend(&self, profile: &Profile, limit: usize) -> Vec<Recommendation<'a>> {
        let mut ranked: Vec<Recommendation<'a>> = self
            .careers
            .iter()
            .map(|career| Recommendation {
                career,
                score: self.compatibility(profile, career),
            })
            .collect();

        // Vec::sort_by is stable, which is what keeps tied careers in
        // catalog order.
        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked.truncate(limit);
        ranked
    }

    /// Skill names the profile still needs to develop for `career`: every
    /// requirement entry whose rated level is below [`ADEQUATE_LEVEL`].
    ///
    /// Traversal is essential → important → desirable, each tier in insertion
    /// order, without cross-tier deduplication — a skill required in two
    /// tiers and still below the bar appears twice, mirroring how the
    /// scoring formula counts it.
    pub fn identify_gaps(&self, profile: &Profile, career: &Career) -> Vec<String> {
        career
            .all_required_skills()
            .filter(|skill| profile.skill_level(skill) < ADEQUATE_LEVEL)
            .map(str::to_string)
            .collect()
    }

    /// Full advisory summary: ranked recommendations (default limit), gaps
    /// against the top match, and the profile's future readiness.
    pub fn report(&self, profile: &Profile) -> MatchReport<'a> {
        let recommendations = self.recommend(profile, DEFAULT_LIMIT);
        let development_areas = recommendations
            .first()
            .map(|top| self.identify_gaps(profile, top.career))
            .unwrap_or_default();
        let (future_readiness_percent, future_readiness) = profile.future_readiness();

        MatchReport {
            profile_name: profile.name.clone(),
            rated_skill_count: profile.skill_count(),
            recommendations,
            development_areas,
            future_readiness_percent,
            future_readiness,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_with(levels: &[(&str, u8)]) -> Profile {
        let mut profile = Profile::new("Test", 30, None);
        for (skill, level) in levels {
            profile.set_skill_level(*skill, *level).unwrap();
        }
        profile
    }

    fn two_tier_career() -> Career {
        // essential=["x"], important=["y"]: max_points = 15 + 10 = 25
        let mut career = Career::new("C", "", 100, 1000.0);
        career.add_essential("x").add_important("y");
        career
    }

    #[test]
    fn full_marks_score_100() {
        let career = two_tier_career();
        let profile = profile_with(&[("x", 5), ("y", 5)]);
        let engine = MatchEngine::new(std::slice::from_ref(&career));
        assert_eq!(engine.compatibility(&profile, &career), 100.0);
    }

    #[test]
    fn empty_profile_scores_zero() {
        let career = two_tier_career();
        let profile = profile_with(&[]);
        let engine = MatchEngine::new(std::slice::from_ref(&career));
        assert_eq!(engine.compatibility(&profile, &career), 0.0);
    }

    #[test]
    fn partial_profile_weighted_ratio() {
        // x=3 → user_points = 9, max = 25 → 36.0
        let career = two_tier_career();
        let profile = profile_with(&[("x", 3)]);
        let engine = MatchEngine::new(std::slice::from_ref(&career));
        assert_eq!(engine.compatibility(&profile, &career), 36.0);
    }

    #[test]
    fn career_without_requirements_scores_zero() {
        let career = Career::new("Empty", "", 0, 0.0);
        let profile = profile_with(&[("x", 5)]);
        let engine = MatchEngine::new(std::slice::from_ref(&career));
        assert_eq!(engine.compatibility(&profile, &career), 0.0);
    }

    #[test]
    fn score_stays_in_range() {
        let mut career = Career::new("C", "", 0, 0.0);
        career.add_essential("a").add_important("b").add_desirable("c");
        let engine = MatchEngine::new(std::slice::from_ref(&career));
        for levels in [&[][..], &[("a", 1)][..], &[("a", 5), ("b", 5), ("c", 5)][..]] {
            let profile = profile_with(levels);
            let score = engine.compatibility(&profile, &career);
            assert!((0.0..=100.0).contains(&score), "score out of range: {score}");
        }
    }

    #[test]
    fn duplicate_across_tiers_counts_per_tier() {
        // "x" in essential and desirable: max = 15 + 5 = 20, x=5 → 100.0,
        // x=2 → (6 + 2) / 20 → 40.0
        let mut career = Career::new("C", "", 0, 0.0);
        career.add_essential("x").add_desirable("x");
        let engine = MatchEngine::new(std::slice::from_ref(&career));
        assert_eq!(engine.compatibility(&profile_with(&[("x", 5)]), &career), 100.0);
        assert_eq!(engine.compatibility(&profile_with(&[("x", 2)]), &career), 40.0);
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        // Three desirable skills: max = 15, points 2+2+3 = 7 → 46.666… → 46.7.
        let mut career = Career::new("C", "", 0, 0.0);
        career.add_desirable("a").add_desirable("b").add_desirable("c");
        let engine = MatchEngine::new(std::slice::from_ref(&career));
        let profile = profile_with(&[("a", 2), ("b", 2), ("c", 3)]);
        assert_eq!(engine.compatibility(&profile, &career), 46.7);

        // 0.25 is exactly representable, so this pins the tie-break: half
        // away from zero gives 0.3 where half-to-even would give 0.2.
        assert_eq!(super::round_to_tenth(0.25), 0.3);
        assert_eq!(super::round_to_tenth(-0.25), -0.3);
    }

    #[test]
    fn scoring_is_idempotent() {
        let career = two_tier_career();
        let profile = profile_with(&[("x", 3), ("y", 1)]);
        let engine = MatchEngine::new(std::slice::from_ref(&career));
        let first = engine.compatibility(&profile, &career);
        let second = engine.compatibility(&profile, &career);
        assert_eq!(first, second);
        assert_eq!(
            engine.identify_gaps(&profile, &career),
            engine.identify_gaps(&profile, &career)
        );
    }

    fn catalog() -> Vec<Career> {
        let mut dev = Career::new("Developer", "", 200, 8000.0);
        dev.add_essential("programming").add_important("data_analysis");
        let mut designer = Career::new("Designer", "", 150, 6000.0);
        designer.add_essential("design").add_essential("creativity");
        let mut manager = Career::new("Manager", "", 120, 7000.0);
        manager.add_essential("leadership").add_essential("communication");
        vec![dev, designer, manager]
    }

    #[test]
    fn recommend_sorts_descending_and_truncates() {
        let careers = catalog();
        let engine = MatchEngine::new(&careers);
        let profile = profile_with(&[("design", 5), ("creativity", 5), ("programming", 3)]);

        let top_two = engine.recommend(&profile, 2);
        assert_eq!(top_two.len(), 2);
        assert_eq!(top_two[0].career.name, "Designer");
        assert_eq!(top_two[0].score, 100.0);
        assert_eq!(top_two[1].career.name, "Developer");
        assert!(top_two[0].score >= top_two[1].score);
    }

    #[test]
    fn recommend_limit_beyond_catalog_returns_everything() {
        let careers = catalog();
        let engine = MatchEngine::new(&careers);
        let ranked = engine.recommend(&profile_with(&[]), 10);
        assert_eq!(ranked.len(), 3);
    }

    #[test]
    fn ties_keep_catalog_order() {
        // Empty profile scores every career 0.0, so catalog order must
        // survive the sort.
        let careers = catalog();
        let engine = MatchEngine::new(&careers);
        let ranked = engine.recommend(&profile_with(&[]), 10);
        let names: Vec<_> = ranked.iter().map(|r| r.career.name.as_str()).collect();
        assert_eq!(names, ["Developer", "Designer", "Manager"]);
        assert!(ranked.iter().all(|r| r.score == 0.0));
    }

    #[test]
    fn recommend_on_empty_catalog_is_empty() {
        let careers: Vec<Career> = Vec::new();
        let engine = MatchEngine::new(&careers);
        assert!(engine.recommend(&profile_with(&[("x", 5)]), 3).is_empty());
    }

    #[test]
    fn gaps_follow_tier_then_insertion_order() {
        let mut career = Career::new("C", "", 0, 0.0);
        career
            .add_essential("programming")
            .add_essential("data_analysis")
            .add_important("creativity")
            .add_desirable("design");
        let engine = MatchEngine::new(std::slice::from_ref(&career));

        let profile = profile_with(&[("programming", 3), ("creativity", 2)]);
        assert_eq!(
            engine.identify_gaps(&profile, &career),
            ["data_analysis", "creativity", "design"]
        );
    }

    #[test]
    fn gaps_empty_when_profile_meets_the_bar() {
        let career = two_tier_career();
        let profile = profile_with(&[("x", 3), ("y", 4)]);
        let engine = MatchEngine::new(std::slice::from_ref(&career));
        assert!(engine.identify_gaps(&profile, &career).is_empty());
    }

    #[test]
    fn gaps_repeat_cross_tier_duplicates() {
        let mut career = Career::new("C", "", 0, 0.0);
        career.add_essential("creativity").add_desirable("creativity");
        let engine = MatchEngine::new(std::slice::from_ref(&career));
        let profile = profile_with(&[("creativity", 1)]);
        assert_eq!(
            engine.identify_gaps(&profile, &career),
            ["creativity", "creativity"]
        );
    }

    #[test]
    fn report_uses_top_recommendation_for_gaps() {
        let careers = catalog();
        let engine = MatchEngine::new(&careers);
        let profile = profile_with(&[("design", 5), ("creativity", 2)]);

        let report = engine.report(&profile);
        assert_eq!(report.profile_name, "Test");
        assert_eq!(report.rated_skill_count, 2);
        assert_eq!(report.recommendations[0].career.name, "Designer");
        // creativity is rated 2, below the adequacy bar
        assert_eq!(report.development_areas, ["creativity"]);
    }

    #[test]
    fn report_on_empty_catalog_has_no_gaps() {
        let careers: Vec<Career> = Vec::new();
        let engine = MatchEngine::new(&careers);
        let report = engine.report(&profile_with(&[("x", 1)]));
        assert!(report.recommendations.is_empty());
        assert!(report.development_areas.is_empty());
    }

    #[test]
    fn report_serializes_to_json() {
        let careers = catalog();
        let engine = MatchEngine::new(&careers);
        let report = engine.report(&profile_with(&[("programming", 4)]));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["profile_name"], "Test");
        assert!(json["recommendations"].as_array().unwrap().len() <= DEFAULT_LIMIT);
    }
}
