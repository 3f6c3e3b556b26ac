//! Property tests for the engine's algebraic guarantees.

use proptest::prelude::*;

use turnlab::config::PolicyConfig;
use turnlab::domain::{Assessment, Rating, SkillLevel, TerrainContext};
use turnlab::engine::{access, aggregate, progression, recommend};
use turnlab::test_utils::skills_at;

fn arb_rating() -> impl Strategy<Value = Rating> {
    prop_oneof![
        Just(Rating::NotAssessed),
        Just(Rating::NeedsWork),
        Just(Rating::Developing),
        Just(Rating::Confident),
        Just(Rating::Mastered),
    ]
}

fn arb_context() -> impl Strategy<Value = TerrainContext> {
    prop::sample::select(TerrainContext::ALL.to_vec())
}

// A small pool of skill ids so histories collide on the same skill.
fn arb_skill_id() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "stance".to_string(),
        "wedge".to_string(),
        "carving".to_string(),
        "moguls".to_string(),
    ])
}

fn arb_assessment() -> impl Strategy<Value = Assessment> {
    (arb_skill_id(), arb_context(), arb_rating()).prop_map(|(skill_id, context, rating)| {
        Assessment::new(skill_id, context, rating, None)
    })
}

fn arb_history() -> impl Strategy<Value = Vec<Assessment>> {
    prop::collection::vec(arb_assessment(), 0..24)
}

proptest! {
    #[test]
    fn adding_an_assessment_never_lowers_best(
        history in arb_history(),
        extra in arb_assessment(),
    ) {
        let before = aggregate::best_rating(&extra.skill_id, &history);
        let mut extended = history;
        extended.push(extra.clone());
        let after = aggregate::best_rating(&extra.skill_id, &extended);
        prop_assert!(after >= before);
    }

    #[test]
    fn summary_is_independent_of_input_order(history in arb_history()) {
        let forward = aggregate::rating_summary(&history);
        let mut reversed = history;
        reversed.reverse();
        prop_assert_eq!(aggregate::rating_summary(&reversed), forward);
    }

    #[test]
    fn summary_is_total_for_unknown_ids(history in arb_history()) {
        let summary = aggregate::rating_summary(&history);
        prop_assert_eq!(
            aggregate::summary_rating(&summary, "never-assessed"),
            Rating::NotAssessed
        );
    }

    #[test]
    fn progress_stays_in_bounds(history in arb_history()) {
        let skills = skills_at(SkillLevel::Beginner, &["stance", "wedge", "carving"]);
        let summary = aggregate::rating_summary(&history);
        let fraction = progression::progress(&skills, &summary);
        prop_assert!((0.0..=1.0).contains(&fraction));
    }

    #[test]
    fn advance_agrees_with_threshold(history in arb_history()) {
        let policy = PolicyConfig::default();
        let skills = skills_at(SkillLevel::Beginner, &["stance", "wedge", "carving"]);
        let summary = aggregate::rating_summary(&history);
        prop_assert_eq!(
            progression::can_advance(&skills, &summary, &policy),
            progression::progress(&skills, &summary) >= policy.unlock_threshold
        );
    }

    #[test]
    fn proficient_skills_never_suggested(history in arb_history()) {
        let skills = skills_at(SkillLevel::Novice, &["stance", "wedge", "carving", "moguls"]);
        let summary = aggregate::rating_summary(&history);
        let suggestions = recommend::suggest(SkillLevel::Novice, &skills, &summary, 10);
        for suggestion in suggestions {
            let rating = aggregate::summary_rating(&summary, &suggestion.skill.id);
            prop_assert!(rating < Rating::Confident);
        }
    }

    #[test]
    fn suggestions_are_sorted_by_reason_priority(history in arb_history()) {
        let skills = skills_at(SkillLevel::Novice, &["stance", "wedge", "carving", "moguls"]);
        let summary = aggregate::rating_summary(&history);
        let suggestions = recommend::suggest(SkillLevel::Novice, &skills, &summary, 10);
        for pair in suggestions.windows(2) {
            prop_assert!(pair[0].reason <= pair[1].reason);
        }
    }

    #[test]
    fn grant_is_a_prefix_of_catalog_order(count in 0usize..8) {
        let policy = PolicyConfig::default();
        let ids = ["a", "b", "c", "d", "e", "f", "g", "h"];
        let skills = skills_at(SkillLevel::Novice, &ids[..count]);
        let granted = access::granted_free_skill_ids(SkillLevel::Novice, &skills, &policy);

        let expected = policy.free_skill_count(SkillLevel::Novice).min(count);
        prop_assert_eq!(granted.len(), expected);
        for id in &ids[..expected] {
            prop_assert!(granted.contains(*id));
        }
    }

    #[test]
    fn beginner_skills_always_accessible(premium in any::<bool>()) {
        let skills = skills_at(SkillLevel::Beginner, &["stance"]);
        prop_assert!(access::can_access(&skills[0], premium, &Default::default()));
    }
}
