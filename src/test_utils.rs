//! Shared fixture builders for tests.
//!
//! Kept in the library so in-file unit tests, the `tests/` suites, and doc
//! examples can all use the same fixtures.

use crate::catalog::Catalog;
use crate::domain::{Assessment, Rating, Skill, SkillLevel, TerrainContext};
use crate::engine::RatingSummary;

/// A minimal skill at a level, with no prerequisites or contexts.
#[must_use]
pub fn skill(id: &str, level: SkillLevel) -> Skill {
    Skill {
        id: id.to_string(),
        name: id.to_string(),
        level,
        domains: vec![],
        prerequisites: vec![],
        summary: String::new(),
        milestones: crate::domain::OutcomeMilestones::default(),
        assessment_contexts: vec![],
    }
}

/// Minimal skills at one level, in the given (declaration) order.
#[must_use]
pub fn skills_at(level: SkillLevel, ids: &[&str]) -> Vec<Skill> {
    ids.iter().map(|id| skill(id, level)).collect()
}

/// An assessment recorded now.
#[must_use]
pub fn assessment(skill_id: &str, context: TerrainContext, rating: Rating) -> Assessment {
    Assessment::new(skill_id, context, rating, None)
}

/// A rating summary from (skill id, rating) pairs.
#[must_use]
pub fn summary_of(entries: &[(&str, Rating)]) -> RatingSummary {
    entries
        .iter()
        .map(|(id, rating)| ((*id).to_string(), *rating))
        .collect()
}

/// A small catalog spanning all four levels.
///
/// Novice skills are deliberately declared out of alphabetical order so
/// order-sensitive tests can tell declaration order from sorted order.
#[must_use]
pub fn fixture_catalog() -> Catalog {
    let mut skills = vec![
        skill("stance", SkillLevel::Beginner),
        skill("wedge-turns", SkillLevel::Beginner),
        skill("stopping", SkillLevel::Beginner),
        skill("chairlift", SkillLevel::Beginner),
        skill("traverse", SkillLevel::Novice),
        skill("basic-carving", SkillLevel::Novice),
        skill("pole-plant", SkillLevel::Novice),
        skill("parallel-turns", SkillLevel::Intermediate),
        skill("hockey-stop", SkillLevel::Intermediate),
        skill("moguls", SkillLevel::Expert),
        skill("powder-technique", SkillLevel::Expert),
    ];
    skills[5].name = "Basic Carving".to_string();
    skills[5].summary = "Shape turns on edge instead of skidding.".to_string();
    skills[5].prerequisites = vec!["wedge-turns".to_string()];
    skills[7].prerequisites = vec!["basic-carving".to_string(), "traverse".to_string()];
    skills[0].assessment_contexts =
        vec![TerrainContext::GroomedGreen, TerrainContext::GroomedBlue];

    Catalog::new(skills).expect("fixture catalog ids are unique")
}
