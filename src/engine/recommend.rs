//! Skill recommendations.
//!
//! A two-phase filter-then-stable-sort over a level's skills. Each
//! suggestion carries a reason code so the UI can explain *why* a skill was
//! picked; there is deliberately no numeric scoring.

use serde::Serialize;

use super::aggregate::{summary_rating, RatingSummary};
use crate::domain::{Rating, Skill, SkillLevel};

/// Why a skill was suggested. Declaration order is the priority order:
/// earlier reasons sort first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCode {
    BuildingFoundation,
    NotYetAssessed,
    NeedsMorePractice,
    NextInProgression,
    DomainBalance,
}

impl ReasonCode {
    #[must_use]
    pub fn display_text(self) -> &'static str {
        match self {
            Self::BuildingFoundation => "Building your foundation",
            Self::NotYetAssessed => "Not yet assessed",
            Self::NeedsMorePractice => "Needs more practice",
            Self::NextInProgression => "Next in your progression",
            Self::DomainBalance => "Rounds out your skills",
        }
    }
}

/// A suggested skill together with the reason it was picked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub skill: Skill,
    pub reason: ReasonCode,
}

fn classify(skill: &Skill, rating: Rating, level: SkillLevel) -> Option<ReasonCode> {
    match rating {
        Rating::NotAssessed
            if skill.prerequisites.is_empty() && level == SkillLevel::Beginner =>
        {
            Some(ReasonCode::BuildingFoundation)
        }
        Rating::NotAssessed => Some(ReasonCode::NotYetAssessed),
        Rating::NeedsWork => Some(ReasonCode::NeedsMorePractice),
        Rating::Developing => Some(ReasonCode::NextInProgression),
        // Already proficient, nothing to suggest.
        Rating::Confident | Rating::Mastered => None,
    }
}

/// Suggest up to `limit` skills to work on at `level`, each with a reason.
///
/// Candidates are classified by their summary rating, then stable-sorted by
/// reason priority; ties within a reason keep catalog order.
#[must_use]
pub fn suggest(
    level: SkillLevel,
    skills_at_level: &[Skill],
    summary: &RatingSummary,
    limit: usize,
) -> Vec<Suggestion> {
    let mut candidates: Vec<Suggestion> = skills_at_level
        .iter()
        .filter_map(|skill| {
            let rating = summary_rating(summary, &skill.id);
            classify(skill, rating, level).map(|reason| Suggestion {
                skill: skill.clone(),
                reason,
            })
        })
        .collect();

    candidates.sort_by_key(|s| s.reason);
    candidates.truncate(limit);
    candidates
}

/// The simpler variant: up to `limit` skills ordered purely by ascending
/// rating (not-assessed first), no reason metadata.
#[must_use]
pub fn suggest_skills_only<'a>(
    skills_at_level: &'a [Skill],
    summary: &RatingSummary,
    limit: usize,
) -> Vec<&'a Skill> {
    let mut skills: Vec<&Skill> = skills_at_level.iter().collect();
    skills.sort_by_key(|s| summary_rating(summary, &s.id));
    skills.truncate(limit);
    skills
}
