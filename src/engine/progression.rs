//! Level progression.
//!
//! Progress toward the next level is a discrete, unweighted count: the
//! fraction of a tier's skills whose summary rating counts toward
//! progression. A skill rated Mastered counts identically to one rated
//! exactly Confident; there is no partial credit.

use serde::Serialize;

use super::aggregate::{summary_rating, RatingSummary};
use crate::config::PolicyConfig;
use crate::domain::{Skill, SkillLevel};

/// Fraction in `[0, 1]` of the level's skills rated Confident or better.
///
/// 0 by convention when the level has no skills in the catalog.
#[must_use]
pub fn progress(skills_at_level: &[Skill], summary: &RatingSummary) -> f64 {
    if skills_at_level.is_empty() {
        return 0.0;
    }
    let counting = skills_at_level
        .iter()
        .filter(|s| summary_rating(summary, &s.id).counts_toward_progression())
        .count();
    #[allow(clippy::cast_precision_loss)]
    {
        counting as f64 / skills_at_level.len() as f64
    }
}

/// Whether the user has cleared the unlock threshold for this level.
#[must_use]
pub fn can_advance(
    skills_at_level: &[Skill],
    summary: &RatingSummary,
    policy: &PolicyConfig,
) -> bool {
    progress(skills_at_level, summary) >= policy.unlock_threshold
}

/// The level after `current`, or `None` at the top.
///
/// Adjacency itself is defined once, on [`SkillLevel::next`].
#[must_use]
pub fn next_level(current: SkillLevel) -> Option<SkillLevel> {
    current.next()
}

/// Overall progress statistics across the whole catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressStatistics {
    pub total_skills: usize,
    pub assessed_skills: usize,
    pub confident_skills: usize,
    pub recent_assessments: usize,
    pub completion_percentage: f64,
}

/// Statistics over all catalog skills and the current summary.
///
/// `recent_assessments` is supplied by the caller (a windowed store query)
/// so this stays a pure function of its inputs.
#[must_use]
pub fn statistics(
    all_skills: &[Skill],
    summary: &RatingSummary,
    recent_assessments: usize,
) -> ProgressStatistics {
    let confident_skills = summary
        .values()
        .filter(|r| r.counts_toward_progression())
        .count();
    let completion_percentage = if all_skills.is_empty() {
        0.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        {
            confident_skills as f64 / all_skills.len() as f64
        }
    };

    ProgressStatistics {
        total_skills: all_skills.len(),
        assessed_skills: summary.len(),
        confident_skills,
        recent_assessments,
        completion_percentage,
    }
}
