//! Rating aggregation.
//!
//! Reduces raw assessment history to the views the other engine components
//! consume: a per-skill best rating, the latest assessment per context, and
//! the canonical per-skill rating summary.

use std::collections::{BTreeMap, HashMap};

use crate::domain::{Assessment, Rating, Skill, TerrainContext};

/// Per-skill best-ever rating, keyed by skill ID.
///
/// A transient view with no independent lifecycle: recompute it from the
/// full assessment history whenever assessment data changes. Skills with no
/// assessments are simply absent; look them up with
/// [`summary_rating`].
pub type RatingSummary = HashMap<String, Rating>;

/// Best rating achieved for a skill across all contexts and times.
///
/// `NotAssessed` when the skill has no assessments; never an error.
#[must_use]
pub fn best_rating(skill_id: &str, assessments: &[Assessment]) -> Rating {
    assessments
        .iter()
        .filter(|a| a.skill_id == skill_id)
        .map(|a| a.rating)
        .max()
        .unwrap_or(Rating::NotAssessed)
}

/// The most recent assessment for an exact (skill, context) pair.
///
/// Timestamp ties break by assessment ID so the result is deterministic
/// regardless of input ordering.
#[must_use]
pub fn latest_assessment<'a>(
    skill_id: &str,
    context: TerrainContext,
    assessments: &'a [Assessment],
) -> Option<&'a Assessment> {
    assessments
        .iter()
        .filter(|a| a.skill_id == skill_id && a.context == context)
        .max_by(|a, b| {
            a.recorded_at
                .cmp(&b.recorded_at)
                .then_with(|| a.id.cmp(&b.id))
        })
}

/// Canonical aggregation: best rating per skill, over the full history.
///
/// A pure set-reduction via per-key `max`, so output is identical for any
/// permutation of the input.
#[must_use]
pub fn rating_summary(assessments: &[Assessment]) -> RatingSummary {
    let mut summary = RatingSummary::new();
    for assessment in assessments {
        summary
            .entry(assessment.skill_id.clone())
            .and_modify(|rating| *rating = (*rating).max(assessment.rating))
            .or_insert(assessment.rating);
    }
    summary
}

/// Rating for a skill in a summary, with the defined `NotAssessed` default
/// for absent entries.
#[must_use]
pub fn summary_rating(summary: &RatingSummary, skill_id: &str) -> Rating {
    summary.get(skill_id).copied().unwrap_or_default()
}

/// Number of assessments per rating, over the whole history.
#[must_use]
pub fn assessment_counts(assessments: &[Assessment]) -> BTreeMap<Rating, usize> {
    let mut counts = BTreeMap::new();
    for assessment in assessments {
        *counts.entry(assessment.rating).or_insert(0) += 1;
    }
    counts
}

/// Fraction of a skill's declared assessment contexts that have been
/// assessed at least once. 0 when the skill declares no contexts.
#[must_use]
pub fn skill_completeness(skill: &Skill, assessments: &[Assessment]) -> f64 {
    if skill.assessment_contexts.is_empty() {
        return 0.0;
    }
    let assessed = skill
        .assessment_contexts
        .iter()
        .filter(|context| {
            assessments
                .iter()
                .any(|a| a.skill_id == skill.id && a.context == **context)
        })
        .count();
    #[allow(clippy::cast_precision_loss)]
    {
        assessed as f64 / skill.assessment_contexts.len() as f64
    }
}
