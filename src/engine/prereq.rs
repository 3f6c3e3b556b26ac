//! Prerequisite gate.

use super::aggregate::{summary_rating, RatingSummary};
use crate::domain::{Rating, Skill};

/// Minimum rating a prerequisite must reach before its dependents open up.
pub const PREREQUISITE_MIN_RATING: Rating = Rating::Developing;

/// Whether every prerequisite of `skill` is rated Developing or better.
///
/// An empty prerequisite list is trivially satisfied. A prerequisite id
/// absent from the summary reads as `NotAssessed` and fails the check;
/// absence is not leniency. Ids that do not exist in the catalog resolve
/// the same way.
#[must_use]
pub fn prerequisites_met(skill: &Skill, summary: &RatingSummary) -> bool {
    skill
        .prerequisites
        .iter()
        .all(|id| summary_rating(summary, id) >= PREREQUISITE_MIN_RATING)
}
