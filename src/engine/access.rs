//! Fair-access policy.
//!
//! Beginner content is always free. When a user assesses in at a higher
//! level, the first N catalog-order skills at that level are granted free
//! (N from the policy table). The grant is computed once when the assessed
//! level is established and persisted by the caller, so later catalog
//! changes cannot silently revoke a granted skill.

use std::collections::HashSet;

use crate::config::PolicyConfig;
use crate::domain::{Skill, SkillLevel};

/// IDs of the skills granted free for `assessed_level`.
///
/// Empty for Beginner (that whole tier is unconditionally free). Otherwise
/// the first N skills at the level, in catalog declaration order; a catalog
/// with fewer than N grants all of them.
#[must_use]
pub fn granted_free_skill_ids(
    assessed_level: SkillLevel,
    skills_at_level: &[Skill],
    policy: &PolicyConfig,
) -> HashSet<String> {
    if assessed_level == SkillLevel::Beginner {
        return HashSet::new();
    }
    let count = policy.free_skill_count(assessed_level);
    skills_at_level
        .iter()
        .take(count)
        .map(|s| s.id.clone())
        .collect()
}

/// Whether the user can open this skill right now.
///
/// Cheap pure check, evaluated fresh on every access.
#[must_use]
pub fn can_access(skill: &Skill, is_premium_unlocked: bool, granted: &HashSet<String>) -> bool {
    is_premium_unlocked || skill.level == SkillLevel::Beginner || granted.contains(&skill.id)
}
