//! Storage adapters.
//!
//! The engine only ever reads assessment history; these adapters own the
//! writes. [`SqliteStore`] is the persistent implementation, [`MemoryStore`]
//! backs tests and dry runs.

pub mod memory;
pub mod migrations;
pub mod sqlite;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::{Assessment, Rating, SkillLevel, TerrainContext};
use crate::error::Result;

/// Read/write contract for assessment history.
pub trait AssessmentStore {
    /// Every assessment ever recorded.
    fn all(&self) -> Result<Vec<Assessment>>;

    /// Assessments recorded within the last `days` days.
    fn recent(&self, days: u32) -> Result<Vec<Assessment>>;

    /// Assessments for one skill.
    fn for_skill(&self, skill_id: &str) -> Result<Vec<Assessment>>;

    /// Record a new assessment and return it.
    fn save(
        &mut self,
        skill_id: &str,
        context: TerrainContext,
        rating: Rating,
        notes: Option<String>,
    ) -> Result<Assessment>;

    /// Delete an assessment by ID.
    fn delete(&mut self, id: &str) -> Result<()>;
}

/// Persisted user record.
///
/// `granted_free_skill_ids` is written once when the assessed level is
/// established or changed, so a catalog reshuffle between releases cannot
/// silently revoke a grant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserState {
    pub current_level: SkillLevel,
    pub focus_skill_id: Option<String>,
    pub is_premium_unlocked: bool,
    pub granted_free_skill_ids: HashSet<String>,
}
