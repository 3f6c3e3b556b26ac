//! Assessment facts recorded by the user-facing flow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Rating, TerrainContext};

/// A single self-assessment: a skill rated in a terrain context at a point
/// in time. Immutable once recorded except for deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    /// Unique assessment ID.
    pub id: String,
    /// Skill this assessment rates.
    pub skill_id: String,
    /// Terrain context the skill was assessed in.
    pub context: TerrainContext,
    /// The self-assigned rating.
    pub rating: Rating,
    /// When the assessment was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Optional free-text notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl Assessment {
    /// Create a new assessment recorded now, with a fresh ID.
    #[must_use]
    pub fn new(
        skill_id: impl Into<String>,
        context: TerrainContext,
        rating: Rating,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            skill_id: skill_id.into(),
            context,
            rating,
            recorded_at: Utc::now(),
            notes,
        }
    }
}
