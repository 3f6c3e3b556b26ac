//! Skill definitions sourced from the content catalog.

use serde::{Deserialize, Serialize};

use super::{Rating, SkillLevel, TerrainContext};

/// Cross-cutting skill domains (PSIA-style). A skill can belong to more
/// than one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillDomain {
    Balance,
    EdgeControl,
    Rotary,
    Pressure,
    Terrain,
}

impl SkillDomain {
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Balance => "Balance & Stance",
            Self::EdgeControl => "Edge Control",
            Self::Rotary => "Rotary Movements",
            Self::Pressure => "Pressure Management",
            Self::Terrain => "Terrain Adaptation",
        }
    }

    #[must_use]
    pub fn short_name(self) -> &'static str {
        match self {
            Self::Balance => "Balance",
            Self::EdgeControl => "Edges",
            Self::Rotary => "Rotary",
            Self::Pressure => "Pressure",
            Self::Terrain => "Terrain",
        }
    }
}

/// Outcome milestone descriptions for each assessable rating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeMilestones {
    pub needs_work: String,
    pub developing: String,
    pub confident: String,
    pub mastered: String,
}

impl OutcomeMilestones {
    /// Milestone text for a rating.
    #[must_use]
    pub fn description_for(&self, rating: Rating) -> &str {
        match rating {
            Rating::NotAssessed => "Not yet assessed",
            Rating::NeedsWork => &self.needs_work,
            Rating::Developing => &self.developing,
            Rating::Confident => &self.confident,
            Rating::Mastered => &self.mastered,
        }
    }
}

/// A ski skill with its metadata.
///
/// Immutable value object sourced from the catalog; identity is the stable
/// string `id`. Prerequisites reference ids in the same catalog (a
/// precondition of the content collaborator, not enforced here).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    /// Unique, immutable skill ID.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Difficulty tier this skill belongs to.
    pub level: SkillLevel,
    /// Domains this skill exercises.
    #[serde(default)]
    pub domains: Vec<SkillDomain>,
    /// Skill IDs that should be rated Developing or better first.
    #[serde(default)]
    pub prerequisites: Vec<String>,
    /// Free-text summary.
    #[serde(default)]
    pub summary: String,
    /// Per-rating outcome descriptions.
    #[serde(default)]
    pub milestones: OutcomeMilestones,
    /// Terrain contexts this skill can be assessed in.
    #[serde(default)]
    pub assessment_contexts: Vec<TerrainContext>,
}

impl Skill {
    /// Primary domain for display purposes.
    #[must_use]
    pub fn primary_domain(&self) -> SkillDomain {
        self.domains.first().copied().unwrap_or(SkillDomain::Balance)
    }

    /// Whether this skill is available without premium.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.level == SkillLevel::Beginner
    }
}

impl PartialEq for Skill {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Skill {}

impl std::hash::Hash for Skill {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
