//! Terrain contexts for contextual skill assessments.

use serde::{Deserialize, Serialize};

/// Terrain condition a skill was practiced or assessed under.
///
/// A pure dimension of where a rating was recorded; contexts carry no
/// ordering semantics. Each context has an explicit string tag used for
/// serialization and storage keys, so declaration order is never
/// load-bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerrainContext {
    GroomedGreen,
    GroomedBlue,
    GroomedBlack,
    Bumps,
    Powder,
    Steeps,
    Ice,
    Crud,
}

impl TerrainContext {
    /// All contexts, in declaration order. Used only for iteration and
    /// stable presentation, never as a storage key.
    pub const ALL: [Self; 8] = [
        Self::GroomedGreen,
        Self::GroomedBlue,
        Self::GroomedBlack,
        Self::Bumps,
        Self::Powder,
        Self::Steeps,
        Self::Ice,
        Self::Crud,
    ];

    /// Stable string tag used as the storage key.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::GroomedGreen => "groomed_green",
            Self::GroomedBlue => "groomed_blue",
            Self::GroomedBlack => "groomed_black",
            Self::Bumps => "bumps",
            Self::Powder => "powder",
            Self::Steeps => "steeps",
            Self::Ice => "ice",
            Self::Crud => "crud",
        }
    }

    /// Context from its stored tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.tag() == tag)
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::GroomedGreen => "Groomed Green",
            Self::GroomedBlue => "Groomed Blue",
            Self::GroomedBlack => "Groomed Black",
            Self::Bumps => "Bumps/Moguls",
            Self::Powder => "Powder",
            Self::Steeps => "Steeps (>25\u{b0})",
            Self::Ice => "Icy Conditions",
            Self::Crud => "Variable/Crud",
        }
    }

    #[must_use]
    pub fn short_name(self) -> &'static str {
        match self {
            Self::GroomedGreen => "Green",
            Self::GroomedBlue => "Blue",
            Self::GroomedBlack => "Black",
            Self::Bumps => "Bumps",
            Self::Powder => "Powder",
            Self::Steeps => "Steeps",
            Self::Ice => "Ice",
            Self::Crud => "Crud",
        }
    }

    /// Relative difficulty weight of this terrain.
    #[must_use]
    pub fn difficulty_weight(self) -> f64 {
        match self {
            Self::GroomedGreen => 1.0,
            Self::GroomedBlue => 1.5,
            Self::GroomedBlack | Self::Ice | Self::Crud => 2.0,
            Self::Bumps | Self::Powder => 2.5,
            Self::Steeps => 3.0,
        }
    }
}
