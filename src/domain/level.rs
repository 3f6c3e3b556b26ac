//! Difficulty tiers.

use serde::{Deserialize, Serialize};

/// Skill progression level. Each tier builds on the previous one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum SkillLevel {
    #[default]
    Beginner = 0,
    Novice = 1,
    Intermediate = 2,
    Expert = 3,
}

impl SkillLevel {
    /// All levels in ascending order.
    pub const ALL: [Self; 4] = [
        Self::Beginner,
        Self::Novice,
        Self::Intermediate,
        Self::Expert,
    ];

    /// The next level up, or `None` at `Expert`.
    ///
    /// The single definition of level adjacency; nothing else hardcodes
    /// level transitions.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Beginner => Some(Self::Novice),
            Self::Novice => Some(Self::Intermediate),
            Self::Intermediate => Some(Self::Expert),
            Self::Expert => None,
        }
    }

    /// Whether content at this level requires premium unlock.
    #[must_use]
    pub fn requires_premium(self) -> bool {
        self != Self::Beginner
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Novice => "Novice",
            Self::Intermediate => "Intermediate",
            Self::Expert => "Expert",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Beginner => "Learning the fundamentals of skiing",
            Self::Novice => "Building confidence on easy terrain",
            Self::Intermediate => "Developing parallel technique",
            Self::Expert => "Mastering advanced terrain and conditions",
        }
    }

    /// Numeric value used for storage.
    #[must_use]
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Level from its stored numeric value.
    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value)).copied()
    }
}
