//! Self-assessment proficiency ratings.

use serde::{Deserialize, Serialize};

/// Self-assessment rating for skill proficiency.
///
/// Totally ordered by integer value; `NotAssessed` is the defined default
/// for any skill without assessment history.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Rating {
    #[default]
    NotAssessed = 0,
    NeedsWork = 1,
    Developing = 2,
    Confident = 3,
    Mastered = 4,
}

impl Rating {
    /// All ratings in ascending order.
    pub const ALL: [Self; 5] = [
        Self::NotAssessed,
        Self::NeedsWork,
        Self::Developing,
        Self::Confident,
        Self::Mastered,
    ];

    /// Whether this rating counts toward level progression.
    #[must_use]
    pub fn counts_toward_progression(self) -> bool {
        self >= Self::Confident
    }

    /// Progress value in `[0, 1]` for visual indicators.
    ///
    /// Display and weighting only; progression-threshold math operates on
    /// discrete counts, never on this value.
    #[must_use]
    pub fn progress_value(self) -> f64 {
        match self {
            Self::NotAssessed => 0.0,
            Self::NeedsWork => 0.25,
            Self::Developing => 0.5,
            Self::Confident => 0.75,
            Self::Mastered => 1.0,
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::NotAssessed => "Not Assessed",
            Self::NeedsWork => "Needs Work",
            Self::Developing => "Developing",
            Self::Confident => "Confident",
            Self::Mastered => "Mastered",
        }
    }

    /// Short label for dense tables; `NotAssessed` renders as a dash.
    #[must_use]
    pub fn short_name(self) -> &'static str {
        match self {
            Self::NotAssessed => "-",
            other => other.display_name(),
        }
    }

    /// Numeric value used for storage.
    #[must_use]
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Rating from its stored numeric value.
    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value)).copied()
    }
}
