//! Policy configuration.
//!
//! Tunable constants for the progression and fair-access policies. Values
//! come from defaults, then an optional TOML file (explicit path,
//! `TURNLAB_CONFIG`, or `~/.config/turnlab/config.toml`), then env
//! overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::SkillLevel;
use crate::error::{Result, TlError};

/// Fraction of a level's skills that must be rated Confident or above
/// before the next level unlocks.
pub const DEFAULT_UNLOCK_THRESHOLD: f64 = 0.80;

/// Free skills granted per assessed level. Beginner is 0 because the whole
/// beginner tier is free anyway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreeSkillCounts {
    pub beginner: usize,
    pub novice: usize,
    pub intermediate: usize,
    pub expert: usize,
}

impl Default for FreeSkillCounts {
    fn default() -> Self {
        Self {
            beginner: 0,
            novice: 2,
            intermediate: 2,
            expert: 1,
        }
    }
}

impl FreeSkillCounts {
    /// The grant count for a level.
    #[must_use]
    pub fn for_level(self, level: SkillLevel) -> usize {
        match level {
            SkillLevel::Beginner => self.beginner,
            SkillLevel::Novice => self.novice,
            SkillLevel::Intermediate => self.intermediate,
            SkillLevel::Expert => self.expert,
        }
    }
}

/// Engine policy knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Progression threshold in `[0, 1]`.
    pub unlock_threshold: f64,
    /// Fair-access grant table.
    pub free_skills: FreeSkillCounts,
    /// Default number of suggestions to return.
    pub suggestion_limit: usize,
    /// Window for "recent assessment" statistics, in days.
    pub recent_window_days: u32,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            unlock_threshold: DEFAULT_UNLOCK_THRESHOLD,
            free_skills: FreeSkillCounts::default(),
            suggestion_limit: 3,
            recent_window_days: 30,
        }
    }
}

impl PolicyConfig {
    /// Load config: defaults, then the first TOML file found (explicit path,
    /// `TURNLAB_CONFIG`, global config dir), then env overrides.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("TURNLAB_CONFIG").ok().map(PathBuf::from))
            .or_else(Self::global_path)
            .filter(|p| p.exists())
            .map_or_else(|| Ok(Self::default()), |p| Self::from_file(&p))?;

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| TlError::Config(format!("{}: {e}", path.display())))
    }

    fn global_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("turnlab/config.toml"))
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(value) = std::env::var("TURNLAB_UNLOCK_THRESHOLD") {
            self.unlock_threshold = value.parse().map_err(|_| {
                TlError::Config(format!("invalid TURNLAB_UNLOCK_THRESHOLD: {value}"))
            })?;
        }
        if let Ok(value) = std::env::var("TURNLAB_SUGGESTION_LIMIT") {
            self.suggestion_limit = value.parse().map_err(|_| {
                TlError::Config(format!("invalid TURNLAB_SUGGESTION_LIMIT: {value}"))
            })?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.unlock_threshold) {
            return Err(TlError::Config(format!(
                "unlock_threshold must be in [0, 1], got {}",
                self.unlock_threshold
            )));
        }
        Ok(())
    }

    /// The grant count for a level.
    #[must_use]
    pub fn free_skill_count(&self, level: SkillLevel) -> usize {
        self.free_skills.for_level(level)
    }
}
