//! Skill catalog.
//!
//! The content collaborator: skill definitions arrive as an opaque
//! in-memory catalog loaded from JSON. The catalog preserves declaration
//! order everywhere, because the fair-access grant depends on which skills
//! come first.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::domain::{Skill, SkillDomain, SkillLevel};
use crate::error::{Result, TlError};

/// Read contract the engine consumes for content.
///
/// Implementations must return skills in a stable, deterministic
/// declaration order.
pub trait CatalogProvider {
    /// All skills, in declaration order.
    fn all_skills(&self) -> &[Skill];

    /// Skills at a level, in declaration order.
    fn skills_by_level(&self, level: SkillLevel) -> Vec<&Skill>;

    /// A skill by ID.
    fn skill(&self, id: &str) -> Option<&Skill>;

    /// Resolved prerequisite skills for a skill ID. Prerequisite ids
    /// missing from the catalog are skipped.
    fn prerequisite_skills(&self, id: &str) -> Vec<&Skill>;
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    skills: Vec<Skill>,
}

/// In-memory catalog backed by a declaration-ordered skill list.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    skills: Vec<Skill>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from skills in declaration order.
    ///
    /// Rejects duplicate skill IDs; anything beyond that (dangling
    /// prerequisite ids and the like) is the content author's problem, not
    /// validated here.
    pub fn new(skills: Vec<Skill>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(skills.len());
        for (index, skill) in skills.iter().enumerate() {
            if by_id.insert(skill.id.clone(), index).is_some() {
                return Err(TlError::InvalidCatalog(format!(
                    "duplicate skill id: {}",
                    skill.id
                )));
            }
        }
        Ok(Self { skills, by_id })
    }

    /// Parse a catalog from JSON bytes (`{"skills": [...]}`).
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let file: CatalogFile = serde_json::from_slice(bytes)?;
        Self::new(file.skills)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let catalog = Self::from_json_slice(&bytes)?;
        debug!(path = %path.display(), skills = catalog.skills.len(), "loaded catalog");
        Ok(catalog)
    }

    /// Number of skills in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Skills tagged with a domain, in declaration order.
    #[must_use]
    pub fn skills_by_domain(&self, domain: SkillDomain) -> Vec<&Skill> {
        self.skills
            .iter()
            .filter(|s| s.domains.contains(&domain))
            .collect()
    }

    /// Case-insensitive name/summary search, in declaration order.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Skill> {
        let needle = query.to_lowercase();
        self.skills
            .iter()
            .filter(|s| {
                s.name.to_lowercase().contains(&needle)
                    || s.summary.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

impl CatalogProvider for Catalog {
    fn all_skills(&self) -> &[Skill] {
        &self.skills
    }

    fn skills_by_level(&self, level: SkillLevel) -> Vec<&Skill> {
        self.skills.iter().filter(|s| s.level == level).collect()
    }

    fn skill(&self, id: &str) -> Option<&Skill> {
        self.by_id.get(id).map(|&index| &self.skills[index])
    }

    fn prerequisite_skills(&self, id: &str) -> Vec<&Skill> {
        self.skill(id)
            .map(|s| {
                s.prerequisites
                    .iter()
                    .filter_map(|prereq_id| self.skill(prereq_id))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Clone a level slice out of a provider, preserving order.
///
/// Convenience for engine functions that take `&[Skill]`.
#[must_use]
pub fn level_slice(provider: &impl CatalogProvider, level: SkillLevel) -> Vec<Skill> {
    provider
        .skills_by_level(level)
        .into_iter()
        .cloned()
        .collect()
}
