//! In-memory assessment store for tests and dry runs.

use chrono::{Duration, Utc};

use super::AssessmentStore;
use crate::domain::{Assessment, Rating, TerrainContext};
use crate::error::{Result, TlError};

/// Vec-backed [`AssessmentStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    assessments: Vec<Assessment>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with existing history.
    #[must_use]
    pub fn with_assessments(assessments: Vec<Assessment>) -> Self {
        Self { assessments }
    }
}

impl AssessmentStore for MemoryStore {
    fn all(&self) -> Result<Vec<Assessment>> {
        Ok(self.assessments.clone())
    }

    fn recent(&self, days: u32) -> Result<Vec<Assessment>> {
        let cutoff = Utc::now() - Duration::days(i64::from(days));
        Ok(self
            .assessments
            .iter()
            .filter(|a| a.recorded_at >= cutoff)
            .cloned()
            .collect())
    }

    fn for_skill(&self, skill_id: &str) -> Result<Vec<Assessment>> {
        Ok(self
            .assessments
            .iter()
            .filter(|a| a.skill_id == skill_id)
            .cloned()
            .collect())
    }

    fn save(
        &mut self,
        skill_id: &str,
        context: TerrainContext,
        rating: Rating,
        notes: Option<String>,
    ) -> Result<Assessment> {
        let assessment = Assessment::new(skill_id, context, rating, notes);
        self.assessments.push(assessment.clone());
        Ok(assessment)
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        let before = self.assessments.len();
        self.assessments.retain(|a| a.id != id);
        if self.assessments.len() == before {
            return Err(TlError::AssessmentNotFound(id.to_string()));
        }
        Ok(())
    }
}
