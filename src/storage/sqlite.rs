//! SQLite-backed assessment and user-state store.

use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use rusqlite::{params, Connection, Row};
use tracing::debug;
use uuid::Uuid;

use super::migrations;
use super::{AssessmentStore, UserState};
use crate::domain::{Assessment, Rating, SkillLevel, TerrainContext};
use crate::error::{Result, TlError};

/// SQLite database wrapper for assessments and the user record.
pub struct SqliteStore {
    conn: Connection,
    schema_version: u32,
}

impl std::fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore")
            .field("schema_version", &self.schema_version)
            .finish_non_exhaustive()
    }
}

impl SqliteStore {
    /// Open (and migrate) the database at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// In-memory database, for tests.
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA foreign_keys = ON;",
        )?;
        let schema_version = migrations::run_migrations(&conn)?;
        debug!(schema_version, "opened assessment store");
        Ok(Self {
            conn,
            schema_version,
        })
    }

    /// Current schema version.
    #[must_use]
    pub fn schema_version(&self) -> u32 {
        self.schema_version
    }

    fn row_to_assessment(row: &Row<'_>) -> rusqlite::Result<Assessment> {
        let context_tag: String = row.get("context")?;
        let rating_value: u8 = row.get("rating")?;
        let recorded_at: String = row.get("recorded_at")?;

        let context = TerrainContext::from_tag(&context_tag).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                format!("unknown terrain context tag: {context_tag}").into(),
            )
        })?;
        let rating = Rating::from_value(rating_value).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Integer,
                format!("rating out of range: {rating_value}").into(),
            )
        })?;
        let recorded_at = DateTime::parse_from_rfc3339(&recorded_at)
            .map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(
                    0,
                    rusqlite::types::Type::Text,
                    e.to_string().into(),
                )
            })?
            .with_timezone(&Utc);

        Ok(Assessment {
            id: row.get("id")?,
            skill_id: row.get("skill_id")?,
            context,
            rating,
            recorded_at,
            notes: row.get("notes")?,
        })
    }

    fn query_assessments(&self, sql: &str, params: &[&dyn rusqlite::ToSql]) -> Result<Vec<Assessment>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, Self::row_to_assessment)?;
        let mut assessments = Vec::new();
        for row in rows {
            assessments.push(row?);
        }
        Ok(assessments)
    }

    /// Load the persisted user record, or the default when none exists yet.
    pub fn user_state(&self) -> Result<UserState> {
        let mut stmt = self.conn.prepare(
            "SELECT current_level, focus_skill_id, is_premium_unlocked, granted_free_skill_ids \
             FROM user_state WHERE id = 1;",
        )?;
        let mut rows = stmt.query([])?;
        let Some(row) = rows.next()? else {
            return Ok(UserState::default());
        };

        let level_value: u8 = row.get(0)?;
        let granted_json: String = row.get(3)?;
        let granted: HashSet<String> = serde_json::from_str(&granted_json)?;

        Ok(UserState {
            current_level: SkillLevel::from_value(level_value).ok_or_else(|| {
                TlError::Database(rusqlite::Error::IntegralValueOutOfRange(
                    0,
                    i64::from(level_value),
                ))
            })?,
            focus_skill_id: row.get(1)?,
            is_premium_unlocked: row.get(2)?,
            granted_free_skill_ids: granted,
        })
    }

    /// Persist the user record (single upserted row).
    pub fn save_user_state(&mut self, state: &UserState) -> Result<()> {
        let granted_json = serde_json::to_string(&state.granted_free_skill_ids)?;
        self.conn.execute(
            "INSERT INTO user_state (id, current_level, focus_skill_id, is_premium_unlocked, granted_free_skill_ids) \
             VALUES (1, ?1, ?2, ?3, ?4) \
             ON CONFLICT(id) DO UPDATE SET \
                 current_level = excluded.current_level, \
                 focus_skill_id = excluded.focus_skill_id, \
                 is_premium_unlocked = excluded.is_premium_unlocked, \
                 granted_free_skill_ids = excluded.granted_free_skill_ids;",
            params![
                state.current_level.value(),
                state.focus_skill_id,
                state.is_premium_unlocked,
                granted_json,
            ],
        )?;
        debug!(level = state.current_level.display_name(), "saved user state");
        Ok(())
    }
}

impl AssessmentStore for SqliteStore {
    fn all(&self) -> Result<Vec<Assessment>> {
        self.query_assessments(
            "SELECT id, skill_id, context, rating, recorded_at, notes \
             FROM assessments ORDER BY recorded_at, id;",
            &[],
        )
    }

    fn recent(&self, days: u32) -> Result<Vec<Assessment>> {
        let cutoff = (Utc::now() - Duration::days(i64::from(days))).to_rfc3339();
        self.query_assessments(
            "SELECT id, skill_id, context, rating, recorded_at, notes \
             FROM assessments WHERE recorded_at >= ?1 ORDER BY recorded_at, id;",
            &[&cutoff],
        )
    }

    fn for_skill(&self, skill_id: &str) -> Result<Vec<Assessment>> {
        self.query_assessments(
            "SELECT id, skill_id, context, rating, recorded_at, notes \
             FROM assessments WHERE skill_id = ?1 ORDER BY recorded_at, id;",
            &[&skill_id],
        )
    }

    fn save(
        &mut self,
        skill_id: &str,
        context: TerrainContext,
        rating: Rating,
        notes: Option<String>,
    ) -> Result<Assessment> {
        let assessment = Assessment {
            id: Uuid::new_v4().to_string(),
            skill_id: skill_id.to_string(),
            context,
            rating,
            recorded_at: Utc::now(),
            notes,
        };
        self.conn.execute(
            "INSERT INTO assessments (id, skill_id, context, rating, recorded_at, notes) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                assessment.id,
                assessment.skill_id,
                assessment.context.tag(),
                assessment.rating.value(),
                assessment.recorded_at.to_rfc3339(),
                assessment.notes,
            ],
        )?;
        debug!(
            skill = assessment.skill_id,
            context = assessment.context.tag(),
            rating = assessment.rating.display_name(),
            "saved assessment"
        );
        Ok(assessment)
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        let deleted = self
            .conn
            .execute("DELETE FROM assessments WHERE id = ?1;", params![id])?;
        if deleted == 0 {
            return Err(TlError::AssessmentNotFound(id.to_string()));
        }
        Ok(())
    }
}
