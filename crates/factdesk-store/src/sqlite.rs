//! SQLite-backed store

use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use factdesk_domain::{
    Claim, ClaimId, LogId, Source, SourceId, Story, StoryId, StoryStore, VerificationLog,
    Workspace,
};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, warn};

use crate::StoreError;

/// SQLite-based implementation of StoryStore
///
/// Each save replaces the stored workspace inside one transaction, so a
/// reader never sees half of a save.
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own SqliteStore instance.
pub struct SqliteStore {
    conn: Connection,
}

struct StoryRow {
    id: Vec<u8>,
    title: String,
    summary: String,
    deadline: NaiveDate,
    sensitivity: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

struct ClaimRow {
    id: Vec<u8>,
    story_id: Vec<u8>,
    text: String,
    claim_type: String,
    priority: String,
    source: String,
    notes: String,
    status: String,
}

struct LogRow {
    id: Vec<u8>,
    method: String,
    sources_found: String,
    finding: String,
    verdict: String,
    confidence: String,
    recorded_at: DateTime<Utc>,
}

struct SourceRow {
    id: Vec<u8>,
    story_id: Vec<u8>,
    name: String,
    source_type: String,
    stake: String,
    corroborated: String,
    assessment: String,
    assessment_overridden: bool,
    is_confidential: bool,
    notes: String,
}

/// Convert an id value to bytes for storage
fn id_bytes(value: u128) -> Vec<u8> {
    value.to_be_bytes().to_vec()
}

/// Convert stored bytes back to an id value
fn id_value(bytes: &[u8]) -> Result<u128, StoreError> {
    let arr: [u8; 16] = bytes.try_into().map_err(|_| {
        StoreError::InvalidData(format!("Expected 16 bytes for an id, got {}", bytes.len()))
    })?;
    Ok(u128::from_be_bytes(arr))
}

impl SqliteStore {
    /// Create a new SqliteStore with the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use factdesk_store::SqliteStore;
    ///
    /// let store = SqliteStore::new("factdesk.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Create a store in a private in-memory database
    pub fn in_memory() -> Result<Self, StoreError> {
        Self::new(":memory:")
    }

    /// Initialize the database schema
    fn initialize_schema(&mut self) -> Result<(), StoreError> {
        self.conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        self.conn.execute_batch(include_str!("schema.sql"))?;
        Ok(())
    }

    fn load_story(&self) -> Result<Option<Story>, StoreError> {
        let row = self
            .conn
            .query_row(
                "SELECT id, title, summary, deadline, sensitivity, created_at, updated_at
                 FROM story WHERE singleton = 1",
                [],
                |row| {
                    Ok(StoryRow {
                        id: row.get(0)?,
                        title: row.get(1)?,
                        summary: row.get(2)?,
                        deadline: row.get(3)?,
                        sensitivity: row.get(4)?,
                        created_at: row.get(5)?,
                        updated_at: row.get(6)?,
                    })
                },
            )
            .optional()?;

        row.map(|row| -> Result<Story, StoreError> {
            Ok(Story {
                id: StoryId::from_value(id_value(&row.id)?),
                title: row.title,
                summary: row.summary,
                deadline: row.deadline,
                sensitivity: row.sensitivity.parse()?,
                created_at: row.created_at,
                updated_at: row.updated_at,
            })
        })
        .transpose()
    }

    fn load_claims(&self) -> Result<Vec<Claim>, StoreError> {
        let mut claim_stmt = self.conn.prepare(
            "SELECT id, story_id, text, claim_type, priority, source, notes, status
             FROM claims ORDER BY position",
        )?;
        let rows = claim_stmt
            .query_map([], |row| {
                Ok(ClaimRow {
                    id: row.get(0)?,
                    story_id: row.get(1)?,
                    text: row.get(2)?,
                    claim_type: row.get(3)?,
                    priority: row.get(4)?,
                    source: row.get(5)?,
                    notes: row.get(6)?,
                    status: row.get(7)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut log_stmt = self.conn.prepare(
            "SELECT id, method, sources_found, finding, verdict, confidence, recorded_at
             FROM verification_logs WHERE claim_id = ?1 ORDER BY position",
        )?;

        let mut claims = Vec::with_capacity(rows.len());
        for row in rows {
            let id = ClaimId::from_value(id_value(&row.id)?);
            let mut claim = Claim::new(
                id,
                StoryId::from_value(id_value(&row.story_id)?),
                row.text,
                row.claim_type.parse()?,
                row.priority.parse()?,
                row.source,
            )
            .with_notes(row.notes);
            claim.set_status(row.status.parse()?);

            let logs = log_stmt
                .query_map(params![&row.id], |log| {
                    Ok(LogRow {
                        id: log.get(0)?,
                        method: log.get(1)?,
                        sources_found: log.get(2)?,
                        finding: log.get(3)?,
                        verdict: log.get(4)?,
                        confidence: log.get(5)?,
                        recorded_at: log.get(6)?,
                    })
                })?
                .collect::<Result<Vec<_>, _>>()?;
            for log in logs {
                claim.append_log(VerificationLog {
                    id: LogId::from_value(id_value(&log.id)?),
                    claim_id: id,
                    method: log.method,
                    sources_found: serde_json::from_str(&log.sources_found)?,
                    finding: log.finding,
                    verdict: log.verdict.parse()?,
                    confidence: log.confidence.parse()?,
                    timestamp: log.recorded_at,
                })?;
            }
            claims.push(claim);
        }
        Ok(claims)
    }

    fn load_sources(&self) -> Result<Vec<Source>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, story_id, name, source_type, stake, corroborated, assessment,
                    assessment_overridden, is_confidential, notes
             FROM sources ORDER BY position",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(SourceRow {
                    id: row.get(0)?,
                    story_id: row.get(1)?,
                    name: row.get(2)?,
                    source_type: row.get(3)?,
                    stake: row.get(4)?,
                    corroborated: row.get(5)?,
                    assessment: row.get(6)?,
                    assessment_overridden: row.get(7)?,
                    is_confidential: row.get(8)?,
                    notes: row.get(9)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|row| -> Result<Source, StoreError> {
                let mut source = Source::new(
                    SourceId::from_value(id_value(&row.id)?),
                    StoryId::from_value(id_value(&row.story_id)?),
                    row.name,
                    row.source_type.parse()?,
                    row.stake.parse()?,
                    row.corroborated.parse()?,
                )
                .with_confidential(row.is_confidential)
                .with_notes(row.notes);
                if row.assessment_overridden {
                    source.override_assessment(row.assessment.parse()?);
                }
                Ok(source)
            })
            .collect()
    }
}

impl StoryStore for SqliteStore {
    type Error = StoreError;

    fn load(&self) -> Result<Workspace, Self::Error> {
        let mut workspace = Workspace::new();
        let Some(story) = self.load_story()? else {
            let orphans: i64 = self
                .conn
                .query_row("SELECT COUNT(*) FROM claims", [], |row| row.get(0))?;
            if orphans > 0 {
                warn!(orphans, "Claims stored without a story were ignored");
            }
            return Ok(workspace);
        };

        workspace.set_story(story);
        for claim in self.load_claims()? {
            workspace.add_claim(claim)?;
        }
        for source in self.load_sources()? {
            workspace.add_source(source)?;
        }
        debug!(
            claims = workspace.claims().len(),
            sources = workspace.sources().len(),
            "Loaded workspace"
        );
        Ok(workspace)
    }

    fn save(&mut self, workspace: &Workspace) -> Result<(), Self::Error> {
        let tx = self.conn.transaction()?;
        tx.execute_batch(
            "DELETE FROM verification_logs;
             DELETE FROM claims;
             DELETE FROM sources;
             DELETE FROM story;",
        )?;

        if let Some(story) = workspace.story() {
            tx.execute(
                "INSERT INTO story (singleton, id, title, summary, deadline, sensitivity, created_at, updated_at)
                 VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    id_bytes(story.id.value()),
                    &story.title,
                    &story.summary,
                    story.deadline,
                    story.sensitivity.as_str(),
                    story.created_at,
                    story.updated_at,
                ],
            )?;
        }

        {
            let mut insert_claim = tx.prepare(
                "INSERT INTO claims (position, id, story_id, text, claim_type, priority, source, notes, status)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )?;
            let mut insert_log = tx.prepare(
                "INSERT INTO verification_logs (claim_id, position, id, method, sources_found, finding, verdict, confidence, recorded_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )?;
            for (position, claim) in workspace.claims().iter().enumerate() {
                let claim_id = id_bytes(claim.id.value());
                insert_claim.execute(params![
                    position as i64,
                    &claim_id,
                    id_bytes(claim.story_id.value()),
                    &claim.text,
                    claim.claim_type.as_str(),
                    claim.priority.as_str(),
                    &claim.source,
                    &claim.notes,
                    claim.status().as_str(),
                ])?;
                for (log_position, log) in claim.verification_logs().iter().enumerate() {
                    insert_log.execute(params![
                        &claim_id,
                        log_position as i64,
                        id_bytes(log.id.value()),
                        &log.method,
                        serde_json::to_string(&log.sources_found)?,
                        &log.finding,
                        log.verdict.as_str(),
                        log.confidence.as_str(),
                        log.timestamp,
                    ])?;
                }
            }

            let mut insert_source = tx.prepare(
                "INSERT INTO sources (position, id, story_id, name, source_type, stake, corroborated,
                                      assessment, assessment_overridden, is_confidential, notes)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            )?;
            for (position, source) in workspace.sources().iter().enumerate() {
                insert_source.execute(params![
                    position as i64,
                    id_bytes(source.id.value()),
                    id_bytes(source.story_id.value()),
                    &source.name,
                    source.source_type().as_str(),
                    source.stake().as_str(),
                    source.corroborated().as_str(),
                    source.assessment().as_str(),
                    source.is_assessment_overridden(),
                    source.is_confidential,
                    &source.notes,
                ])?;
            }
        }

        tx.commit()?;
        debug!(
            claims = workspace.claims().len(),
            sources = workspace.sources().len(),
            "Saved workspace"
        );
        Ok(())
    }
}
