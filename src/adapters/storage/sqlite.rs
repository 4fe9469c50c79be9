/// SQLite storage adapter
///
/// Implements ItemStorePort for the processed-item record.
use crate::domain::models::{
    AgendaItem, BatchSummary, ProcessedRecord, StoredSummary, SummaryOutcome,
};
use crate::error::{AppError, Result};
use crate::ports::storage::ItemStorePort;
use async_trait::async_trait;
use rusqlite::types::Type;
use rusqlite::{params, Connection, Row};
use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

/// SQLite storage implementation
pub struct SqliteStorage {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStorage {
    /// Create a new SQLite storage with the given database path
    pub fn new(db_path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        Self::from_connection(conn)
    }

    /// In-memory database, used by tests and dry runs
    pub fn in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        // Enable foreign keys
        conn.execute("PRAGMA foreign_keys = ON", [])?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open the store and bring its schema up to date
    ///
    /// Any failure here is reported as `AppError::StoreInit`.
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self> {
        let path = db_path.as_ref();
        let storage = Self::new(path)
            .map_err(|e| AppError::StoreInit(format!("{}: {}", path.display(), e)))?;
        storage
            .run_migrations()
            .map_err(|e| AppError::StoreInit(format!("{}: {}", path.display(), e)))?;
        log::info!("Item store ready at {}", path.display());
        Ok(storage)
    }

    /// Run database migrations
    pub fn run_migrations(&self) -> Result<()> {
        use rusqlite_migration::{Migrations, M};

        let migrations = Migrations::new(vec![M::up(include_str!(
            "../../../migrations/001_initial.sql"
        ))]);

        let mut conn = self.conn()?;
        migrations.to_latest(&mut conn)?;

        Ok(())
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| AppError::Other("item store connection lock poisoned".to_string()))
    }
}

fn parse_outcome(row: &Row<'_>, idx: usize) -> rusqlite::Result<SummaryOutcome> {
    let raw: String = row.get(idx)?;
    raw.parse()
        .map_err(|e: String| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, e.into()))
}

#[async_trait]
impl ItemStorePort for SqliteStorage {
    async fn is_processed(&self, id: &str) -> Result<bool> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare_cached("SELECT 1 FROM agenda_items WHERE id = ?1")?;
        Ok(stmt.exists(params![id])?)
    }

    async fn commit_batch(&self, batch: &[AgendaItem], summary: &BatchSummary) -> Result<usize> {
        let mut conn = self.conn()?;
        let now = chrono::Utc::now().timestamp();

        let tx = conn.transaction()?;
        // item_count is set below, once the newly recorded ids are counted.
        tx.execute(
            "INSERT INTO batch_summaries (summary, outcome, item_count, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                summary.text,
                summary.outcome.to_string(),
                0i64,
                now
            ],
        )?;
        let batch_id = tx.last_insert_rowid();

        let mut inserted = 0;
        {
            let mut stmt = tx.prepare(
                "INSERT OR IGNORE INTO agenda_items (id, title, meeting_id, summary_outcome, batch_id, processed_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;

            for item in batch {
                inserted += stmt.execute(params![
                    item.id,
                    item.title,
                    item.meeting_id,
                    summary.outcome.to_string(),
                    batch_id,
                    now,
                ])?;
            }
        }

        if inserted == 0 {
            // Every id was already recorded; leave the store as it was.
            tx.rollback()?;
            return Ok(0);
        }

        tx.execute(
            "UPDATE batch_summaries SET item_count = ?1 WHERE id = ?2",
            params![inserted as i64, batch_id],
        )?;

        tx.commit()?;
        Ok(inserted)
    }

    async fn processed_ids(&self) -> Result<HashSet<String>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT id FROM agenda_items")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut ids = HashSet::new();
        for id in rows {
            ids.insert(id?);
        }
        Ok(ids)
    }

    async fn list_processed(&self, outcome: Option<SummaryOutcome>) -> Result<Vec<ProcessedRecord>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, title, meeting_id, summary_outcome, batch_id, processed_at
             FROM agenda_items
             WHERE ?1 IS NULL OR summary_outcome = ?1
             ORDER BY processed_at, rowid",
        )?;

        let rows = stmt.query_map(params![outcome.map(|o| o.to_string())], |row| {
            Ok(ProcessedRecord {
                id: row.get(0)?,
                title: row.get(1)?,
                meeting_id: row.get(2)?,
                outcome: parse_outcome(row, 3)?,
                batch_id: row.get(4)?,
                processed_at: row.get(5)?,
            })
        })?;

        let mut records = Vec::new();
        for record_result in rows {
            records.push(record_result?);
        }

        Ok(records)
    }

    async fn list_summaries(&self, limit: Option<u32>) -> Result<Vec<StoredSummary>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, summary, outcome, item_count, created_at
             FROM batch_summaries ORDER BY id DESC LIMIT ?1",
        )?;

        let rows = stmt.query_map(params![limit.map(i64::from).unwrap_or(-1)], |row| {
            Ok(StoredSummary {
                id: Some(row.get(0)?),
                summary: row.get(1)?,
                outcome: parse_outcome(row, 2)?,
                item_count: row.get(3)?,
                created_at: row.get(4)?,
            })
        })?;

        let mut summaries = Vec::new();
        for summary_result in rows {
            summaries.push(summary_result?);
        }

        Ok(summaries)
    }
}
