use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use helixvault_codec::RedundancyLevel;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::errors::StoreError;
use crate::record::{lookup_prefix, EncodingRecord};
use crate::store::RecordStore;

const SELECT_COLUMNS: &str = "SELECT id, sequence, original_name, original_len, mime_type, level,
        checksum, compression_ratio, encoding_ms, timestamp FROM records";

/// Record log in a SQLite database. Insertion order is the row id.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
    db_path: String,
}

/// Raw column values, converted to a record outside the rusqlite closure.
struct RecordRow {
    id: String,
    sequence: String,
    original_name: String,
    original_len: i64,
    mime_type: String,
    level: u8,
    checksum: String,
    compression_ratio: f64,
    encoding_ms: i64,
    timestamp: String,
}

impl RecordRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            sequence: row.get(1)?,
            original_name: row.get(2)?,
            original_len: row.get(3)?,
            mime_type: row.get(4)?,
            level: row.get(5)?,
            checksum: row.get(6)?,
            compression_ratio: row.get(7)?,
            encoding_ms: row.get(8)?,
            timestamp: row.get(9)?,
        })
    }
}

impl TryFrom<RecordRow> for EncodingRecord {
    type Error = StoreError;

    fn try_from(row: RecordRow) -> Result<Self, Self::Error> {
        let level = RedundancyLevel::new(row.level)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        let timestamp = DateTime::parse_from_rfc3339(&row.timestamp)
            .map_err(|e| StoreError::Serialization(format!("bad timestamp {}: {e}", row.timestamp)))?
            .with_timezone(&Utc);
        Ok(Self {
            id: row.id,
            sequence: row.sequence,
            original_name: row.original_name,
            original_len: row.original_len as u64,
            mime_type: row.mime_type,
            level,
            checksum: row.checksum,
            compression_ratio: row.compression_ratio,
            encoding_ms: row.encoding_ms as u64,
            timestamp,
        })
    }
}

impl SqliteStore {
    /// Open (or create) a record database at the specified path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path_str = path.as_ref().to_string_lossy().to_string();
        let conn =
            Connection::open(&path_str).map_err(|e| StoreError::Connection(e.to_string()))?;
        Self::with_connection(conn, path_str)
    }

    /// Database that lives only as long as the store.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn =
            Connection::open_in_memory().map_err(|e| StoreError::Connection(e.to_string()))?;
        Self::with_connection(conn, ":memory:".to_string())
    }

    fn with_connection(conn: Connection, db_path: String) -> Result<Self, StoreError> {
        conn.execute_batch(
            "PRAGMA synchronous = NORMAL;
             PRAGMA temp_store = MEMORY;",
        )
        .map_err(|e| StoreError::Initialization(e.to_string()))?;

        let store = Self { conn, db_path };
        store.initialize_schema()?;
        Ok(store)
    }

    fn initialize_schema(&self) -> Result<(), StoreError> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS records (
                    row_id INTEGER PRIMARY KEY AUTOINCREMENT,
                    id TEXT NOT NULL,
                    sequence TEXT NOT NULL,
                    original_name TEXT NOT NULL,
                    original_len INTEGER NOT NULL,
                    mime_type TEXT NOT NULL,
                    level INTEGER NOT NULL,
                    checksum TEXT NOT NULL,
                    compression_ratio REAL NOT NULL,
                    encoding_ms INTEGER NOT NULL,
                    timestamp TEXT NOT NULL -- RFC 3339, UTC, full precision
                );

                CREATE INDEX IF NOT EXISTS idx_records_id ON records(id);",
            )
            .map_err(|e| StoreError::Initialization(e.to_string()))
    }

    /// Get database path.
    pub fn path(&self) -> &str {
        &self.db_path
    }

    pub fn close(self) -> Result<(), StoreError> {
        self.conn
            .close()
            .map_err(|(_conn, e)| StoreError::Connection(e.to_string()))
    }

    fn query_records(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<EncodingRecord>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(sql)
            .map_err(|e| StoreError::Query(e.to_string()))?;
        let rows = stmt
            .query_map(params, RecordRow::from_row)
            .map_err(|e| StoreError::Query(e.to_string()))?;

        let mut records = Vec::new();
        for row in rows {
            let row = row.map_err(|e| StoreError::Query(e.to_string()))?;
            records.push(EncodingRecord::try_from(row)?);
        }
        Ok(records)
    }

    fn query_one(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Option<EncodingRecord>, StoreError> {
        let row = self
            .conn
            .query_row(sql, params, RecordRow::from_row)
            .optional()
            .map_err(|e| StoreError::Query(e.to_string()))?;
        row.map(EncodingRecord::try_from).transpose()
    }
}

impl RecordStore for SqliteStore {
    fn append(&mut self, record: EncodingRecord) -> Result<(), StoreError> {
        self.conn
            .execute(
                "INSERT INTO records (id, sequence, original_name, original_len, mime_type,
                    level, checksum, compression_ratio, encoding_ms, timestamp)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                params![
                    record.id,
                    record.sequence,
                    record.original_name,
                    record.original_len as i64,
                    record.mime_type,
                    record.level.get(),
                    record.checksum,
                    record.compression_ratio,
                    record.encoding_ms as i64,
                    record.timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true),
                ],
            )
            .map_err(|e| StoreError::Insert(e.to_string()))?;
        Ok(())
    }

    fn records(&self) -> Result<Vec<EncodingRecord>, StoreError> {
        self.query_records(&format!("{SELECT_COLUMNS} ORDER BY row_id"), [])
    }

    fn find_by_sequence_or_prefix(
        &self,
        sequence: &str,
    ) -> Result<Option<EncodingRecord>, StoreError> {
        // substr/length count characters, matching the in-memory prefix rule.
        self.query_one(
            &format!(
                "{SELECT_COLUMNS}
                 WHERE sequence = ?1 OR substr(sequence, 1, length(?2)) = ?2
                 ORDER BY row_id LIMIT 1"
            ),
            params![sequence, lookup_prefix(sequence)],
        )
    }

    fn find_by_id(&self, id: &str) -> Result<Option<EncodingRecord>, StoreError> {
        self.query_one(
            &format!("{SELECT_COLUMNS} WHERE id = ?1 ORDER BY row_id LIMIT 1"),
            params![id],
        )
    }

    fn len(&self) -> Result<usize, StoreError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))
            .map_err(|e| StoreError::Query(e.to_string()))?;
        Ok(count as usize)
    }
}
