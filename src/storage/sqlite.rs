//! SQLite storage backend for contribution counting

use super::traits::{ContributionStore, OpenStore, StorageError, StorageResult, StoredPublication};
use crate::catalog::normalize;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// SQLite-backed contribution store
///
/// Uses a single SQLite database file with tables for publications,
/// per-publication discipline tags, and the master discipline list.
/// Thread-safe via internal mutex on the connection.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Initialize the database schema
    fn init_schema(conn: &Connection) -> StorageResult<()> {
        conn.execute_batch(
            r#"
            -- One row per (scientist, journal) with the publication count
            CREATE TABLE IF NOT EXISTS publications (
                scientist_key TEXT NOT NULL,
                journal_key TEXT NOT NULL,
                scientist TEXT NOT NULL,
                count INTEGER NOT NULL,
                imported_at TEXT NOT NULL,
                PRIMARY KEY (scientist_key, journal_key)
            );

            -- Disciplines recorded against a publication key
            CREATE TABLE IF NOT EXISTS discipline_tags (
                journal_key TEXT NOT NULL,
                position INTEGER NOT NULL,
                discipline TEXT NOT NULL,
                PRIMARY KEY (journal_key, discipline)
            );

            CREATE INDEX IF NOT EXISTS idx_discipline_tags_position
                ON discipline_tags(journal_key, position);

            -- Master discipline list
            CREATE TABLE IF NOT EXISTS discipline_list (
                position INTEGER PRIMARY KEY,
                name TEXT NOT NULL
            );

            -- Enable WAL mode for concurrent reads during writes
            PRAGMA journal_mode = WAL;
            "#,
        )?;
        Ok(())
    }

    fn conn(&self) -> StorageResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StorageError::LockPoisoned)
    }

    fn write_publication(
        conn: &Connection,
        publication: &StoredPublication,
    ) -> StorageResult<()> {
        conn.execute(
            r#"
            INSERT INTO publications (scientist_key, journal_key, scientist, count, imported_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(scientist_key, journal_key) DO UPDATE SET
                scientist = excluded.scientist,
                count = excluded.count,
                imported_at = excluded.imported_at
            "#,
            params![
                normalize(&publication.scientist),
                normalize(&publication.key),
                publication.scientist.trim(),
                publication.count,
                publication.imported_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    fn write_discipline_tags(
        conn: &Connection,
        key: &str,
        disciplines: &[String],
    ) -> StorageResult<()> {
        let key = normalize(key);
        conn.execute("DELETE FROM discipline_tags WHERE journal_key = ?1", params![key])?;
        for (position, discipline) in disciplines.iter().enumerate() {
            let discipline = normalize(discipline);
            if discipline.is_empty() {
                continue;
            }
            conn.execute(
                "INSERT OR IGNORE INTO discipline_tags (journal_key, position, discipline)
                 VALUES (?1, ?2, ?3)",
                params![key, position as i64, discipline],
            )?;
        }
        Ok(())
    }

    fn write_discipline_list(conn: &Connection, names: &[String]) -> StorageResult<()> {
        conn.execute("DELETE FROM discipline_list", [])?;
        for (position, name) in names.iter().enumerate() {
            conn.execute(
                "INSERT INTO discipline_list (position, name) VALUES (?1, ?2)",
                params![position as i64, name],
            )?;
        }
        Ok(())
    }

    /// Deserialize a publication from database columns
    fn row_to_publication(
        scientist: String,
        key: String,
        count: i64,
        imported_at: String,
    ) -> StorageResult<StoredPublication> {
        Ok(StoredPublication {
            scientist,
            key,
            count: u32::try_from(count).map_err(|_| StorageError::InvalidCount(count))?,
            imported_at: DateTime::parse_from_rfc3339(&imported_at)
                .map_err(|e| StorageError::DateParse(e.to_string()))?
                .with_timezone(&Utc),
        })
    }
}

impl OpenStore for SqliteStore {
    fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        Self::init_schema(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn open_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

impl ContributionStore for SqliteStore {
    // === Publication Operations ===

    fn save_publication(&self, publication: &StoredPublication) -> StorageResult<()> {
        let conn = self.conn()?;
        Self::write_publication(&conn, publication)
    }

    fn load_publications(&self, scientist: &str) -> StorageResult<Vec<StoredPublication>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT scientist, journal_key, count, imported_at
             FROM publications WHERE scientist_key = ?1
             ORDER BY journal_key",
        )?;
        let rows = stmt.query_map(params![normalize(scientist)], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, i64>(2)?,
                row.get::<_, String>(3)?,
            ))
        })?;

        let mut publications = Vec::new();
        for row in rows {
            let (name, key, count, imported_at) = row?;
            publications.push(Self::row_to_publication(name, key, count, imported_at)?);
        }
        Ok(publications)
    }

    fn list_scientists(&self) -> StorageResult<Vec<String>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT MIN(scientist) FROM publications GROUP BY scientist_key ORDER BY scientist_key",
        )?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names)
    }

    // === Discipline Tag Operations ===

    fn save_discipline_tags(&self, key: &str, disciplines: &[String]) -> StorageResult<()> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        Self::write_discipline_tags(&tx, key, disciplines)?;
        tx.commit()?;
        Ok(())
    }

    fn load_discipline_tags(&self, key: &str) -> StorageResult<Vec<String>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT discipline FROM discipline_tags WHERE journal_key = ?1 ORDER BY position",
        )?;
        let tags = stmt
            .query_map(params![normalize(key)], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tags)
    }

    // === Master Discipline List ===

    fn save_discipline_list(&self, names: &[String]) -> StorageResult<()> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        Self::write_discipline_list(&tx, names)?;
        tx.commit()?;
        Ok(())
    }

    fn load_discipline_list(&self) -> StorageResult<Vec<String>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT name FROM discipline_list ORDER BY position")?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names)
    }

    // === Bulk Operations ===

    fn replace_contents(
        &self,
        publications: &[StoredPublication],
        tags: &[(String, Vec<String>)],
        disciplines: &[String],
    ) -> StorageResult<()> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        tx.execute_batch("DELETE FROM publications; DELETE FROM discipline_tags;")?;
        for publication in publications {
            Self::write_publication(&tx, publication)?;
        }
        for (key, tagged) in tags {
            Self::write_discipline_tags(&tx, key, tagged)?;
        }
        Self::write_discipline_list(&tx, disciplines)?;
        tx.commit()?;
        Ok(())
    }
}
