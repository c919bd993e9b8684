use std::path::{Path, PathBuf};

use rusqlite::{Connection, params};
use thiserror::Error;

use crate::i18n::Language;

const DATA_DIR: &str = "statshot_terminal";
const DB_FILE: &str = "events.sqlite";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("email is required")]
    MissingEmail,
    #[error("event store error: {0}")]
    Db(#[from] rusqlite::Error),
}

/// Append-only event store. Two independent collections, no reads on the
/// analysis path, no update or delete path at all. `created_at` is
/// assigned by the store, not the caller.
pub struct EventStore {
    conn: Connection,
}

impl EventStore {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        let conn = Connection::open(path)?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Record that a user had a player identified from an image.
    pub fn record_identification(
        &self,
        email: &str,
        player_name: &str,
        language: Language,
    ) -> Result<(), StoreError> {
        if email.trim().is_empty() {
            return Err(StoreError::MissingEmail);
        }
        self.conn.execute(
            "INSERT INTO identifications (email, player_name, language) VALUES (?1, ?2, ?3)",
            params![email.trim(), player_name, language.name()],
        )?;
        Ok(())
    }

    /// Record one feedback submission: did the user enjoy the tool, and do
    /// they want email updates.
    pub fn record_feedback(
        &self,
        email: &str,
        enjoyed: bool,
        wants_updates: bool,
        language: Language,
    ) -> Result<(), StoreError> {
        if email.trim().is_empty() {
            return Err(StoreError::MissingEmail);
        }
        self.conn.execute(
            "INSERT INTO feedback (email, enjoyed, wants_updates, language) VALUES (?1, ?2, ?3, ?4)",
            params![email.trim(), enjoyed, wants_updates, language.name()],
        )?;
        Ok(())
    }

    pub fn identification_count(&self) -> Result<u64, StoreError> {
        let count: u64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM identifications", [], |row| row.get(0))?;
        Ok(count)
    }

    pub fn feedback_count(&self) -> Result<u64, StoreError> {
        let count: u64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM feedback", [], |row| row.get(0))?;
        Ok(count)
    }

    #[cfg(test)]
    fn latest_feedback(&self) -> Result<(String, bool, bool, String, String), StoreError> {
        let row = self.conn.query_row(
            "SELECT email, enjoyed, wants_updates, language, created_at \
             FROM feedback ORDER BY id DESC LIMIT 1",
            [],
            |row| {
                Ok((
                    row.get(0)?,
                    row.get(1)?,
                    row.get(2)?,
                    row.get(3)?,
                    row.get(4)?,
                ))
            },
        )?;
        Ok(row)
    }
}

fn init_schema(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        r#"
        PRAGMA journal_mode = WAL;
        CREATE TABLE IF NOT EXISTS identifications (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email TEXT NOT NULL,
            player_name TEXT NOT NULL,
            language TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%SZ', 'now'))
        );
        CREATE TABLE IF NOT EXISTS feedback (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email TEXT NOT NULL,
            enjoyed INTEGER NOT NULL,
            wants_updates INTEGER NOT NULL,
            language TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%SZ', 'now'))
        );
        "#,
    )
}

/// Store location: explicit override, XDG data dir, then ~/.local/share.
pub fn default_store_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("STATSHOT_DB_PATH") {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    if let Ok(base) = std::env::var("XDG_DATA_HOME") {
        if !base.trim().is_empty() {
            return Some(PathBuf::from(base).join(DATA_DIR).join(DB_FILE));
        }
    }
    let home = std::env::var("HOME").ok()?;
    if home.trim().is_empty() {
        return None;
    }
    Some(
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join(DATA_DIR)
            .join(DB_FILE),
    )
}

#[cfg(test)]
mod tests {
    use super::{EventStore, StoreError};
    use crate::i18n::Language;

    #[test]
    fn feedback_appends_with_store_assigned_timestamp() {
        let store = EventStore::open_in_memory().expect("open");
        store
            .record_feedback("fan@example.com", true, false, Language::Spanish)
            .expect("write");

        assert_eq!(store.feedback_count().expect("count"), 1);
        let (email, enjoyed, wants_updates, language, created_at) =
            store.latest_feedback().expect("row");
        assert_eq!(email, "fan@example.com");
        assert!(enjoyed);
        assert!(!wants_updates);
        assert_eq!(language, "Spanish");
        assert!(!created_at.is_empty());
    }

    #[test]
    fn empty_email_is_rejected_before_any_write() {
        let store = EventStore::open_in_memory().expect("open");
        let result = store.record_feedback("  ", true, true, Language::English);
        assert!(matches!(result, Err(StoreError::MissingEmail)));
        assert_eq!(store.feedback_count().expect("count"), 0);

        let result = store.record_identification("", "Aaron Judge", Language::English);
        assert!(matches!(result, Err(StoreError::MissingEmail)));
        assert_eq!(store.identification_count().expect("count"), 0);
    }

    #[test]
    fn identification_appends_independently_of_feedback() {
        let store = EventStore::open_in_memory().expect("open");
        store
            .record_identification("fan@example.com", "Shohei Ohtani", Language::Japanese)
            .expect("write");
        store
            .record_identification("fan@example.com", "Shohei Ohtani", Language::Japanese)
            .expect("write");
        assert_eq!(store.identification_count().expect("count"), 2);
        assert_eq!(store.feedback_count().expect("count"), 0);
    }
}
