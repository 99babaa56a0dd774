//! Application configuration with SQLite storage
//!
//! Stores user preferences (theme) and the notes shown on the
//! database interaction page.

use std::path::PathBuf;
use std::sync::OnceLock;

use parking_lot::Mutex;
use rusqlite::{params, Connection, Result as SqlResult};
use tracing::warn;

/// Available application themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Midnight - dark theme (default)
    #[default]
    Midnight,
    /// Daylight - light theme
    Daylight,
}

impl Theme {
    /// Convert from database integer value
    pub fn from_i32(value: i32) -> Self {
        match value {
            1 => Theme::Daylight,
            _ => Theme::Midnight,
        }
    }

    /// Convert to database integer value
    pub fn to_i32(self) -> i32 {
        match self {
            Theme::Midnight => 0,
            Theme::Daylight => 1,
        }
    }

    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Midnight => "Midnight",
            Theme::Daylight => "Daylight",
        }
    }

    /// Get all available themes
    pub fn all() -> &'static [Theme] {
        &[Theme::Midnight, Theme::Daylight]
    }
}

/// A note stored by the database interaction page
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub id: i64,
    pub body: String,
    pub created_at: String,
}

/// Configuration storage manager
pub struct ConfigStorage {
    conn: Mutex<Connection>,
}

impl ConfigStorage {
    /// Create or open config storage at the specified path
    pub fn open(db_path: PathBuf) -> SqlResult<Self> {
        let conn = Connection::open(db_path)?;
        Self::init(conn)
    }

    /// Open storage in the default location
    pub fn open_default() -> SqlResult<Self> {
        let db_path = config_db_path();
        if let Some(parent) = db_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        Self::open(db_path)
    }

    /// Open a transient in-memory storage
    pub fn open_in_memory() -> SqlResult<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> SqlResult<Self> {
        // WAL mode for better performance
        conn.execute_batch(
            "PRAGMA journal_mode=WAL;
             PRAGMA synchronous=NORMAL;",
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS config (
                key TEXT PRIMARY KEY,
                value INTEGER NOT NULL
            )",
            [],
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS notes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                body TEXT NOT NULL,
                created_at TEXT NOT NULL DEFAULT (datetime('now'))
            )",
            [],
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Load the saved theme, defaulting when none is stored
    pub fn load_theme(&self) -> Theme {
        let conn = self.conn.lock();
        conn.query_row(
            "SELECT value FROM config WHERE key = 'theme'",
            [],
            |row| row.get::<_, i32>(0),
        )
        .map(Theme::from_i32)
        .unwrap_or_default()
    }

    /// Persist the selected theme
    pub fn save_theme(&self, theme: Theme) -> SqlResult<()> {
        let conn = self.conn.lock();
        conn.execute(
            "INSERT OR REPLACE INTO config (key, value) VALUES ('theme', ?)",
            params![theme.to_i32()],
        )?;
        Ok(())
    }

    /// List stored notes, newest first
    pub fn list_notes(&self) -> SqlResult<Vec<Note>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare("SELECT id, body, created_at FROM notes ORDER BY id DESC")?;
        let rows = stmt.query_map([], |row| {
            Ok(Note {
                id: row.get(0)?,
                body: row.get(1)?,
                created_at: row.get(2)?,
            })
        })?;
        rows.collect()
    }

    /// Store a new note
    pub fn add_note(&self, body: &str) -> SqlResult<()> {
        let conn = self.conn.lock();
        conn.execute("INSERT INTO notes (body) VALUES (?)", params![body])?;
        Ok(())
    }

    /// Delete a note by id
    pub fn delete_note(&self, id: i64) -> SqlResult<()> {
        let conn = self.conn.lock();
        conn.execute("DELETE FROM notes WHERE id = ?", params![id])?;
        Ok(())
    }
}

/// Default config database location
fn config_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Homepage")
        .join("config.db")
}

/// Global config storage instance
static CONFIG_STORAGE: OnceLock<Option<ConfigStorage>> = OnceLock::new();

/// Get the global config storage instance
///
/// Falls back to an in-memory database when the on-disk one cannot be
/// opened; returns `None` only if that fails too.
pub fn storage() -> Option<&'static ConfigStorage> {
    CONFIG_STORAGE
        .get_or_init(|| match ConfigStorage::open_default() {
            Ok(storage) => Some(storage),
            Err(err) => {
                warn!(%err, "config database unavailable, preferences will not persist");
                ConfigStorage::open_in_memory().ok()
            }
        })
        .as_ref()
}

/// Load theme from config (convenience function)
pub fn load_theme() -> Theme {
    storage().map(|s| s.load_theme()).unwrap_or_default()
}

/// Save theme to config (convenience function)
pub fn save_theme(theme: Theme) {
    if let Some(s) = storage() {
        let _ = s.save_theme(theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_round_trips_through_storage() {
        let storage = ConfigStorage::open_in_memory().unwrap();
        assert_eq!(storage.load_theme(), Theme::Midnight);
        storage.save_theme(Theme::Daylight).unwrap();
        assert_eq!(storage.load_theme(), Theme::Daylight);
        storage.save_theme(Theme::Midnight).unwrap();
        assert_eq!(storage.load_theme(), Theme::Midnight);
    }

    #[test]
    fn theme_int_codes_are_stable() {
        for theme in Theme::all() {
            assert_eq!(Theme::from_i32(theme.to_i32()), *theme);
        }
        assert_eq!(Theme::from_i32(99), Theme::Midnight);
    }

    #[test]
    fn notes_can_be_added_listed_and_deleted() {
        let storage = ConfigStorage::open_in_memory().unwrap();
        assert!(storage.list_notes().unwrap().is_empty());

        storage.add_note("first").unwrap();
        storage.add_note("second").unwrap();

        let notes = storage.list_notes().unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].body, "second");
        assert_eq!(notes[1].body, "first");

        storage.delete_note(notes[1].id).unwrap();
        let notes = storage.list_notes().unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].body, "second");
    }
}
