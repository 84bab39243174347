//! Database Queries
//!
//! Parameterized queries on the preferences table.

use chrono::{DateTime, Local};
use rusqlite::{params, types::Type, Connection, OptionalExtension, Row};

use super::{DbError, DbResult};

/// A stored preference value
#[derive(Debug, Clone, PartialEq)]
pub struct StoredPreference {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Local>,
}

/// Insert or replace a preference value
pub fn set_preference(conn: &Connection, key: &str, value: &str) -> DbResult<()> {
    conn.execute(
        r#"
        INSERT INTO preferences (key, value, updated_at) VALUES (?1, ?2, ?3)
        ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
        "#,
        params![key, value, Local::now().to_rfc3339()],
    )?;

    Ok(())
}

/// Get a preference value, `None` when it was never set
pub fn get_preference(conn: &Connection, key: &str) -> DbResult<Option<StoredPreference>> {
    let pref = conn
        .query_row(
            "SELECT key, value, updated_at FROM preferences WHERE key = ?1",
            [key],
            row_to_preference,
        )
        .optional()?;

    Ok(pref)
}

/// Get all preference values ordered by key
pub fn get_all_preferences(conn: &Connection) -> DbResult<Vec<StoredPreference>> {
    let mut stmt = conn.prepare("SELECT key, value, updated_at FROM preferences ORDER BY key")?;

    let prefs = stmt
        .query_map([], row_to_preference)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(prefs)
}

/// Delete a preference value
pub fn delete_preference(conn: &Connection, key: &str) -> DbResult<()> {
    let affected = conn.execute("DELETE FROM preferences WHERE key = ?1", [key])?;

    if affected == 0 {
        return Err(DbError::NotFound(format!("Preference: {}", key)));
    }

    Ok(())
}

fn row_to_preference(row: &Row) -> rusqlite::Result<StoredPreference> {
    let updated_at: String = row.get(2)?;

    Ok(StoredPreference {
        key: row.get(0)?,
        value: row.get(1)?,
        updated_at: parse_datetime(&updated_at)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?,
    })
}

fn parse_datetime(s: &str) -> Result<DateTime<Local>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s).map(|dt| dt.with_timezone(&Local))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    #[test]
    fn test_set_and_get() {
        let db = Database::open_in_memory().unwrap();
        set_preference(db.conn(), "sync_frequency", "60").unwrap();

        let pref = get_preference(db.conn(), "sync_frequency").unwrap().unwrap();
        assert_eq!(pref.key, "sync_frequency");
        assert_eq!(pref.value, "60");
    }

    #[test]
    fn test_missing_is_none() {
        let db = Database::open_in_memory().unwrap();
        assert!(get_preference(db.conn(), "nope").unwrap().is_none());
    }

    #[test]
    fn test_set_overwrites() {
        let db = Database::open_in_memory().unwrap();
        set_preference(db.conn(), "k", "one").unwrap();
        set_preference(db.conn(), "k", "two").unwrap();

        let all = get_all_preferences(db.conn()).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].value, "two");
    }

    #[test]
    fn test_get_all_ordered() {
        let db = Database::open_in_memory().unwrap();
        set_preference(db.conn(), "b", "2").unwrap();
        set_preference(db.conn(), "a", "1").unwrap();

        let keys: Vec<String> = get_all_preferences(db.conn())
            .unwrap()
            .into_iter()
            .map(|p| p.key)
            .collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_delete() {
        let db = Database::open_in_memory().unwrap();
        set_preference(db.conn(), "k", "v").unwrap();
        delete_preference(db.conn(), "k").unwrap();

        assert!(get_preference(db.conn(), "k").unwrap().is_none());
        assert!(matches!(delete_preference(db.conn(), "k"), Err(DbError::NotFound(_))));
    }

    #[test]
    fn test_updated_at_tracks_writes() {
        let db = Database::open_in_memory().unwrap();
        let before = Local::now();
        set_preference(db.conn(), "k", "v").unwrap();

        let pref = get_preference(db.conn(), "k").unwrap().unwrap();
        assert!(pref.updated_at >= before - chrono::Duration::seconds(1));
        assert!(pref.updated_at <= Local::now());
    }

    #[test]
    fn test_corrupt_timestamp_is_an_error() {
        let db = Database::open_in_memory().unwrap();
        set_preference(db.conn(), "good", "1").unwrap();
        db.conn()
            .execute(
                "INSERT INTO preferences (key, value, updated_at) VALUES ('bad', '2', 'yesterday')",
                [],
            )
            .unwrap();

        assert!(matches!(get_all_preferences(db.conn()), Err(DbError::Sqlite(_))));
        assert!(matches!(get_preference(db.conn(), "bad"), Err(DbError::Sqlite(_))));
        assert!(get_preference(db.conn(), "good").unwrap().is_some());
    }
}
