//! Schema versioning through SQLite's `user_version` pragma.
//!
//! `STEPS[n]` upgrades a database from version `n` to `n + 1`.

use anyhow::{Context, Result};
use rusqlite::Connection;

const STEPS: &[&str] = &[include_str!("migrations/001_initial.sql")];

pub fn schema_version(conn: &Connection) -> Result<usize> {
    let version: i64 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    Ok(usize::try_from(version).unwrap_or(0))
}

/// Bring the schema up to date. Each step commits together with its version bump.
pub fn upgrade(conn: &Connection) -> Result<()> {
    let current = schema_version(conn)?;
    if current > STEPS.len() {
        anyhow::bail!(
            "Session database is at schema {} but this build only knows {}",
            current,
            STEPS.len()
        );
    }

    for (from, sql) in STEPS.iter().enumerate().skip(current) {
        let to = from + 1;
        tracing::debug!("Upgrading session schema {} -> {}", from, to);
        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(sql)
            .with_context(|| format!("Failed to upgrade session schema to {}", to))?;
        tx.pragma_update(None, "user_version", to as i64)?;
        tx.commit()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_database_gets_storage_table() {
        let conn = Connection::open_in_memory().unwrap();
        upgrade(&conn).unwrap();

        let count: i32 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='client_storage'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(schema_version(&conn).unwrap(), STEPS.len());
    }

    #[test]
    fn upgrading_twice_is_a_no_op() {
        let conn = Connection::open_in_memory().unwrap();
        upgrade(&conn).unwrap();
        upgrade(&conn).unwrap();
        assert_eq!(schema_version(&conn).unwrap(), STEPS.len());
    }

    #[test]
    fn newer_schema_is_refused() {
        let conn = Connection::open_in_memory().unwrap();
        conn.pragma_update(None, "user_version", 99i64).unwrap();
        assert!(upgrade(&conn).is_err());
    }
}
