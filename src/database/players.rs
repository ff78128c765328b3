use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use super::models::Player;
use crate::config::settings::RatingSettings;

pub fn upsert_player(conn: &Connection, name: &str, rating: i64) -> Result<Player> {
    let sql = "INSERT INTO players (name, rating) VALUES (?1, ?2) ON CONFLICT(name) DO UPDATE SET rating = excluded.rating RETURNING id, name, rating, created_at";

    conn.query_row(sql, params![name, rating], parse_player_row)
        .context("Failed to upsert player")
}

pub fn find_by_name(conn: &Connection, name: &str) -> Result<Option<Player>> {
    let sql = "SELECT id, name, rating, created_at FROM players WHERE name = ?1";

    conn.query_row(sql, params![name], parse_player_row)
        .optional()
        .context("Failed to query player by name")
}

/// Current player rating, falling back to the default for names never seen
/// before. The anonymous sentinel always resolves to the default, no matter
/// what is stored for it.
pub fn resolve_rating(conn: &Connection, name: &str, settings: &RatingSettings) -> Result<i64> {
    if name == settings.anonymous_name {
        return Ok(settings.default_rating);
    }

    let stored = find_by_name(conn, name)?.map(|player| player.rating);
    Ok(stored.unwrap_or(settings.default_rating))
}

pub fn list_all(conn: &Connection) -> Result<Vec<Player>> {
    let sql = "SELECT id, name, rating, created_at FROM players ORDER BY rating DESC, name ASC";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
        rating: row.get(2)?,
        created_at: row.get(3)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{connection, setup};

    fn test_conn() -> connection::DbConn {
        let pool = connection::create_memory_pool().unwrap();
        let conn = connection::get_connection(&pool).unwrap();
        setup::init_database(&conn).unwrap();
        conn
    }

    #[test]
    fn test_upsert_keeps_identity_and_updates_rating() {
        let conn = test_conn();

        let first = upsert_player(&conn, "Alice", 1016).unwrap();
        let second = upsert_player(&conn, "Alice", 1032).unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.rating, 1032);
        assert_eq!(list_all(&conn).unwrap().len(), 1);
    }

    #[test]
    fn test_resolve_rating_defaults_for_unseen_name() {
        let conn = test_conn();
        let settings = RatingSettings::default();

        assert_eq!(resolve_rating(&conn, "Nobody", &settings).unwrap(), 1000);
        // Still the default on a second lookup, not just the first.
        assert_eq!(resolve_rating(&conn, "Nobody", &settings).unwrap(), 1000);
    }

    #[test]
    fn test_resolve_rating_ignores_stored_anonymous_row() {
        let conn = test_conn();
        let settings = RatingSettings::default();

        upsert_player(&conn, settings.anonymous_name, 1400).unwrap();
        assert_eq!(
            resolve_rating(&conn, settings.anonymous_name, &settings).unwrap(),
            settings.default_rating
        );
    }
}
