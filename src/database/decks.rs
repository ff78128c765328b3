use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use super::models::Deck;
use crate::config::settings::RatingSettings;

pub fn upsert_deck(
    conn: &Connection,
    player_id: i64,
    player_name: &str,
    deck_name: &str,
    old_rating: i64,
    new_rating: i64,
) -> Result<Deck> {
    let sql = "INSERT INTO decks (player_id, player_name, deck_name, old_rating, new_rating) VALUES (?1, ?2, ?3, ?4, ?5) ON CONFLICT(player_name, deck_name) DO UPDATE SET player_id = excluded.player_id, old_rating = excluded.old_rating, new_rating = excluded.new_rating RETURNING id, player_id, player_name, deck_name, old_rating, new_rating, created_at";

    conn.query_row(
        sql,
        params![player_id, player_name, deck_name, old_rating, new_rating],
        parse_deck_row,
    )
    .context("Failed to upsert deck")
}

pub fn find_by_names(
    conn: &Connection,
    player_name: &str,
    deck_name: &str,
) -> Result<Option<Deck>> {
    let sql = "SELECT id, player_id, player_name, deck_name, old_rating, new_rating, created_at FROM decks WHERE player_name = ?1 AND deck_name = ?2";

    conn.query_row(sql, params![player_name, deck_name], parse_deck_row)
        .optional()
        .context("Failed to query deck by names")
}

/// Current deck rating (the `new_rating` left by its latest game), falling
/// back to the default for unseen pairs. Decks owned by the anonymous
/// sentinel always resolve to the default.
pub fn resolve_rating(
    conn: &Connection,
    player_name: &str,
    deck_name: &str,
    settings: &RatingSettings,
) -> Result<i64> {
    if player_name == settings.anonymous_name {
        return Ok(settings.default_rating);
    }

    let stored = find_by_names(conn, player_name, deck_name)?.map(|deck| deck.new_rating);
    Ok(stored.unwrap_or(settings.default_rating))
}

pub fn list_all(conn: &Connection) -> Result<Vec<Deck>> {
    let sql = "SELECT id, player_id, player_name, deck_name, old_rating, new_rating, created_at FROM decks ORDER BY new_rating DESC, player_name ASC, deck_name ASC";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_deck_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

fn parse_deck_row(row: &rusqlite::Row) -> rusqlite::Result<Deck> {
    Ok(Deck {
        id: row.get(0)?,
        player_id: row.get(1)?,
        player_name: row.get(2)?,
        deck_name: row.get(3)?,
        old_rating: row.get(4)?,
        new_rating: row.get(5)?,
        created_at: row.get(6)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{connection, players, setup};

    fn test_conn() -> connection::DbConn {
        let pool = connection::create_memory_pool().unwrap();
        let conn = connection::get_connection(&pool).unwrap();
        setup::init_database(&conn).unwrap();
        conn
    }

    #[test]
    fn test_deck_identity_is_player_deck_pair() {
        let conn = test_conn();
        let alice = players::upsert_player(&conn, "Alice", 1000).unwrap();
        let bob = players::upsert_player(&conn, "Bob", 1000).unwrap();

        let first = upsert_deck(&conn, alice.id, "Alice", "Mogis", 1000, 1016).unwrap();
        let same_pair = upsert_deck(&conn, alice.id, "Alice", "Mogis", 1016, 1030).unwrap();
        let other_owner = upsert_deck(&conn, bob.id, "Bob", "Mogis", 1000, 984).unwrap();

        assert_eq!(first.id, same_pair.id);
        assert_ne!(first.id, other_owner.id);
        assert_eq!(same_pair.new_rating, 1030);
    }

    #[test]
    fn test_resolve_rating_reads_latest_new_rating() {
        let conn = test_conn();
        let settings = RatingSettings::default();
        let alice = players::upsert_player(&conn, "Alice", 1016).unwrap();

        assert_eq!(
            resolve_rating(&conn, "Alice", "Mogis", &settings).unwrap(),
            1000
        );

        upsert_deck(&conn, alice.id, "Alice", "Mogis", 1000, 1016).unwrap();
        assert_eq!(
            resolve_rating(&conn, "Alice", "Mogis", &settings).unwrap(),
            1016
        );
    }
}
