use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension};

use super::models::Game;

/// Creates the game row and hands back its id directly; the timestamp is
/// payload, never a lookup key. Winner and deck list are filled in once the
/// membership rows exist.
pub fn insert_game(conn: &Connection, played_at: NaiveDateTime) -> Result<Game> {
    let sql = "INSERT INTO games (played_at) VALUES (?1) RETURNING id, played_at, deck_ids, winner_deck_id, created_at";

    conn.query_row(sql, params![played_at], parse_game_row)
        .context("Failed to insert game")
}

pub fn set_winner(conn: &Connection, game_id: i64, deck_id: i64) -> Result<()> {
    let sql = "UPDATE games SET winner_deck_id = ?1 WHERE id = ?2";

    conn.execute(sql, params![deck_id, game_id])
        .context("Failed to set game winner")
        .map(|_| ())
}

pub fn set_deck_ids(conn: &Connection, game_id: i64, deck_ids: &[i64]) -> Result<()> {
    let serialized =
        serde_json::to_string(deck_ids).context("Failed to serialize deck id list")?;
    let sql = "UPDATE games SET deck_ids = ?1 WHERE id = ?2";

    conn.execute(sql, params![serialized, game_id])
        .context("Failed to set game deck ids")
        .map(|_| ())
}

pub fn find_by_id(conn: &Connection, game_id: i64) -> Result<Option<Game>> {
    let sql = "SELECT id, played_at, deck_ids, winner_deck_id, created_at FROM games WHERE id = ?1";

    conn.query_row(sql, params![game_id], parse_game_row)
        .optional()
        .context("Failed to query game by id")
}

fn parse_game_row(row: &rusqlite::Row) -> rusqlite::Result<Game> {
    let raw_deck_ids: Option<String> = row.get(2)?;
    let deck_ids = match raw_deck_ids {
        Some(text) => Some(parse_deck_ids(&text)?),
        None => None,
    };

    Ok(Game {
        id: row.get(0)?,
        played_at: row.get(1)?,
        deck_ids,
        winner_deck_id: row.get(3)?,
        created_at: row.get(4)?,
    })
}

fn parse_deck_ids(text: &str) -> rusqlite::Result<Vec<i64>> {
    serde_json::from_str(text).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
    })
}
