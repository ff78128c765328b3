use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use super::models::GameMember;

pub fn insert_member(
    conn: &Connection,
    deck_id: i64,
    game_id: i64,
    old_rating: i64,
    new_rating: i64,
) -> Result<()> {
    let sql = "INSERT INTO game_members (deck_id, game_id, old_rating, new_rating) VALUES (?1, ?2, ?3, ?4)";

    conn.execute(sql, params![deck_id, game_id, old_rating, new_rating])
        .context("Failed to insert game membership")
        .map(|_| ())
}

pub fn list_by_game(conn: &Connection, game_id: i64) -> Result<Vec<GameMember>> {
    let sql = "SELECT deck_id, game_id, old_rating, new_rating FROM game_members WHERE game_id = ?1 ORDER BY deck_id ASC";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![game_id], parse_member_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

fn parse_member_row(row: &rusqlite::Row) -> rusqlite::Result<GameMember> {
    Ok(GameMember {
        deck_id: row.get(0)?,
        game_id: row.get(1)?,
        old_rating: row.get(2)?,
        new_rating: row.get(3)?,
    })
}
