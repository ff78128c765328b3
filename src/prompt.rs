use std::io::{self, Write};

use anyhow::{bail, Context, Result};

use crate::domain::{GameSession, Participant};

/// Collects one full game from stdin: players, decks, winner. Everything is
/// validated here, before any storage is touched.
pub fn collect_session() -> Result<GameSession> {
    let players = read_name_list("Players [John, Jane, etc]: ")?;
    let decks = read_name_list("Decks [Mogis, Krav, etc]: ")?;
    let winner = read_winner_index("Which player won? [e.g. 1, 2, or 3]: ")?;
    build_session(players, decks, winner)
}

pub fn build_session(players: Vec<String>, decks: Vec<String>, winner: usize) -> Result<GameSession> {
    if players.len() != decks.len() {
        bail!(
            "Player list and deck list must have the same length ({} players, {} decks)",
            players.len(),
            decks.len()
        );
    }
    if players.len() < 2 {
        bail!("A game needs at least two participants");
    }
    if winner >= players.len() {
        bail!(
            "Winner index {} is out of range for {} participants",
            winner + 1,
            players.len()
        );
    }

    let participants = players
        .into_iter()
        .zip(decks)
        .map(|(player, deck)| Participant { player, deck })
        .collect();

    Ok(GameSession {
        participants,
        winner,
    })
}

pub fn confirm_commit() -> Result<bool> {
    let answer = read_line("Commit to memory? (yes/no): ")?;
    Ok(matches!(answer.to_lowercase().as_str(), "yes" | "y"))
}

fn read_name_list(prompt: &str) -> Result<Vec<String>> {
    let line = read_line(prompt)?;
    Ok(split_name_list(&line))
}

pub fn split_name_list(line: &str) -> Vec<String> {
    line.split(',')
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

fn read_winner_index(prompt: &str) -> Result<usize> {
    let line = read_line(prompt)?;
    let one_based: usize = line
        .parse()
        .context("Winner must be a number, counted from 1")?;
    if one_based == 0 {
        bail!("Winner is counted from 1");
    }
    Ok(one_based - 1)
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read input")?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_name_list_trims_and_drops_empties() {
        assert_eq!(
            split_name_list(" Alice, Bob ,  , Carol"),
            vec!["Alice", "Bob", "Carol"]
        );
        assert!(split_name_list("").is_empty());
    }

    #[test]
    fn test_build_session_pairs_players_with_decks() {
        let session = build_session(
            vec!["Alice".into(), "Bob".into()],
            vec!["Mogis".into(), "Krav".into()],
            1,
        )
        .unwrap();

        assert_eq!(session.winner, 1);
        assert_eq!(session.participants[0], Participant::new("Alice", "Mogis"));
        assert_eq!(session.participants[1], Participant::new("Bob", "Krav"));
    }

    #[test]
    fn test_build_session_rejects_mismatched_lists() {
        let result = build_session(
            vec!["Alice".into(), "Bob".into()],
            vec!["Mogis".into()],
            0,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_build_session_rejects_short_fields_and_bad_winner() {
        assert!(build_session(vec!["Alice".into()], vec!["Mogis".into()], 0).is_err());
        assert!(build_session(
            vec!["Alice".into(), "Bob".into()],
            vec!["Mogis".into(), "Krav".into()],
            2,
        )
        .is_err());
    }
}
