use anyhow::Result;
use colored::Colorize;

use crate::config::settings::AppConfig;
use crate::database::{self, Deck, DbPool, Player};

/// Prints every player and deck ranked by current rating.
pub struct StandingsService {
    config: AppConfig,
    pool: DbPool,
}

impl StandingsService {
    pub fn new(config: AppConfig) -> Result<Self> {
        let pool = database::create_pool(&config.storage.database_path)?;
        Self::with_pool(config, pool)
    }

    pub(crate) fn with_pool(config: AppConfig, pool: DbPool) -> Result<Self> {
        let conn = database::get_connection(&pool)?;
        database::setup::init_database(&conn)?;
        Ok(Self { config, pool })
    }

    pub fn run(&self) -> Result<()> {
        let conn = database::get_connection(&self.pool)?;
        let players = visible_players(
            database::players::list_all(&conn)?,
            self.config.rating.anonymous_name,
        );
        let decks = visible_decks(
            database::decks::list_all(&conn)?,
            self.config.rating.anonymous_name,
        );

        println!("{}", "Players".bold());
        for (pos, player) in players.iter().enumerate() {
            println!("{:>3}. {:<20} {}", pos + 1, player.name, player.rating);
        }

        println!();
        println!("{}", "Decks".bold());
        for (pos, deck) in decks.iter().enumerate() {
            println!(
                "{:>3}. {:<20} {:<20} {}",
                pos + 1,
                deck.deck_name,
                deck.player_name,
                deck.new_rating
            );
        }

        Ok(())
    }
}

/// The anonymous sentinel never ranks; its rating is pinned to the default.
fn visible_players(players: Vec<Player>, anonymous_name: &str) -> Vec<Player> {
    players
        .into_iter()
        .filter(|player| player.name != anonymous_name)
        .collect()
}

fn visible_decks(decks: Vec<Deck>, anonymous_name: &str) -> Vec<Deck> {
    decks
        .into_iter()
        .filter(|deck| deck.player_name != anonymous_name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::connection;
    use crate::domain::Participant;
    use crate::services::recording::RecordingService;
    use chrono::NaiveDate;

    #[test]
    fn test_anonymous_rows_are_hidden_from_standings() {
        let pool = connection::create_memory_pool().unwrap();
        let recording = RecordingService::with_pool(AppConfig::new(), pool.clone()).unwrap();

        let participants = vec![
            Participant::new("Alice", "Mogis"),
            Participant::new("ANON", "Loaner"),
        ];
        let outcome = recording.preview(&participants, 0).unwrap();
        let played_at = NaiveDate::from_ymd_opt(2026, 8, 7)
            .unwrap()
            .and_hms_opt(22, 0, 0)
            .unwrap();
        recording.commit(&participants, &outcome, played_at).unwrap();

        let conn = connection::get_connection(&pool).unwrap();
        let settings = AppConfig::new();
        let players = visible_players(
            database::players::list_all(&conn).unwrap(),
            settings.rating.anonymous_name,
        );
        let decks = visible_decks(
            database::decks::list_all(&conn).unwrap(),
            settings.rating.anonymous_name,
        );

        assert_eq!(players.len(), 1);
        assert_eq!(players[0].name, "Alice");
        assert_eq!(decks.len(), 1);
        assert_eq!(decks[0].deck_name, "Mogis");
    }
}
