use anyhow::{bail, Context, Result};
use chrono::Local;
use colored::Colorize;
use log::info;

use crate::config::settings::AppConfig;
use crate::database::{self, DbPool};
use crate::domain::{GameOutcome, Participant, RecordedParticipant};
use crate::prompt;
use crate::rating;

/// Records one finished game end to end: collect, rate, confirm, persist.
pub struct RecordingService {
    config: AppConfig,
    pool: DbPool,
}

impl RecordingService {
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
        let session = prompt::collect_session()?;
        let outcome = self.preview(&session.participants, session.winner)?;
        print_preview(&session.participants, &outcome);

        if !prompt::confirm_commit()? {
            info!("Results discarded, nothing persisted");
            return Ok(());
        }

        let played_at = Local::now().naive_local();
        let recorded = self.commit(&session.participants, &outcome, played_at)?;
        print_committed(&recorded);
        Ok(())
    }

    /// Resolves both rating tracks and runs the update for each; nothing is
    /// persisted until `commit`.
    pub fn preview(&self, participants: &[Participant], winner: usize) -> Result<GameOutcome> {
        validate_field(participants, winner)?;
        let conn = database::get_connection(&self.pool)?;

        let mut old_deck_ratings = Vec::with_capacity(participants.len());
        let mut old_player_ratings = Vec::with_capacity(participants.len());
        for participant in participants {
            old_deck_ratings.push(database::decks::resolve_rating(
                &conn,
                &participant.player,
                &participant.deck,
                &self.config.rating,
            )?);
            old_player_ratings.push(database::players::resolve_rating(
                &conn,
                &participant.player,
                &self.config.rating,
            )?);
        }

        let deck_update = rating::rate_field(&old_deck_ratings, winner, &self.config.rating);
        let player_update = rating::rate_field(&old_player_ratings, winner, &self.config.rating);

        Ok(GameOutcome {
            winner,
            scores: deck_update.scores,
            old_deck_ratings,
            new_deck_ratings: deck_update.new_ratings,
            old_player_ratings,
            new_player_ratings: player_update.new_ratings,
        })
    }

    /// Persists the game in one transaction: game row first (its id comes
    /// back from the insert), then player/deck upserts and membership rows,
    /// finally the winner reference and the deck id list on the game row.
    pub fn commit(
        &self,
        participants: &[Participant],
        outcome: &GameOutcome,
        played_at: chrono::NaiveDateTime,
    ) -> Result<Vec<RecordedParticipant>> {
        validate_outcome(participants, outcome)?;

        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn
            .transaction()
            .context("Failed to open game transaction")?;

        let game = database::games::insert_game(&tx, played_at)?;
        let mut deck_ids = Vec::with_capacity(participants.len());
        let mut recorded = Vec::with_capacity(participants.len());

        for (idx, participant) in participants.iter().enumerate() {
            let (old_deck, new_deck, new_player) = self.stored_ratings(participant, outcome, idx);

            let player = database::players::upsert_player(&tx, &participant.player, new_player)?;
            let deck = database::decks::upsert_deck(
                &tx,
                player.id,
                &participant.player,
                &participant.deck,
                old_deck,
                new_deck,
            )?;
            database::members::insert_member(&tx, deck.id, game.id, old_deck, new_deck)?;

            deck_ids.push(deck.id);
            recorded.push(RecordedParticipant {
                deck_id: deck.id,
                player_name: participant.player.clone(),
                deck_name: participant.deck.clone(),
                winner: idx == outcome.winner,
                old_deck_rating: old_deck,
                new_deck_rating: new_deck,
                new_player_rating: new_player,
                played_at,
            });
        }

        database::games::set_winner(&tx, game.id, deck_ids[outcome.winner])?;
        database::games::set_deck_ids(&tx, game.id, &deck_ids)?;
        tx.commit().context("Failed to commit game transaction")?;

        info!(
            "Recorded game {} with {} participants",
            game.id,
            participants.len()
        );
        Ok(recorded)
    }

    /// Anonymous seats keep their rows so the game history stays complete,
    /// but their stored ratings are pinned to the default and never drift.
    fn stored_ratings(
        &self,
        participant: &Participant,
        outcome: &GameOutcome,
        idx: usize,
    ) -> (i64, i64, i64) {
        if participant.player == self.config.rating.anonymous_name {
            let default = self.config.rating.default_rating;
            return (default, default, default);
        }
        (
            outcome.old_deck_ratings[idx],
            outcome.new_deck_ratings[idx],
            outcome.new_player_ratings[idx],
        )
    }
}

fn validate_field(participants: &[Participant], winner: usize) -> Result<()> {
    if participants.len() < 2 {
        bail!("A game needs at least two participants");
    }
    if winner >= participants.len() {
        bail!(
            "Winner index {} is out of range for {} participants",
            winner + 1,
            participants.len()
        );
    }
    Ok(())
}

fn validate_outcome(participants: &[Participant], outcome: &GameOutcome) -> Result<()> {
    validate_field(participants, outcome.winner)?;
    let len = participants.len();
    if outcome.new_deck_ratings.len() != len
        || outcome.old_deck_ratings.len() != len
        || outcome.new_player_ratings.len() != len
        || outcome.old_player_ratings.len() != len
    {
        bail!("Computed ratings do not match the participant list");
    }
    Ok(())
}

fn print_preview(participants: &[Participant], outcome: &GameOutcome) {
    println!("{}", "==============================".dimmed());
    for (idx, participant) in participants.iter().enumerate() {
        let marker = if idx == outcome.winner {
            "winner".green().bold()
        } else {
            "      ".normal()
        };
        println!(
            "{:<14} {:<14} {} deck {} -> {}  player {} -> {}",
            participant.player,
            participant.deck,
            marker,
            outcome.old_deck_ratings[idx],
            outcome.new_deck_ratings[idx],
            outcome.old_player_ratings[idx],
            outcome.new_player_ratings[idx],
        );
    }
    println!("{}", "==============================".dimmed());
}

fn print_committed(recorded: &[RecordedParticipant]) {
    for entry in recorded {
        let marker = if entry.winner {
            "winner".green().bold()
        } else {
            "      ".normal()
        };
        println!(
            "#{:<4} {:<14} {:<14} {} deck {} -> {}  player {}  {}",
            entry.deck_id,
            entry.player_name,
            entry.deck_name,
            marker,
            entry.old_deck_rating,
            entry.new_deck_rating,
            entry.new_player_rating,
            entry.played_at.format("%Y-%m-%d %H:%M:%S"),
        );
    }
    println!("{}", "Database update completed".green());
}
