use chrono::NaiveDateTime;

/// One seat at the table: a player and the deck they piloted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub player: String,
    pub deck: String,
}

impl Participant {
    pub fn new(player: impl Into<String>, deck: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            deck: deck.into(),
        }
    }
}

/// A fully collected game: who played what, and which seat won.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub participants: Vec<Participant>,
    pub winner: usize,
}

/// Computed rating changes for one game, both tracks, not yet persisted.
#[derive(Debug, Clone)]
pub struct GameOutcome {
    pub winner: usize,
    pub scores: Vec<i64>,
    pub old_deck_ratings: Vec<i64>,
    pub new_deck_ratings: Vec<i64>,
    pub old_player_ratings: Vec<i64>,
    pub new_player_ratings: Vec<i64>,
}

/// What actually landed in storage for one seat of a committed game.
#[derive(Debug, Clone)]
pub struct RecordedParticipant {
    pub deck_id: i64,
    pub player_name: String,
    pub deck_name: String,
    pub winner: bool,
    pub old_deck_rating: i64,
    pub new_deck_rating: i64,
    pub new_player_rating: i64,
    pub played_at: NaiveDateTime,
}
