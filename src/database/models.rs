use chrono::NaiveDateTime;

#[derive(Debug, Clone)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub rating: i64,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub struct Deck {
    pub id: i64,
    pub player_id: i64,
    pub player_name: String,
    pub deck_name: String,
    pub old_rating: i64,
    pub new_rating: i64,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub struct Game {
    pub id: i64,
    pub played_at: NaiveDateTime,
    pub deck_ids: Option<Vec<i64>>,
    pub winner_deck_id: Option<i64>,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub struct GameMember {
    pub deck_id: i64,
    pub game_id: i64,
    pub old_rating: i64,
    pub new_rating: i64,
}
