pub mod models;

pub use models::{GameOutcome, GameSession, Participant, RecordedParticipant};
