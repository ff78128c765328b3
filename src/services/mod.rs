pub mod recording;
pub mod standings;

pub use recording::RecordingService;
pub use standings::StandingsService;
