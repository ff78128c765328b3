pub mod elo;

pub use elo::{rate_field, FieldUpdate};
