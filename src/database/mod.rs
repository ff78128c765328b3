pub mod connection;
pub mod decks;
pub mod games;
pub mod members;
pub mod models;
pub mod players;
pub mod setup;

pub use connection::{create_pool, get_connection, DbConn, DbPool};
pub use models::*;
