use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "game night deck and player rating tracker")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Record a finished game and update both rating tracks
    Record {
        /// Database file path (optional, defaults to gamenight_elo.db)
        #[arg(short, long)]
        database: Option<String>,
    },
    /// Show players and decks ranked by rating
    Standings {
        /// Database file path (optional, defaults to gamenight_elo.db)
        #[arg(short, long)]
        database: Option<String>,
    },
}
