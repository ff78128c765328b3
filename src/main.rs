use anyhow::Result;

use gamenight_elo::cli::Command;
use gamenight_elo::{handle_record, handle_standings, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Record { database } => handle_record(database.as_deref()),
        Command::Standings { database } => handle_standings(database.as_deref()),
    }
}
