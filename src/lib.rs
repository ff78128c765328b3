pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod prompt;
pub mod rating;
pub mod services;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::recording::RecordingService;
use crate::services::standings::StandingsService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_record(database: Option<&str>) -> Result<()> {
    let config = build_config(database);
    let service = RecordingService::new(config)?;
    service.run()
}

pub fn handle_standings(database: Option<&str>) -> Result<()> {
    let config = build_config(database);
    let service = StandingsService::new(config)?;
    service.run()
}

fn build_config(database: Option<&str>) -> AppConfig {
    let mut config = AppConfig::new();
    if let Some(path) = database_override(database) {
        config.storage.database_path = path;
    }
    config
}

fn database_override(arg: Option<&str>) -> Option<String> {
    arg.map(str::to_string)
        .or_else(|| std::env::var("DATABASE_PATH").ok())
}
