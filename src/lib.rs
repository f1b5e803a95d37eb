extern crate clap;

pub mod auth;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod seed;
pub mod services;

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches};

pub use config::SeedSettings;
pub use seed::{seed, seed_database, AccountOutcome, SeedContext, SeedReport};

const DEFAULT_DATABASE: &str = "carparts.db";

/// Options for the `carparts-seed` binary
#[derive(Debug, Clone, PartialEq)]
pub struct CliOptions {
    pub database: String,
    pub settings_path: Option<String>,
    pub json: bool,
}

impl CliOptions {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let database = matches
            .get_one::<String>("database")
            .map(|s| s.to_string())
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        Self {
            database,
            settings_path: matches.get_one::<String>("config").cloned(),
            json: matches.get_flag("json"),
        }
    }

    pub fn settings(&self) -> Result<SeedSettings> {
        match &self.settings_path {
            Some(path) => SeedSettings::from_yaml_file(path),
            None => Ok(SeedSettings::default()),
        }
    }
}

pub fn cli() -> clap::Command {
    clap::Command::new("carparts-seed")
        .about("Seed the marketplace database with roles, accounts, categories and listings")
        .arg(
            Arg::new("database")
                .short('d')
                .long("database")
                .value_name("DATABASE")
                .help("Path to SQLite database file, or :memory:")
                .default_value(DEFAULT_DATABASE),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("CONFIG")
                .help("Path to a YAML file overriding the seed settings"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the seed report as JSON"),
        )
}

/// Connect, seed, and return the report
pub async fn run(options: &CliOptions) -> Result<SeedReport> {
    let settings = options.settings()?;
    let pool = db::connect(&options.database).await?;
    let report = seed_database(&pool, &settings).await;
    pool.close().await;
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let matches = cli().try_get_matches_from(["carparts-seed"]).unwrap();
        let options = CliOptions::from_matches(&matches);

        assert_eq!(options.database, "carparts.db");
        assert_eq!(options.settings_path, None);
        assert!(!options.json);
    }

    #[test]
    fn test_cli_flags() {
        let matches = cli()
            .try_get_matches_from(["carparts-seed", "-d", ":memory:", "-c", "seed.yml", "--json"])
            .unwrap();
        let options = CliOptions::from_matches(&matches);

        assert_eq!(options.database, ":memory:");
        assert_eq!(options.settings_path.as_deref(), Some("seed.yml"));
        assert!(options.json);
    }

    #[test]
    fn test_missing_settings_file_is_an_error() {
        let options = CliOptions {
            database: ":memory:".to_string(),
            settings_path: Some("/nonexistent/seed.yml".to_string()),
            json: false,
        };
        assert!(options.settings().is_err());
    }
}
