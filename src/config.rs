//! Command line and environment configuration.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "worldcup-geo")]
#[command(version, about = "FIFA World Cup finals dashboard with a terminal choropleth map", long_about = None)]
pub struct Cli {
    /// Directory holding Natural Earth GeoJSON files
    #[arg(long, env = "WORLDCUP_GEO_DATA_DIR", default_value = "data", global = true)]
    pub data_dir: PathBuf,

    /// Log file used while the dashboard owns the terminal
    #[arg(long, env = "WORLDCUP_GEO_LOG_FILE", default_value = "worldcup-geo.log", global = true)]
    pub log_file: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Interactive dashboard (default)
    Dashboard,

    /// Titles won by a country; prints every winner when omitted
    Wins {
        /// Present-day country name, e.g. "Germany"
        country: Option<String>,
    },

    /// Winner and runner-up of the final played in YEAR
    Final {
        year: i32,
    },

    /// Years with a final
    Years,

    /// Countries with at least one title
    Countries,

    /// Country/Wins rows for the choropleth, as JSON
    MapData {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

impl Cli {
    /// Load `.env` files, then parse arguments
    pub fn load() -> Self {
        let _ = dotenvy::from_filename(".env.local");
        let _ = dotenvy::dotenv();
        Self::parse()
    }

    pub fn command_or_default(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Dashboard)
    }
}
