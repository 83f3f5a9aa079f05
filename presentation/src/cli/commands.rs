//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for listing commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored, human-readable output
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for slap-the-world
#[derive(Parser, Debug)]
#[command(name = "slap-the-world")]
#[command(author, version, about = "Slap The World Around - pick a country, slap its cards")]
#[command(long_about = r#"
Slap The World Around loads a country dataset and a card dataset, then lets
you pick a country and browse (and slap) the cards tied to it.

Without a subcommand the interactive drawer UI starts.

Configuration files are loaded from (in priority order):
1. --config <path>          Explicit config file
2. SLAPWORLD_<SECTION>__<KEY> environment variables
3. ./slapworld.toml         Project-level config
4. ~/.config/slap-the-world/config.toml   Global config

Example:
  slap-the-world
  slap-the-world show JP
  slap-the-world cards --country us --category person
  slap-the-world --data-dir https://example.com/slap random-countries 3
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format for listing commands
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub output: OutputFormat,

    /// Directory or http(s) URL the datasets are read from
    #[arg(long, value_name = "DIR|URL", global = true)]
    pub data_dir: Option<String>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// The subcommand to run; the interactive UI when none was given
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play)
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the interactive drawer UI
    Play,

    /// Print the drawer of one country
    Show {
        /// ISO code of the country
        iso: String,
    },

    /// List countries
    Countries {
        /// Only countries of this region
        #[arg(long)]
        region: Option<String>,
    },

    /// List cards
    Cards {
        /// Only cards of this country (ISO code)
        #[arg(long)]
        country: Option<String>,

        /// Only cards of this category
        #[arg(long)]
        category: Option<String>,
    },

    /// Draw random countries (defaults to game.max_countries)
    RandomCountries {
        count: Option<usize>,
    },

    /// Draw random cards
    RandomCards {
        #[arg(default_value_t = 3)]
        count: usize,
    },

    /// List the card categories in dataset order
    Categories,

    /// Show one stat of a country, or every configured stat when omitted
    Stat {
        /// ISO code of the country
        iso: String,

        /// population, gdp or area
        stat: Option<String>,
    },

    /// Show this session's player name
    Player,
}
