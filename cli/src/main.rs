//! CLI entrypoint for Slap The World Around
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use slapworld_application::{
    CardStore, CountryStore, EventOutcome, GameConfig, GameController, LoadDatasetsInput,
    LoadDatasetsUseCase, PlayerNameUseCase, UiEvent,
};
use slapworld_domain::{Card, Country, CountryStat, PlayerName};
use slapworld_infrastructure::{ConfigLoader, InMemorySessionStorage, open_source};
use slapworld_presentation::{
    Cli, Command, ConsoleFormatter, GameApp, LoadingSpinner, OutputFormat, TerminalSurface,
};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let command = cli.command();
    let _log_guard = init_logging(cli.verbose, command == Command::Play);

    info!("Starting Slap The World Around");

    // === Configuration ===
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    file_config.validate()?;
    let config = file_config.to_game_config();
    let data_base = cli.data_dir.clone().unwrap_or_else(|| file_config.data.base.clone());

    // The player name lives in the session, not in the datasets
    if command == Command::Player {
        let player = resolve_player();
        print_output(cli.output, &player, || ConsoleFormatter::format_player(&player));
        return Ok(());
    }

    // === Dependency Injection ===
    let source = open_source(&data_base)?;
    let use_case = LoadDatasetsUseCase::new(source);

    let spinner = LoadingSpinner::start(
        format!("Loading datasets from {}", data_base),
        !cli.quiet && cli.output == OutputFormat::Text,
    );
    let loaded = match use_case.execute(LoadDatasetsInput::from_config(&config)).await {
        Ok(loaded) => {
            spinner.finish(format!(
                "Loaded {} countries and {} cards",
                loaded.countries.len(),
                loaded.cards.len()
            ));
            loaded
        }
        Err(e) => {
            spinner.fail("Failed to load datasets");
            error!("Initialization failed: {}", e);
            return Err(e.into());
        }
    };
    let countries = Arc::new(loaded.countries);
    let cards = Arc::new(loaded.cards);

    match command {
        Command::Play => {
            let player = resolve_player();
            let controller = GameController::new(countries, cards, config);
            let mut app = GameApp::new(controller, &player);
            app.run().await?;
        }
        Command::Show { iso } => show_drawer(countries, cards, config, &iso, cli.output)?,
        Command::Countries { region } => {
            let list: Vec<&Country> = match &region {
                Some(region) => countries.by_region(region),
                None => countries.all().iter().collect(),
            };
            print_output(cli.output, &list, || ConsoleFormatter::format_countries(&list));
        }
        Command::Cards { country, category } => {
            let list = filter_cards(&cards, country.as_deref(), category.as_deref());
            print_output(cli.output, &list, || ConsoleFormatter::format_cards(&list));
        }
        Command::RandomCountries { count } => {
            let list = countries.random(count.unwrap_or(config.max_countries));
            print_output(cli.output, &list, || {
                list.iter()
                    .map(|c| ConsoleFormatter::format_stats(c, &config.stats))
                    .collect::<String>()
            });
        }
        Command::RandomCards { count } => {
            let list = cards.random(count);
            print_output(cli.output, &list, || ConsoleFormatter::format_cards(&list));
        }
        Command::Categories => {
            let list = cards.available_categories();
            print_output(cli.output, &list, || ConsoleFormatter::format_categories(&list));
        }
        Command::Stat { iso, stat } => {
            print_stat(&countries, &config, &iso, stat.as_deref(), cli.output)?
        }
        // Answered before the datasets were loaded
        Command::Player => {}
    }

    Ok(())
}

/// Initialize logging based on verbosity level.
///
/// The interactive UI owns the terminal, so in play mode logs go to a
/// daily file instead of stderr.
fn init_logging(verbose: u8, to_file: bool) -> Option<WorkerGuard> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    if to_file {
        let appender = tracing_appender::rolling::daily(log_dir(), "slap-the-world.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .init();
        Some(guard)
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        None
    }
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("slap-the-world")
        .join("logs")
}

fn resolve_player() -> PlayerName {
    let storage = Arc::new(InMemorySessionStorage::new());
    PlayerNameUseCase::new(storage).resolve()
}

fn print_output<T, F>(format: OutputFormat, value: &T, text: F)
where
    T: serde::Serialize + ?Sized,
    F: FnOnce() -> String,
{
    match format {
        OutputFormat::Text => println!("{}", text()),
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(value)),
    }
}

/// Cards matching both optional filters, in dataset order
fn filter_cards<'a>(
    cards: &'a CardStore,
    country: Option<&str>,
    category: Option<&str>,
) -> Vec<&'a Card> {
    fn kept(filter: &Option<Vec<&Card>>, card: &Card) -> bool {
        filter
            .as_ref()
            .is_none_or(|list| list.iter().any(|m| std::ptr::eq(*m, card)))
    }

    let by_country = country.map(|iso| cards.by_country(iso));
    let by_category = category.map(|cat| cards.by_category(cat));
    cards
        .all()
        .iter()
        .filter(|c| kept(&by_country, c) && kept(&by_category, c))
        .collect()
}

fn show_drawer(
    countries: Arc<CountryStore>,
    cards: Arc<CardStore>,
    config: GameConfig,
    iso: &str,
    format: OutputFormat,
) -> Result<()> {
    let mut surface = TerminalSurface::with_card_template(&config.card_template_id);
    let mut controller = GameController::new(countries, cards, config);
    controller.initialize(&mut surface);

    match controller.handle(&mut surface, UiEvent::CountrySelected(iso.to_string())) {
        EventOutcome::Selected(_) => {
            let views = surface.cards();
            print_output(format, &views, || ConsoleFormatter::format_drawer(&surface));
            Ok(())
        }
        _ => bail!("Unknown country: {}", iso),
    }
}

fn print_stat(
    countries: &CountryStore,
    config: &GameConfig,
    iso: &str,
    stat: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let Some(country) = countries.by_iso(iso) else {
        bail!("Unknown country: {}", iso);
    };

    let stats: Vec<CountryStat> = match stat {
        Some(name) => vec![name.parse()?],
        None => config.stats.clone(),
    };

    let values: BTreeMap<&str, f64> = stats
        .iter()
        .map(|s| (s.as_str(), country.stat(*s)))
        .collect();

    print_output(format, &values, || match stats.as_slice() {
        [single] => ConsoleFormatter::format_stat(country, *single),
        _ => ConsoleFormatter::format_stats(country, &stats),
    });
    Ok(())
}
