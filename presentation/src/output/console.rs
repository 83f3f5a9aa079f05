//! Console output formatter for game data

use crate::surface::{CardView, TerminalSurface};
use colored::Colorize;
use serde::Serialize;
use slapworld_domain::{
    Card, CardCategory, Country, CountryStat, PlayerName, target,
    util::{ellipsize, format_thousands},
};

const DESCRIPTION_WIDTH: usize = 72;

/// Formats stores, drawers and stats for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the drawer currently shown on `surface`
    pub fn format_drawer(surface: &TerminalSurface) -> String {
        let mut output = String::new();

        let title = surface.text(target::DRAWER_TITLE).unwrap_or_default();
        output.push_str(&Self::header(title));
        output.push('\n');

        if let Some(notice) = surface.notice() {
            output.push_str(&format!("\n{}\n", notice.dimmed()));
        }

        for card in surface.cards() {
            output.push('\n');
            output.push_str(&Self::format_card_view(&card));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format one rendered card
    pub fn format_card_view(card: &CardView) -> String {
        let category = CardCategory::from(card.category.as_str());
        let mut output = format!(
            "{} {}\n",
            format!("── {} ──", card.title).yellow().bold(),
            format!("[{}]", card.id).dimmed()
        );
        output.push_str(&format!(
            "  {} {}  {} {}\n",
            card.flag,
            card.country,
            category.icon(),
            category.as_str().cyan()
        ));
        if !card.description.is_empty() {
            output.push_str(&format!("  {}\n", ellipsize(&card.description, DESCRIPTION_WIDTH)));
        }
        output.push_str(&format!("  {} {}\n", "Image:".dimmed(), card.image));
        output.push_str(&format!("  {}\n", card.slaps.red()));
        output
    }

    /// Format a country listing
    pub fn format_countries(countries: &[&Country]) -> String {
        let mut output = Self::section_header(&format!("Countries ({})", countries.len()));
        for country in countries {
            output.push_str(&format!(
                "{} {} {:<24} {}\n",
                country.flag,
                format!("{:<3}", country.iso).cyan().bold(),
                country.name,
                country.region.dimmed()
            ));
        }
        output
    }

    /// Format a card listing
    pub fn format_cards(cards: &[&Card]) -> String {
        let mut output = Self::section_header(&format!("Cards ({})", cards.len()));
        for card in cards {
            let category = card.category_kind();
            output.push_str(&format!(
                "{} {:<10} {} {:<28} {} {}\n",
                card.country.flag,
                card.id.cyan(),
                category.icon(),
                ellipsize(&card.title, 28),
                category.as_str().dimmed(),
                format!("🔥 {}", format_thousands(card.slap_count)).red()
            ));
        }
        output
    }

    /// Format the category list with badges
    pub fn format_categories(categories: &[&str]) -> String {
        let mut output = Self::section_header(&format!("Categories ({})", categories.len()));
        for category in categories {
            let kind = CardCategory::from(*category);
            output.push_str(&format!("  {} {}\n", kind.icon(), category));
        }
        output
    }

    /// Format one stat of one country
    pub fn format_stat(country: &Country, stat: CountryStat) -> String {
        format!(
            "{} {}: {}",
            country.label().bold(),
            stat.as_str().cyan(),
            Self::stat_value(stat, country.stat(stat))
        )
    }

    /// Format every configured stat of a country
    pub fn format_stats(country: &Country, stats: &[CountryStat]) -> String {
        let mut output = Self::section_header(&country.label());
        if !country.capital.is_empty() {
            output.push_str(&format!("  {:<12} {}\n", "capital".cyan(), country.capital));
        }
        for stat in stats {
            output.push_str(&format!(
                "  {:<12} {}\n",
                stat.as_str().cyan(),
                Self::stat_value(*stat, country.stat(*stat))
            ));
        }
        output
    }

    pub fn format_player(player: &PlayerName) -> String {
        format!("{} {}", "Player:".cyan().bold(), player)
    }

    /// Format any serializable value as JSON
    pub fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Human-readable stat value with its unit
    pub fn stat_value(stat: CountryStat, value: f64) -> String {
        let number = if value.fract() == 0.0 && value >= 0.0 {
            format_thousands(value as u64)
        } else {
            format!("{:.2}", value)
        };
        match stat {
            CountryStat::Population => number,
            CountryStat::Gdp => format!("${} B", number),
            CountryStat::Area => format!("{} km²", number),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slapworld_application::{CardStore, CountryStore, GameConfig, GameController, UiEvent};
    use slapworld_domain::CardCountry;
    use std::sync::Arc;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_stat_value_units() {
        assert_eq!(
            ConsoleFormatter::stat_value(CountryStat::Population, 67_390_000.0),
            "67,390,000"
        );
        assert_eq!(ConsoleFormatter::stat_value(CountryStat::Gdp, 2715.52), "$2715.52 B");
        assert_eq!(ConsoleFormatter::stat_value(CountryStat::Area, 551_695.0), "551,695 km²");
        assert_eq!(ConsoleFormatter::stat_value(CountryStat::Gdp, 0.0), "$0 B");
    }

    #[test]
    fn test_format_stat() {
        plain();
        let country = Country::new("France", "🇫🇷", "FR").with_stats(67_390_000.0, 2715.52, 551_695.0);
        assert_eq!(
            ConsoleFormatter::format_stat(&country, CountryStat::Area),
            "🇫🇷 France area: 551,695 km²"
        );
    }

    #[test]
    fn test_format_countries_lists_each() {
        plain();
        let us = Country::new("United States", "🇺🇸", "US").with_region("Americas");
        let fr = Country::new("France", "🇫🇷", "FR").with_region("Europe");

        let output = ConsoleFormatter::format_countries(&[&us, &fr]);

        assert!(output.contains("Countries (2)"));
        assert!(output.contains("United States"));
        assert!(output.contains("Europe"));
    }

    #[test]
    fn test_format_drawer_with_cards() {
        plain();
        let countries = CountryStore::from_countries(vec![Country::new("Germany", "🇩🇪", "DE")]);
        let cards = CardStore::from_cards(vec![
            Card::new("de-001", CardCountry::new("Germany", "🇩🇪", "DE"), "Brandenburg Gate", "landmark")
                .with_description("Neoclassical monument in Berlin")
                .with_slap_count(4200),
        ]);
        let mut controller =
            GameController::new(Arc::new(countries), Arc::new(cards), GameConfig::default());
        let mut surface = TerminalSurface::new();
        controller.initialize(&mut surface);
        controller.handle(&mut surface, UiEvent::CountrySelected("DE".into()));

        let output = ConsoleFormatter::format_drawer(&surface);

        assert!(output.contains("🇩🇪 Germany"));
        assert!(output.contains("Brandenburg Gate"));
        assert!(output.contains("Neoclassical monument in Berlin"));
        assert!(output.contains("🔥 4,200 slaps"));
        assert!(output.contains("via.placeholder.com"));
    }

    #[test]
    fn test_format_categories_has_badges() {
        plain();
        let output = ConsoleFormatter::format_categories(&["person", "street art"]);
        assert!(output.contains("👤 person"));
        assert!(output.contains("• street art"));
    }

    #[test]
    fn test_format_json() {
        let country = Country::new("Japan", "🇯🇵", "JP");
        let json = ConsoleFormatter::format_json(&[&country]);
        assert!(json.contains("\"iso\": \"JP\""));
    }
}
