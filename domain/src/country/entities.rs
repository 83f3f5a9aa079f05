//! Country entity as found in `countries.json`

use super::stat::CountryStat;
use serde::{Deserialize, Serialize};

/// A playable country.
///
/// Records are immutable once loaded. Stat fields missing from the
/// dataset deserialize as `None` and read as zero through
/// [`Country::stat`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// Display name, unique within the dataset
    pub name: String,
    /// Flag glyph (emoji)
    #[serde(default)]
    pub flag: String,
    /// Two-letter ISO code, matched case-insensitively
    pub iso: String,
    #[serde(default)]
    pub population: Option<f64>,
    /// GDP in billions USD
    #[serde(default)]
    pub gdp: Option<f64>,
    /// Area in square kilometers
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub capital: String,
    #[serde(default)]
    pub region: String,
}

impl Country {
    pub fn new(name: impl Into<String>, flag: impl Into<String>, iso: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flag: flag.into(),
            iso: iso.into(),
            population: None,
            gdp: None,
            area: None,
            capital: String::new(),
            region: String::new(),
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_capital(mut self, capital: impl Into<String>) -> Self {
        self.capital = capital.into();
        self
    }

    pub fn with_stats(mut self, population: f64, gdp: f64, area: f64) -> Self {
        self.population = Some(population);
        self.gdp = Some(gdp);
        self.area = Some(area);
        self
    }

    /// Value of a stat, zero when the dataset left it out
    pub fn stat(&self, stat: CountryStat) -> f64 {
        let value = match stat {
            CountryStat::Population => self.population,
            CountryStat::Gdp => self.gdp,
            CountryStat::Area => self.area,
        };
        value.unwrap_or(0.0)
    }

    /// Label used by pickers and drawer titles: `"{flag} {name}"`
    pub fn label(&self) -> String {
        if self.flag.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.flag, self.name)
        }
    }

    pub fn matches_iso(&self, iso: &str) -> bool {
        self.iso.eq_ignore_ascii_case(iso)
    }
}
