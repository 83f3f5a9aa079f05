//! Comparable country stats

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A numeric stat two countries can be compared on (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountryStat {
    Population,
    Gdp,
    Area,
}

impl CountryStat {
    /// Every stat, in display order
    pub const ALL: [CountryStat; 3] = [CountryStat::Population, CountryStat::Gdp, CountryStat::Area];

    pub fn as_str(&self) -> &'static str {
        match self {
            CountryStat::Population => "population",
            CountryStat::Gdp => "gdp",
            CountryStat::Area => "area",
        }
    }
}

impl std::fmt::Display for CountryStat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CountryStat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "population" => Ok(CountryStat::Population),
            "gdp" => Ok(CountryStat::Gdp),
            "area" => Ok(CountryStat::Area),
            _ => Err(DomainError::UnknownStat(s.to_string())),
        }
    }
}
