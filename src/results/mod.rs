mod table;

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use tracing::debug;

use crate::error::StoreError;

pub use table::{FINALS, HISTORICAL_NAMES};

/// One World Cup final
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchRecord {
    pub year: i32,
    pub winner: String,
    pub runner_up: String,
}

impl MatchRecord {
    pub fn new(year: i32, winner: &str, runner_up: &str) -> Self {
        Self {
            year,
            winner: winner.to_string(),
            runner_up: runner_up.to_string(),
        }
    }
}

/// One row of the map dataset. Field names follow the
/// `Country`/`Wins` columns the choropleth is keyed on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CountryWins {
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Wins")]
    pub wins: u32,
}

/// Rewrite a historical team name to its present-day country.
/// Names without a mapping pass through unchanged.
pub fn normalize_country(name: &str) -> &str {
    HISTORICAL_NAMES
        .iter()
        .find(|(historical, _)| *historical == name)
        .map(|(_, current)| *current)
        .unwrap_or(name)
}

/// Immutable results table plus the aggregates derived from it.
/// Built once at startup and shared by reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsStore {
    records: Vec<MatchRecord>,
    /// Record index keyed by year
    by_year: HashMap<i32, usize>,
    /// Winner name -> number of titles (sorted by name)
    wins: BTreeMap<String, u32>,
}

impl ResultsStore {
    /// Load the embedded finals table
    pub fn load() -> Result<Self, StoreError> {
        let records = FINALS
            .iter()
            .map(|&(year, winner, runner_up)| MatchRecord::new(year, winner, runner_up))
            .collect();
        Self::from_records(records)
    }

    /// Normalize, validate and aggregate a list of finals
    pub fn from_records(records: Vec<MatchRecord>) -> Result<Self, StoreError> {
        let mut normalized = Vec::with_capacity(records.len());
        let mut by_year = HashMap::with_capacity(records.len());
        let mut wins: BTreeMap<String, u32> = BTreeMap::new();

        for record in records {
            let winner = normalize_country(record.winner.trim()).to_string();
            let runner_up = normalize_country(record.runner_up.trim()).to_string();

            if winner.is_empty() || runner_up.is_empty() {
                return Err(StoreError::EmptyName { year: record.year });
            }
            if winner == runner_up {
                return Err(StoreError::SameFinalists {
                    year: record.year,
                    country: winner,
                });
            }
            if by_year.insert(record.year, normalized.len()).is_some() {
                return Err(StoreError::DuplicateYear { year: record.year });
            }

            *wins.entry(winner.clone()).or_insert(0) += 1;
            normalized.push(MatchRecord {
                year: record.year,
                winner,
                runner_up,
            });
        }

        debug!(
            finals = normalized.len(),
            countries = wins.len(),
            "results table loaded"
        );

        Ok(Self {
            records: normalized,
            by_year,
            wins,
        })
    }

    /// Finals in table order
    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn total_finals(&self) -> usize {
        self.records.len()
    }

    /// Years with a final, ascending
    pub fn all_years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.by_year.keys().copied().collect();
        years.sort_unstable();
        years
    }

    /// Countries with at least one title, ascending
    pub fn all_countries(&self) -> Vec<String> {
        self.wins.keys().cloned().collect()
    }

    /// Per-country title counts, keyed by canonical name
    pub fn country_wins(&self) -> &BTreeMap<String, u32> {
        &self.wins
    }

    pub fn wins(&self, country: &str) -> Option<u32> {
        self.wins.get(country).copied()
    }

    pub fn final_of(&self, year: i32) -> Option<&MatchRecord> {
        self.by_year.get(&year).map(|&idx| &self.records[idx])
    }

    /// Finals played by a country, won or lost
    pub fn appearances(&self, country: &str) -> usize {
        self.records
            .iter()
            .filter(|r| r.winner == country || r.runner_up == country)
            .count()
    }

    /// Rows for the choropleth: most titles first, ties by name
    pub fn map_dataset(&self) -> Vec<CountryWins> {
        let mut rows: Vec<CountryWins> = self
            .wins
            .iter()
            .map(|(country, &wins)| CountryWins {
                country: country.clone(),
                wins,
            })
            .collect();
        rows.sort_by(|a, b| b.wins.cmp(&a.wins).then_with(|| a.country.cmp(&b.country)));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_embedded_table() {
        let store = ResultsStore::load().unwrap();
        assert_eq!(store.total_finals(), 22);
        assert_eq!(store.all_years().first(), Some(&1930));
        assert_eq!(store.all_years().last(), Some(&2022));
    }

    #[test]
    fn test_war_years_missing() {
        let store = ResultsStore::load().unwrap();
        let years = store.all_years();
        assert!(!years.contains(&1942));
        assert!(!years.contains(&1946));
    }

    #[test]
    fn test_historical_names_merged() {
        let store = ResultsStore::load().unwrap();
        assert_eq!(store.wins("Germany"), Some(4));
        assert_eq!(store.wins("West Germany"), None);
        assert_eq!(store.wins("United Kingdom"), Some(1));
        assert_eq!(store.wins("England"), None);

        let runner_ups: Vec<&str> = store.records().iter().map(|r| r.runner_up.as_str()).collect();
        assert!(runner_ups.contains(&"Czech Republic"));
        assert!(!runner_ups.contains(&"Czechoslovakia"));
        assert!(!runner_ups.contains(&"West Germany"));
    }

    #[test]
    fn test_wins_sum_to_finals() {
        let store = ResultsStore::load().unwrap();
        let total: u32 = store.country_wins().values().sum();
        assert_eq!(total as usize, store.total_finals());
    }

    #[test]
    fn test_countries_sorted() {
        let store = ResultsStore::load().unwrap();
        let countries = store.all_countries();
        assert_eq!(
            countries,
            vec![
                "Argentina",
                "Brazil",
                "France",
                "Germany",
                "Italy",
                "Spain",
                "United Kingdom",
                "Uruguay",
            ]
        );
    }

    #[test]
    fn test_map_dataset_order() {
        let store = ResultsStore::load().unwrap();
        let rows = store.map_dataset();
        assert_eq!(rows[0].country, "Brazil");
        assert_eq!(rows[0].wins, 5);
        assert_eq!(rows[1].country, "Germany");
        assert_eq!(rows[2].country, "Italy");
        assert_eq!(rows.last().map(|r| r.country.as_str()), Some("United Kingdom"));
    }

    #[test]
    fn test_appearances() {
        let store = ResultsStore::load().unwrap();
        // 4 titles plus 4 lost finals (1966, 1982, 1986, 2002)
        assert_eq!(store.appearances("Germany"), 8);
        assert_eq!(store.appearances("Croatia"), 1);
        assert_eq!(store.appearances("Atlantis"), 0);
    }

    #[test]
    fn test_duplicate_year_rejected() {
        let records = vec![
            MatchRecord::new(1930, "Uruguay", "Argentina"),
            MatchRecord::new(1930, "Argentina", "Uruguay"),
        ];
        assert_eq!(
            ResultsStore::from_records(records),
            Err(StoreError::DuplicateYear { year: 1930 })
        );
    }

    #[test]
    fn test_same_finalists_after_normalization_rejected() {
        let records = vec![MatchRecord::new(1990, "West Germany", "Germany")];
        assert!(matches!(
            ResultsStore::from_records(records),
            Err(StoreError::SameFinalists { year: 1990, .. })
        ));
    }

    #[test]
    fn test_empty_name_rejected() {
        let records = vec![MatchRecord::new(2030, "  ", "Spain")];
        assert_eq!(
            ResultsStore::from_records(records),
            Err(StoreError::EmptyName { year: 2030 })
        );
    }

    #[test]
    fn test_load_is_deterministic() {
        let a = ResultsStore::load().unwrap();
        let b = ResultsStore::load().unwrap();
        assert_eq!(a.records(), b.records());
        assert_eq!(a.country_wins(), b.country_wins());
        assert_eq!(a.map_dataset(), b.map_dataset());
    }
}
