use crate::error::QueryError;
use crate::results::ResultsStore;

/// Winner and runner-up of one final
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinalResult {
    pub winner: String,
    pub runner_up: String,
}

/// Outcome of a selection handler: new output, or leave the previous one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Refresh<T> {
    Update(T),
    NoUpdate,
}

impl<T> Refresh<T> {
    /// Write the update into `slot`; `NoUpdate` keeps whatever is there.
    pub fn apply(self, slot: &mut Option<T>) -> bool {
        match self {
            Refresh::Update(value) => {
                *slot = Some(value);
                true
            }
            Refresh::NoUpdate => false,
        }
    }
}

/// Read-only lookups over a [`ResultsStore`]
#[derive(Clone, Copy)]
pub struct QueryService<'a> {
    store: &'a ResultsStore,
}

impl<'a> QueryService<'a> {
    pub fn new(store: &'a ResultsStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &'a ResultsStore {
        self.store
    }

    /// Titles won by `country` (exact, case-sensitive, present-day name)
    pub fn wins_for(&self, country: &str) -> Result<u32, QueryError> {
        self.store
            .wins(country)
            .ok_or_else(|| QueryError::UnknownCountry(country.to_string()))
    }

    /// Final played in `year`
    pub fn result_for(&self, year: i32) -> Result<FinalResult, QueryError> {
        self.store
            .final_of(year)
            .map(|record| FinalResult {
                winner: record.winner.clone(),
                runner_up: record.runner_up.clone(),
            })
            .ok_or(QueryError::UnknownYear(year))
    }

    /// Sentence for the country selector. Misses render the neutral message.
    pub fn describe_wins(&self, country: &str) -> String {
        match self.wins_for(country) {
            Ok(count) => wins_sentence(country, count),
            Err(err) => err.to_string(),
        }
    }

    /// Sentence for the year selector. Misses render the neutral message.
    pub fn describe_final(&self, year: i32) -> String {
        match self.result_for(year) {
            Ok(result) => final_sentence(year, &result),
            Err(err) => err.to_string(),
        }
    }

    /// Country selector changed. Blank means nothing selected; any other
    /// value is looked up exactly as given.
    pub fn on_country_selected(&self, selection: Option<&str>) -> Refresh<String> {
        match selection {
            Some(country) if !country.trim().is_empty() => Refresh::Update(self.describe_wins(country)),
            _ => Refresh::NoUpdate,
        }
    }

    /// Year selector changed
    pub fn on_year_selected(&self, selection: Option<i32>) -> Refresh<String> {
        match selection {
            Some(year) => Refresh::Update(self.describe_final(year)),
            None => Refresh::NoUpdate,
        }
    }
}

pub fn wins_sentence(country: &str, count: u32) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{country} has won the FIFA World Cup {count} time{plural}.")
}

pub fn final_sentence(year: i32, result: &FinalResult) -> String {
    format!(
        "In {year}, the winner was {} and the runner-up was {}.",
        result.winner, result.runner_up
    )
}
