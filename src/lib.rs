//! FIFA World Cup finals: results table, lookups and a terminal
//! choropleth dashboard.

pub mod app;
pub mod braille;
pub mod config;
pub mod data;
pub mod dropdown;
pub mod error;
pub mod logging;
pub mod map;
pub mod query;
pub mod results;
pub mod ui;

pub use error::{QueryError, StoreError};
pub use query::{FinalResult, QueryService, Refresh};
pub use results::{CountryWins, MatchRecord, ResultsStore};
