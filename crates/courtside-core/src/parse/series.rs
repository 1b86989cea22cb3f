// series_post.csv -> playoff series results grouped by year.

use super::{read_rows, ParseError};
use crate::table::Table;
use serde::Deserialize;
use std::collections::BTreeMap;

pub type SeriesByYear = BTreeMap<u32, Vec<SeriesResult>>;

/// Outcome of one playoff series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesResult {
    /// Round code: `FR` (first round), `CF` (conference finals), `F` (finals).
    pub round: String,
    pub series: String,
    pub winner: String,
    pub loser: String,
    /// Games won by the winner.
    pub wins: u32,
    /// Games won by the loser.
    pub losses: u32,
}

impl SeriesResult {
    pub fn is_final(&self) -> bool {
        self.round == "F"
    }
}

/// series_post.csv row. The dataset names the game counts `W` and `L`.
#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
struct RawSeries {
    year: u32,
    round: String,
    #[serde(default)]
    series: String,
    tmIDWinner: String,
    tmIDLoser: String,
    #[serde(alias = "W")]
    wins: u32,
    #[serde(alias = "L")]
    losses: u32,
}

/// Parse the series_post table into year -> series results in source order.
pub fn parse_series_post(table: &Table) -> Result<SeriesByYear, ParseError> {
    let rows: Vec<RawSeries> = read_rows(table, "series_post")?;
    let mut by_year: SeriesByYear = BTreeMap::new();
    for raw in rows {
        by_year.entry(raw.year).or_default().push(SeriesResult {
            round: raw.round,
            series: raw.series,
            winner: raw.tmIDWinner,
            loser: raw.tmIDLoser,
            wins: raw.wins,
            losses: raw.losses,
        });
    }
    Ok(by_year)
}
