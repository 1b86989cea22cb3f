// Row-to-structure transforms, one per source table.
//
// Every parser deserializes rows into a private raw type whose serde
// attributes enumerate the column names, which ones are required, and the
// default used when a column is absent. The raw rows are then reshaped into
// keyed lookups.

pub mod awards;
pub mod coaches;
pub mod players;
pub mod series;
pub mod stints;
pub mod teams;

pub use awards::{parse_awards_players, AwardRecord, AwardsByPlayer};
pub use coaches::{parse_coaches, CoachStint, CoachesById};
pub use players::{parse_players, PlayerBio, PlayersById};
pub use series::{parse_series_post, SeriesByYear, SeriesResult};
pub use stints::{parse_players_teams, PlayerStint, StintStats, StintTable};
pub use teams::{
    parse_teams, parse_teams_post, TeamPostseason, TeamSeason, TeamsByYear, TeamsPostByYear,
};

use crate::table::Table;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{table}, row {row}: {source}")]
pub struct ParseError {
    pub table: &'static str,
    /// 1-based data row number (the header is not counted).
    pub row: usize,
    #[source]
    pub source: csv::Error,
}

/// Deserialize every row of `table`, failing on the first bad row.
pub(crate) fn read_rows<T: DeserializeOwned>(
    table: &Table,
    name: &'static str,
) -> Result<Vec<T>, ParseError> {
    table
        .deserialize::<T>()
        .enumerate()
        .map(|(i, result)| {
            result.map_err(|e| ParseError {
                table: name,
                row: i + 1,
                source: e,
            })
        })
        .collect()
}

/// Per-game rate of `total` over `games`. Zero games yields exactly zero.
pub fn per_game(total: f64, games: u32) -> f64 {
    if games == 0 {
        0.0
    } else {
        total / f64::from(games)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_game_divides_by_games() {
        assert!((per_game(800.0, 20) - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn per_game_zero_games_is_zero() {
        assert_eq!(per_game(800.0, 0), 0.0);
        assert_eq!(per_game(-15.0, 0), 0.0);
    }

    #[test]
    fn parse_error_reports_table_and_row() {
        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Row {
            year: u32,
        }

        let table = Table::from_reader("year\n1\nthree".as_bytes()).unwrap();
        let err = read_rows::<Row>(&table, "teams").unwrap_err();
        assert_eq!(err.table, "teams");
        assert_eq!(err.row, 2);
        assert!(err.to_string().starts_with("teams, row 2:"));
    }
}
