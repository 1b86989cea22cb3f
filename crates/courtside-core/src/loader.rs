// Loads the seven league tables from a base directory and runs every parser
// over the tables that were found.

use crate::parse::{
    parse_awards_players, parse_coaches, parse_players, parse_players_teams, parse_series_post,
    parse_teams, parse_teams_post, AwardsByPlayer, CoachesById, ParseError, PlayersById,
    SeriesByYear, StintTable, TeamsByYear, TeamsPostByYear,
};
use crate::table::{Table, TableError};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

// ---------------------------------------------------------------------------
// Table identity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TableKind {
    AwardsPlayers,
    Coaches,
    Players,
    PlayersTeams,
    SeriesPost,
    Teams,
    TeamsPost,
}

impl TableKind {
    pub const ALL: [TableKind; 7] = [
        TableKind::AwardsPlayers,
        TableKind::Coaches,
        TableKind::Players,
        TableKind::PlayersTeams,
        TableKind::SeriesPost,
        TableKind::Teams,
        TableKind::TeamsPost,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TableKind::AwardsPlayers => "awards_players",
            TableKind::Coaches => "coaches",
            TableKind::Players => "players",
            TableKind::PlayersTeams => "players_teams",
            TableKind::SeriesPost => "series_post",
            TableKind::Teams => "teams",
            TableKind::TeamsPost => "teams_post",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            TableKind::AwardsPlayers => "awards_players.csv",
            TableKind::Coaches => "coaches.csv",
            TableKind::Players => "players.csv",
            TableKind::PlayersTeams => "players_teams.csv",
            TableKind::SeriesPost => "series_post.csv",
            TableKind::Teams => "teams.csv",
            TableKind::TeamsPost => "teams_post.csv",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Loaded data
// ---------------------------------------------------------------------------

/// The tables that were present on disk, after header trimming and filling.
#[derive(Debug, Clone, Default)]
pub struct RawTables {
    tables: BTreeMap<TableKind, Table>,
}

impl RawTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: TableKind, table: Table) {
        self.tables.insert(kind, table);
    }

    pub fn get(&self, kind: TableKind) -> Option<&Table> {
        self.tables.get(&kind)
    }

    pub fn contains(&self, kind: TableKind) -> bool {
        self.tables.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TableKind, &Table)> {
        self.tables.iter().map(|(kind, table)| (*kind, table))
    }
}

/// Structured views over the raw tables. A view is `None` exactly when its
/// source table was absent.
#[derive(Debug, Clone, Default)]
pub struct League {
    pub players: Option<PlayersById>,
    pub teams: Option<TeamsByYear>,
    pub players_teams: Option<StintTable>,
    pub series_post: Option<SeriesByYear>,
    pub coaches: Option<CoachesById>,
    pub awards_players: Option<AwardsByPlayer>,
    pub teams_post: Option<TeamsPostByYear>,
}

#[derive(Debug, Clone)]
pub struct LeagueData {
    pub raw: RawTables,
    pub structured: League,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Read every known table under `base`. Absent files are skipped; any other
/// read failure is returned.
pub fn load_tables(base: &Path) -> Result<RawTables, TableError> {
    let mut raw = RawTables::new();
    for kind in TableKind::ALL {
        let path = base.join(kind.file_name());
        if !path.exists() {
            warn!(table = %kind, path = %path.display(), "missing file, skipping table");
            continue;
        }
        let table = Table::from_path(&path)?;
        info!(table = %kind, records = table.len(), "loaded table");
        raw.insert(kind, table);
    }
    Ok(raw)
}

/// Run each parser over its table, if present.
pub fn parse_all(raw: &RawTables) -> Result<League, ParseError> {
    let league = League {
        players: raw.get(TableKind::Players).map(parse_players).transpose()?,
        teams: raw.get(TableKind::Teams).map(parse_teams).transpose()?,
        players_teams: raw
            .get(TableKind::PlayersTeams)
            .map(parse_players_teams)
            .transpose()?,
        series_post: raw
            .get(TableKind::SeriesPost)
            .map(parse_series_post)
            .transpose()?,
        coaches: raw.get(TableKind::Coaches).map(parse_coaches).transpose()?,
        awards_players: raw
            .get(TableKind::AwardsPlayers)
            .map(parse_awards_players)
            .transpose()?,
        teams_post: raw
            .get(TableKind::TeamsPost)
            .map(parse_teams_post)
            .transpose()?,
    };
    debug!(
        players = league.players.as_ref().map_or(0, |p| p.len()),
        stints = league.players_teams.as_ref().map_or(0, |s| s.len()),
        "parsed league tables"
    );
    Ok(league)
}

/// Load every table under `base` and parse it.
pub fn parse_all_data(base: &Path) -> Result<LeagueData, LoadError> {
    let raw = load_tables(base)?;
    let structured = parse_all(&raw)?;
    Ok(LeagueData { raw, structured })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_follow_table_names() {
        for kind in TableKind::ALL {
            assert_eq!(kind.file_name(), format!("{}.csv", kind.name()));
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn parse_all_on_empty_tables_yields_no_views() {
        let league = parse_all(&RawTables::new()).unwrap();
        assert!(league.players.is_none());
        assert!(league.teams.is_none());
        assert!(league.players_teams.is_none());
        assert!(league.series_post.is_none());
        assert!(league.coaches.is_none());
        assert!(league.awards_players.is_none());
        assert!(league.teams_post.is_none());
    }

    #[test]
    fn parse_all_only_fills_present_tables() {
        let mut raw = RawTables::new();
        raw.insert(
            TableKind::Teams,
            Table::from_reader("year,tmID,o_pts,GP\n1,ATL,100,2".as_bytes()).unwrap(),
        );
        let league = parse_all(&raw).unwrap();
        let teams = league.teams.unwrap();
        assert!((teams[&1]["ATL"].o_ppg - 50.0).abs() < f64::EPSILON);
        assert!(league.teams_post.is_none());
    }

    #[test]
    fn parse_failure_names_the_table() {
        let mut raw = RawTables::new();
        raw.insert(
            TableKind::SeriesPost,
            Table::from_reader("year,round\nx,F".as_bytes()).unwrap(),
        );
        let err = parse_all(&raw).unwrap_err();
        assert_eq!(err.table, "series_post");
    }

    #[test]
    fn empty_directory_loads_nothing() {
        let tmp = std::env::temp_dir().join("courtside_loader_empty_dir");
        let _ = std::fs::remove_dir_all(&tmp);
        std::fs::create_dir_all(&tmp).unwrap();

        let data = parse_all_data(&tmp).unwrap();
        assert!(data.raw.is_empty());
        assert!(data.structured.teams.is_none());

        let _ = std::fs::remove_dir_all(&tmp);
    }
}
