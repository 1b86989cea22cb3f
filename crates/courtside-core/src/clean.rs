// Column-pruning utilities for the raw tables. Dropping a column that is not
// present is a no-op.

use crate::loader::{RawTables, TableKind};
use crate::table::{Table, TableError};
use std::collections::HashSet;
use tracing::warn;

const PLAYERS_DROP: &[&str] = &["firstseason", "lastseason"];
const LEAGUE_DROP: &[&str] = &["lgID"];
const SERIES_POST_DROP: &[&str] = &["lgIDWinner", "lgIDLoser"];
const TEAMS_DROP: &[&str] = &["arena", "attend", "min", "seeded", "name"];

/// Drop the season-span columns and keep only players with at least one
/// stint in `players_teams`.
pub fn clean_players(players: &Table, players_teams: &Table) -> Result<Table, TableError> {
    let rostered: HashSet<&str> = players_teams.column("playerID")?.collect();
    players
        .drop_columns(PLAYERS_DROP)
        .retain_rows("bioID", |id| rostered.contains(id))
}

pub fn clean_players_teams(players_teams: &Table) -> Table {
    players_teams.drop_columns(LEAGUE_DROP)
}

pub fn clean_awards_players(awards_players: &Table) -> Table {
    awards_players.drop_columns(LEAGUE_DROP)
}

pub fn clean_coaches(coaches: &Table) -> Table {
    coaches.drop_columns(LEAGUE_DROP)
}

pub fn clean_teams_post(teams_post: &Table) -> Table {
    teams_post.drop_columns(LEAGUE_DROP)
}

pub fn clean_series_post(series_post: &Table) -> Table {
    series_post.drop_columns(SERIES_POST_DROP)
}

pub fn clean_teams(teams: &Table) -> Table {
    teams.drop_columns(TEAMS_DROP)
}

/// Apply the matching cleaner to every table that is present. Without a
/// players_teams table the roster is left unfiltered.
pub fn clean_all(raw: &RawTables) -> Result<RawTables, TableError> {
    let mut cleaned = RawTables::new();
    for (kind, table) in raw.iter() {
        let table = match kind {
            TableKind::Players => match raw.get(TableKind::PlayersTeams) {
                Some(players_teams) => clean_players(table, players_teams)?,
                None => {
                    warn!("players_teams absent, roster left unfiltered");
                    table.drop_columns(PLAYERS_DROP)
                }
            },
            TableKind::PlayersTeams => clean_players_teams(table),
            TableKind::AwardsPlayers => clean_awards_players(table),
            TableKind::Coaches => clean_coaches(table),
            TableKind::TeamsPost => clean_teams_post(table),
            TableKind::SeriesPost => clean_series_post(table),
            TableKind::Teams => clean_teams(table),
        };
        cleaned.insert(kind, table);
    }
    Ok(cleaned)
}
