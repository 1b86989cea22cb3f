// Per-season holdout tables: the rows of one season with every outcome column
// removed, so they can be fed to a model that predicts those outcomes.

use crate::table::{Table, TableError};

/// Results a coach's season produced.
pub const COACH_OUTCOME_COLUMNS: &[&str] = &["won", "lost", "post_wins", "post_losses"];

/// Every regular-season and postseason counting stat of a stint.
pub const STINT_OUTCOME_COLUMNS: &[&str] = &[
    "GP", "GS", "minutes", "points", "oRebounds", "dRebounds", "rebounds", "assists", "steals",
    "blocks", "turnovers", "PF", "fgAttempted", "fgMade", "ftAttempted", "ftMade",
    "threeAttempted", "threeMade", "dq", "PostGP", "PostGS", "PostMinutes", "PostPoints",
    "PostoRebounds", "PostdRebounds", "PostRebounds", "PostAssists", "PostSteals", "PostBlocks",
    "PostTurnovers", "PostPF", "PostfgAttempted", "PostfgMade", "PostftAttempted", "PostftMade",
    "PostthreeAttempted", "PostthreeMade", "PostDQ",
];

/// Standings, playoff progress, box-score totals and records of a team season.
pub const TEAM_OUTCOME_COLUMNS: &[&str] = &[
    "rank", "playoff", "seeded", "firstRound", "semis", "finals", "o_fgm", "o_fga", "o_ftm",
    "o_fta", "o_3pm", "o_3pa", "o_oreb", "o_dreb", "o_reb", "o_asts", "o_pf", "o_stl", "o_to",
    "o_blk", "o_pts", "d_fgm", "d_fga", "d_ftm", "d_fta", "d_3pm", "d_3pa", "d_oreb", "d_dreb",
    "d_reb", "d_asts", "d_pf", "d_stl", "d_to", "d_blk", "d_pts", "tmORB", "tmDRB", "tmTRB",
    "opptmORB", "opptmDRB", "opptmTRB", "won", "lost", "GP", "homeW", "homeL", "awayW", "awayL",
    "confW", "confL",
];

/// The three reduced tables for one season.
#[derive(Debug, Clone, PartialEq)]
pub struct HoldoutSet {
    pub players_teams: Table,
    pub teams: Table,
    pub coaches: Table,
}

/// Rows of `table` whose `year` column equals `year`.
pub fn season_rows(table: &Table, year: u32) -> Result<Table, TableError> {
    table.retain_rows("year", |cell| cell.trim().parse::<u32>() == Ok(year))
}

pub fn coaches_test_data(year: u32, coaches: &Table) -> Result<Table, TableError> {
    Ok(season_rows(coaches, year)?.drop_columns(COACH_OUTCOME_COLUMNS))
}

pub fn players_teams_test_data(year: u32, players_teams: &Table) -> Result<Table, TableError> {
    Ok(season_rows(players_teams, year)?.drop_columns(STINT_OUTCOME_COLUMNS))
}

pub fn teams_test_data(year: u32, teams: &Table) -> Result<Table, TableError> {
    Ok(season_rows(teams, year)?.drop_columns(TEAM_OUTCOME_COLUMNS))
}

/// Build the holdout tables for `year`.
pub fn test_set(
    year: u32,
    coaches: &Table,
    teams: &Table,
    players_teams: &Table,
) -> Result<HoldoutSet, TableError> {
    Ok(HoldoutSet {
        players_teams: players_teams_test_data(year, players_teams)?,
        teams: teams_test_data(year, teams)?,
        coaches: coaches_test_data(year, coaches)?,
    })
}
