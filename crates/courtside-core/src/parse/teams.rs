// teams.csv and teams_post.csv -> season records keyed by year, then team.

use super::{per_game, read_rows, ParseError};
use crate::table::Table;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use tracing::warn;

pub type TeamsByYear = BTreeMap<u32, HashMap<String, TeamSeason>>;
pub type TeamsPostByYear = BTreeMap<u32, HashMap<String, TeamPostseason>>;

// ---------------------------------------------------------------------------
// Regular season
// ---------------------------------------------------------------------------

/// One team's regular season, with per-game scoring rates.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamSeason {
    pub name: String,
    pub conf_id: String,
    pub div_id: String,
    pub rank: u32,
    pub playoff: String,
    pub won: u32,
    pub lost: u32,
    pub gp: u32,
    pub o_pts: u32,
    pub d_pts: u32,
    /// Points scored per game.
    pub o_ppg: f64,
    /// Points allowed per game.
    pub d_ppg: f64,
    /// Scoring margin per game.
    pub margin: f64,
}

#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
struct RawTeam {
    year: u32,
    tmID: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    confID: String,
    #[serde(default)]
    divID: String,
    #[serde(default)]
    rank: u32,
    #[serde(default)]
    playoff: String,
    #[serde(default)]
    won: u32,
    #[serde(default)]
    lost: u32,
    #[serde(default)]
    GP: u32,
    #[serde(default)]
    o_pts: u32,
    #[serde(default)]
    d_pts: u32,
}

impl From<RawTeam> for TeamSeason {
    fn from(raw: RawTeam) -> Self {
        let o_pts = f64::from(raw.o_pts);
        let d_pts = f64::from(raw.d_pts);
        TeamSeason {
            name: raw.name,
            conf_id: raw.confID,
            div_id: raw.divID,
            rank: raw.rank,
            playoff: raw.playoff,
            won: raw.won,
            lost: raw.lost,
            gp: raw.GP,
            o_pts: raw.o_pts,
            d_pts: raw.d_pts,
            o_ppg: per_game(o_pts, raw.GP),
            d_ppg: per_game(d_pts, raw.GP),
            margin: per_game(o_pts - d_pts, raw.GP),
        }
    }
}

/// Parse the teams table into year -> team ID -> season.
pub fn parse_teams(table: &Table) -> Result<TeamsByYear, ParseError> {
    let rows: Vec<RawTeam> = read_rows(table, "teams")?;
    let mut by_year: TeamsByYear = BTreeMap::new();
    for raw in rows {
        let (year, team_id) = (raw.year, raw.tmID.clone());
        let season = TeamSeason::from(raw);
        if by_year.entry(year).or_default().insert(team_id, season).is_some() {
            warn!(year, "duplicate team season row, using latest");
        }
    }
    Ok(by_year)
}

// ---------------------------------------------------------------------------
// Postseason
// ---------------------------------------------------------------------------

/// One team's postseason, with per-game scoring rates.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamPostseason {
    pub wins: u32,
    pub losses: u32,
    pub o_pts: u32,
    pub d_pts: u32,
    pub gp: u32,
    pub o_ppg: f64,
    pub d_ppg: f64,
}

/// teams_post.csv row. The dataset names the result columns `W` and `L`.
#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
struct RawTeamPost {
    year: u32,
    tmID: String,
    #[serde(default, alias = "W")]
    wins: u32,
    #[serde(default, alias = "L")]
    losses: u32,
    #[serde(default)]
    o_pts: u32,
    #[serde(default)]
    d_pts: u32,
    #[serde(default)]
    GP: u32,
}

impl From<RawTeamPost> for TeamPostseason {
    fn from(raw: RawTeamPost) -> Self {
        TeamPostseason {
            wins: raw.wins,
            losses: raw.losses,
            o_pts: raw.o_pts,
            d_pts: raw.d_pts,
            gp: raw.GP,
            o_ppg: per_game(f64::from(raw.o_pts), raw.GP),
            d_ppg: per_game(f64::from(raw.d_pts), raw.GP),
        }
    }
}

/// Parse the teams_post table into year -> team ID -> postseason.
pub fn parse_teams_post(table: &Table) -> Result<TeamsPostByYear, ParseError> {
    let rows: Vec<RawTeamPost> = read_rows(table, "teams_post")?;
    let mut by_year: TeamsPostByYear = BTreeMap::new();
    for raw in rows {
        let (year, team_id) = (raw.year, raw.tmID.clone());
        if by_year
            .entry(year)
            .or_default()
            .insert(team_id, TeamPostseason::from(raw))
            .is_some()
        {
            warn!(year, "duplicate team postseason row, using latest");
        }
    }
    Ok(by_year)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
