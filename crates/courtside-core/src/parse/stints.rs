// players_teams.csv -> a flat table of player stints with two lookup indexes.
//
// A player traded mid-season has one row per team (numbered by `stint`), so
// rows are never merged: each one becomes its own entry, and the indexes
// store positions into the flat table in source order.

use super::{per_game, read_rows, ParseError};
use crate::table::Table;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Counting stats for one stint, either regular season or postseason.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StintStats {
    pub gp: u32,
    pub gs: u32,
    pub minutes: u32,
    pub points: u32,
    pub o_rebounds: u32,
    pub d_rebounds: u32,
    pub rebounds: u32,
    pub assists: u32,
    pub steals: u32,
    pub blocks: u32,
    pub turnovers: u32,
    pub pf: u32,
    pub fg_attempted: u32,
    pub fg_made: u32,
    pub ft_attempted: u32,
    pub ft_made: u32,
    pub three_attempted: u32,
    pub three_made: u32,
    pub dq: u32,
}

impl StintStats {
    pub fn points_per_game(&self) -> f64 {
        per_game(f64::from(self.points), self.gp)
    }

    pub fn rebounds_per_game(&self) -> f64 {
        per_game(f64::from(self.rebounds), self.gp)
    }

    pub fn assists_per_game(&self) -> f64 {
        per_game(f64::from(self.assists), self.gp)
    }
}

/// One player's time with one team in one season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStint {
    pub player_id: String,
    pub year: u32,
    pub team_id: String,
    pub league: String,
    pub stint: u32,
    pub regular: StintStats,
    pub postseason: StintStats,
}

/// All stints in source order, indexed by player and by team season.
#[derive(Debug, Clone, Default)]
pub struct StintTable {
    stints: Vec<PlayerStint>,
    by_player: HashMap<String, Vec<usize>>,
    by_team_season: BTreeMap<(u32, String), Vec<usize>>,
}

impl StintTable {
    /// Build the indexes over a fully populated list of stints.
    pub fn new(stints: Vec<PlayerStint>) -> Self {
        let mut by_player: HashMap<String, Vec<usize>> = HashMap::new();
        let mut by_team_season: BTreeMap<(u32, String), Vec<usize>> = BTreeMap::new();
        for (i, s) in stints.iter().enumerate() {
            by_player.entry(s.player_id.clone()).or_default().push(i);
            by_team_season
                .entry((s.year, s.team_id.clone()))
                .or_default()
                .push(i);
        }
        Self {
            stints,
            by_player,
            by_team_season,
        }
    }

    pub fn len(&self) -> usize {
        self.stints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stints.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerStint> {
        self.stints.iter()
    }

    /// Every stint of one player, in source order.
    pub fn for_player(&self, player_id: &str) -> Vec<&PlayerStint> {
        self.resolve(self.by_player.get(player_id))
    }

    /// Every stint played for `team_id` in `year`, in source order.
    pub fn for_team_season(&self, year: u32, team_id: &str) -> Vec<&PlayerStint> {
        self.resolve(self.by_team_season.get(&(year, team_id.to_string())))
    }

    pub fn player_ids(&self) -> impl Iterator<Item = &str> {
        self.by_player.keys().map(String::as_str)
    }

    /// `(year, team ID)` pairs in ascending order.
    pub fn team_seasons(&self) -> impl Iterator<Item = (u32, &str)> {
        self.by_team_season
            .keys()
            .map(|(year, team)| (*year, team.as_str()))
    }

    fn resolve(&self, positions: Option<&Vec<usize>>) -> Vec<&PlayerStint> {
        positions
            .map(|idx| idx.iter().map(|&i| &self.stints[i]).collect())
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Raw CSV row (private)
// ---------------------------------------------------------------------------

/// players_teams.csv row. Identity columns are required; `lgID` and the
/// counting columns default to empty/zero so a cleaned table still parses.
#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
struct RawStint {
    playerID: String,
    year: u32,
    stint: u32,
    tmID: String,
    #[serde(default)]
    lgID: String,

    #[serde(default)]
    GP: u32,
    #[serde(default)]
    GS: u32,
    #[serde(default)]
    minutes: u32,
    #[serde(default)]
    points: u32,
    #[serde(default)]
    oRebounds: u32,
    #[serde(default)]
    dRebounds: u32,
    #[serde(default)]
    rebounds: u32,
    #[serde(default)]
    assists: u32,
    #[serde(default)]
    steals: u32,
    #[serde(default)]
    blocks: u32,
    #[serde(default)]
    turnovers: u32,
    #[serde(default)]
    PF: u32,
    #[serde(default)]
    fgAttempted: u32,
    #[serde(default)]
    fgMade: u32,
    #[serde(default)]
    ftAttempted: u32,
    #[serde(default)]
    ftMade: u32,
    #[serde(default)]
    threeAttempted: u32,
    #[serde(default)]
    threeMade: u32,
    #[serde(default)]
    dq: u32,

    #[serde(default)]
    PostGP: u32,
    #[serde(default)]
    PostGS: u32,
    #[serde(default)]
    PostMinutes: u32,
    #[serde(default)]
    PostPoints: u32,
    #[serde(default)]
    PostoRebounds: u32,
    #[serde(default)]
    PostdRebounds: u32,
    #[serde(default)]
    PostRebounds: u32,
    #[serde(default)]
    PostAssists: u32,
    #[serde(default)]
    PostSteals: u32,
    #[serde(default)]
    PostBlocks: u32,
    #[serde(default)]
    PostTurnovers: u32,
    #[serde(default)]
    PostPF: u32,
    #[serde(default)]
    PostfgAttempted: u32,
    #[serde(default)]
    PostfgMade: u32,
    #[serde(default)]
    PostftAttempted: u32,
    #[serde(default)]
    PostftMade: u32,
    #[serde(default)]
    PostthreeAttempted: u32,
    #[serde(default)]
    PostthreeMade: u32,
    #[serde(default)]
    PostDQ: u32,
}

impl From<RawStint> for PlayerStint {
    fn from(raw: RawStint) -> Self {
        PlayerStint {
            regular: StintStats {
                gp: raw.GP,
                gs: raw.GS,
                minutes: raw.minutes,
                points: raw.points,
                o_rebounds: raw.oRebounds,
                d_rebounds: raw.dRebounds,
                rebounds: raw.rebounds,
                assists: raw.assists,
                steals: raw.steals,
                blocks: raw.blocks,
                turnovers: raw.turnovers,
                pf: raw.PF,
                fg_attempted: raw.fgAttempted,
                fg_made: raw.fgMade,
                ft_attempted: raw.ftAttempted,
                ft_made: raw.ftMade,
                three_attempted: raw.threeAttempted,
                three_made: raw.threeMade,
                dq: raw.dq,
            },
            postseason: StintStats {
                gp: raw.PostGP,
                gs: raw.PostGS,
                minutes: raw.PostMinutes,
                points: raw.PostPoints,
                o_rebounds: raw.PostoRebounds,
                d_rebounds: raw.PostdRebounds,
                rebounds: raw.PostRebounds,
                assists: raw.PostAssists,
                steals: raw.PostSteals,
                blocks: raw.PostBlocks,
                turnovers: raw.PostTurnovers,
                pf: raw.PostPF,
                fg_attempted: raw.PostfgAttempted,
                fg_made: raw.PostfgMade,
                ft_attempted: raw.PostftAttempted,
                ft_made: raw.PostftMade,
                three_attempted: raw.PostthreeAttempted,
                three_made: raw.PostthreeMade,
                dq: raw.PostDQ,
            },
            player_id: raw.playerID,
            year: raw.year,
            team_id: raw.tmID,
            league: raw.lgID,
            stint: raw.stint,
        }
    }
}

/// Parse the players_teams table into a [`StintTable`].
pub fn parse_players_teams(table: &Table) -> Result<StintTable, ParseError> {
    let rows: Vec<RawStint> = read_rows(table, "players_teams")?;
    Ok(StintTable::new(rows.into_iter().map(PlayerStint::from).collect()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
