// players.csv -> player biographies keyed by player ID.

use super::{read_rows, ParseError};
use crate::table::Table;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::warn;

pub type PlayersById = HashMap<String, PlayerBio>;

/// Biographical data for one player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerBio {
    pub first_name: String,
    pub last_name: String,
    pub college: String,
    pub birth_date: String,
    pub death_date: String,
    pub height: f64,
    pub weight: f64,
    pub position: String,
    pub first_season: u32,
    pub last_season: u32,
}

impl PlayerBio {
    /// Birth date as a calendar date, if the column holds a real one.
    pub fn born(&self) -> Option<NaiveDate> {
        parse_date(&self.birth_date)
    }

    /// Death date as a calendar date, if the column holds a real one.
    pub fn died(&self) -> Option<NaiveDate> {
        parse_date(&self.death_date)
    }
}

/// The dataset writes unknown dates as `0000-00-00`, which fails to parse and
/// maps to `None` along with the `0` fill value.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// players.csv row. Only `bioID` is required.
#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
struct RawPlayer {
    bioID: String,
    #[serde(default)]
    nameFirst: String,
    #[serde(default)]
    nameLast: String,
    #[serde(default)]
    college: String,
    #[serde(default)]
    birthDate: String,
    #[serde(default)]
    deathDate: String,
    #[serde(default)]
    height: f64,
    #[serde(default)]
    weight: f64,
    #[serde(default)]
    pos: String,
    #[serde(default)]
    firstseason: u32,
    #[serde(default)]
    lastseason: u32,
}

impl From<RawPlayer> for PlayerBio {
    fn from(raw: RawPlayer) -> Self {
        PlayerBio {
            first_name: raw.nameFirst,
            last_name: raw.nameLast,
            college: raw.college,
            birth_date: raw.birthDate,
            death_date: raw.deathDate,
            height: raw.height,
            weight: raw.weight,
            position: raw.pos,
            first_season: raw.firstseason,
            last_season: raw.lastseason,
        }
    }
}

/// Parse the players table into a map of player ID -> biography. A repeated
/// ID replaces the earlier row.
pub fn parse_players(table: &Table) -> Result<PlayersById, ParseError> {
    let rows: Vec<RawPlayer> = read_rows(table, "players")?;
    let mut players = HashMap::with_capacity(rows.len());
    for raw in rows {
        let id = raw.bioID.clone();
        if players.insert(id, PlayerBio::from(raw)).is_some() {
            warn!("duplicate player bioID, using latest row");
        }
    }
    Ok(players)
}
