// awards_players.csv -> award history grouped by player.

use super::{read_rows, ParseError};
use crate::table::Table;
use serde::Deserialize;
use std::collections::HashMap;

pub type AwardsByPlayer = HashMap<String, Vec<AwardRecord>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwardRecord {
    pub award: String,
    pub year: u32,
    pub note: String,
}

#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
struct RawAward {
    playerID: String,
    award: String,
    year: u32,
    #[serde(default)]
    note: String,
}

/// Parse the awards_players table into player ID -> awards in source order.
pub fn parse_awards_players(table: &Table) -> Result<AwardsByPlayer, ParseError> {
    let rows: Vec<RawAward> = read_rows(table, "awards_players")?;
    let mut awards: AwardsByPlayer = HashMap::new();
    for raw in rows {
        awards.entry(raw.playerID).or_default().push(AwardRecord {
            award: raw.award,
            year: raw.year,
            note: raw.note,
        });
    }
    Ok(awards)
}
