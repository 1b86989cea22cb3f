// coaches.csv -> per-season coaching records grouped by coach.

use super::{read_rows, ParseError};
use crate::table::Table;
use serde::Deserialize;
use std::collections::HashMap;

pub type CoachesById = HashMap<String, Vec<CoachStint>>;

/// One coach's tenure with one team in one season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoachStint {
    pub year: u32,
    pub team_id: String,
    pub league: String,
    pub stint: u32,
    pub won: u32,
    pub lost: u32,
    pub post_wins: u32,
    pub post_losses: u32,
}

#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
struct RawCoach {
    coachID: String,
    year: u32,
    tmID: String,
    #[serde(default)]
    lgID: String,
    stint: u32,
    won: u32,
    lost: u32,
    post_wins: u32,
    post_losses: u32,
}

/// Parse the coaches table into coach ID -> records in source order.
pub fn parse_coaches(table: &Table) -> Result<CoachesById, ParseError> {
    let rows: Vec<RawCoach> = read_rows(table, "coaches")?;
    let mut coaches: CoachesById = HashMap::new();
    for raw in rows {
        coaches.entry(raw.coachID).or_default().push(CoachStint {
            year: raw.year,
            team_id: raw.tmID,
            league: raw.lgID,
            stint: raw.stint,
            won: raw.won,
            lost: raw.lost,
            post_wins: raw.post_wins,
            post_losses: raw.post_losses,
        });
    }
    Ok(coaches)
}
