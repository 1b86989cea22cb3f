// Plain-text report output: load progress lines and per-season offensive
// rankings.

use courtside_core::parse::TeamsByYear;
use courtside_core::{RawTables, TableKind};
use std::path::Path;

pub const SEASON_SEPARATOR: &str =
    "////////////////////--------------------------------/////////////////////////////////";

/// One row of a season's offensive ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamRanking {
    pub team_id: String,
    pub name: String,
    pub year: u32,
    pub o_ppg: f64,
}

/// Teams of `year` ordered by points per game, highest first. Ties are broken
/// by team ID so the order is stable.
pub fn rank_by_offense(teams: &TeamsByYear, year: u32) -> Vec<TeamRanking> {
    let mut rankings: Vec<TeamRanking> = teams
        .get(&year)
        .into_iter()
        .flatten()
        .map(|(team_id, season)| TeamRanking {
            team_id: team_id.clone(),
            name: season.name.clone(),
            year,
            o_ppg: season.o_ppg,
        })
        .collect();

    rankings.sort_by(|a, b| {
        b.o_ppg
            .total_cmp(&a.o_ppg)
            .then_with(|| a.team_id.cmp(&b.team_id))
    });
    rankings
}

/// Render one season's ranking table, optionally truncated to `top` rows.
pub fn render_rankings(year: u32, rankings: &[TeamRanking], top: Option<usize>) -> String {
    let shown = &rankings[..top.map_or(rankings.len(), |n| n.min(rankings.len()))];
    let name_width = shown
        .iter()
        .map(|r| r.name.len())
        .max()
        .unwrap_or(0)
        .max("name".len());

    let mut out = format!("Year: {year}\n");
    if shown.is_empty() {
        out.push_str("(no teams)\n");
    } else {
        out.push_str(&format!(
            "{:>4}  {:<6}{:<name_width$}  {:>4}  {:>7}\n",
            "", "tmID", "name", "year", "O_PPG"
        ));
        for (rank, r) in shown.iter().enumerate() {
            let name = if r.name.is_empty() { "-" } else { r.name.as_str() };
            out.push_str(&format!(
                "{:>4}  {:<6}{:<name_width$}  {:>4}  {:>7.2}\n",
                rank + 1,
                r.team_id,
                name,
                r.year,
                r.o_ppg
            ));
        }
    }
    out.push_str(SEASON_SEPARATOR);
    out.push('\n');
    out
}

/// Progress lines for the load step: one `Loaded` line per table found and a
/// `Missing file` line per table absent.
pub fn render_load_summary(base: &Path, raw: &RawTables) -> String {
    let mut out = String::new();
    for kind in TableKind::ALL {
        let line = match raw.get(kind) {
            Some(table) => format!("Loaded {}: {} records.\n", kind, table.len()),
            None => format!("Missing file: {}\n", base.join(kind.file_name()).display()),
        };
        out.push_str(&line);
    }
    if raw.len() == TableKind::ALL.len() {
        out.push_str("All data loaded successfully.\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use courtside_core::parse::parse_teams;
    use courtside_core::Table;

    fn teams() -> TeamsByYear {
        let csv_data = "\
year,tmID,name,o_pts,GP
1,CHA,Charlotte Sting,2082,32
1,HOU,Houston Comets,2530,32
1,MIN,Minnesota Lynx,2208,32
1,NEW,Expansion,0,0
2,HOU,Houston Comets,2400,32";
        parse_teams(&Table::from_reader(csv_data.as_bytes()).unwrap()).unwrap()
    }

    #[test]
    fn rankings_sorted_by_offense_descending() {
        let rankings = rank_by_offense(&teams(), 1);
        let ids: Vec<&str> = rankings.iter().map(|r| r.team_id.as_str()).collect();
        assert_eq!(ids, vec!["HOU", "MIN", "CHA", "NEW"]);
        assert_eq!(rankings[3].o_ppg, 0.0);
        assert!(rankings.iter().all(|r| r.year == 1));
    }

    #[test]
    fn ties_broken_by_team_id() {
        let csv_data = "year,tmID,o_pts,GP\n1,ZZZ,100,2\n1,AAA,50,1";
        let teams = parse_teams(&Table::from_reader(csv_data.as_bytes()).unwrap()).unwrap();
        let ids: Vec<String> = rank_by_offense(&teams, 1)
            .into_iter()
            .map(|r| r.team_id)
            .collect();
        assert_eq!(ids, vec!["AAA", "ZZZ"]);
    }

    #[test]
    fn unknown_season_ranks_nothing() {
        assert!(rank_by_offense(&teams(), 9).is_empty());
    }

    #[test]
    fn render_truncates_to_top() {
        let rankings = rank_by_offense(&teams(), 1);
        let text = render_rankings(1, &rankings, Some(2));
        assert!(text.starts_with("Year: 1\n"));
        assert!(text.contains("Houston Comets"));
        assert!(text.contains("Minnesota Lynx"));
        assert!(!text.contains("Charlotte Sting"));
        assert!(text.contains("79.06"));
        assert!(text.trim_end().ends_with(SEASON_SEPARATOR));
    }

    #[test]
    fn render_empty_season() {
        let text = render_rankings(7, &[], None);
        assert_eq!(text, format!("Year: 7\n(no teams)\n{SEASON_SEPARATOR}\n"));
    }

    #[test]
    fn load_summary_lists_loaded_and_missing() {
        let mut raw = RawTables::new();
        raw.insert(
            TableKind::Teams,
            Table::from_reader("year,tmID\n1,A\n2,A".as_bytes()).unwrap(),
        );
        let text = render_load_summary(Path::new("data"), &raw);
        assert!(text.contains("Loaded teams: 2 records.\n"));
        assert!(text.contains("Missing file: data/coaches.csv\n"));
        assert!(!text.contains("All data loaded successfully."));
        assert_eq!(text.lines().count(), 7);
    }

    #[test]
    fn load_summary_with_every_table() {
        let mut raw = RawTables::new();
        for kind in TableKind::ALL {
            raw.insert(kind, Table::from_reader("year\n1".as_bytes()).unwrap());
        }
        let text = render_load_summary(Path::new("data"), &raw);
        assert!(text.starts_with("Loaded awards_players: 1 records.\n"));
        assert!(!text.contains("Missing file"));
        assert!(text.ends_with("All data loaded successfully.\n"));
    }
}
