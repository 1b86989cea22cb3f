// Integration tests for the league loader.
//
// These run the full load -> clean -> parse path over the fixture tables in
// tests/fixtures, which mirror the layout of the real basketball dataset.

use std::path::{Path, PathBuf};

use courtside_core::clean::{clean_all, clean_players};
use courtside_core::holdout;
use courtside_core::{load_tables, parse_all, parse_all_data, TableKind};

// ===========================================================================
// Test helpers
// ===========================================================================

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Copy every fixture except `skip` into a fresh temp directory.
fn fixtures_without(skip: TableKind, dir_name: &str) -> PathBuf {
    let tmp = std::env::temp_dir().join(dir_name);
    let _ = std::fs::remove_dir_all(&tmp);
    std::fs::create_dir_all(&tmp).unwrap();
    for kind in TableKind::ALL {
        if kind == skip {
            continue;
        }
        std::fs::copy(fixtures().join(kind.file_name()), tmp.join(kind.file_name())).unwrap();
    }
    tmp
}

// ===========================================================================
// Loading
// ===========================================================================

#[test]
fn loads_all_seven_tables() {
    let raw = load_tables(&fixtures()).unwrap();
    assert_eq!(raw.len(), 7);

    let counts: Vec<(TableKind, usize)> = raw.iter().map(|(k, t)| (k, t.len())).collect();
    assert_eq!(
        counts,
        vec![
            (TableKind::AwardsPlayers, 3),
            (TableKind::Coaches, 3),
            (TableKind::Players, 5),
            (TableKind::PlayersTeams, 5),
            (TableKind::SeriesPost, 4),
            (TableKind::Teams, 5),
            (TableKind::TeamsPost, 2),
        ]
    );
}

#[test]
fn missing_file_is_skipped() {
    let dir = fixtures_without(TableKind::TeamsPost, "courtside_it_missing_teams_post");

    let data = parse_all_data(&dir).unwrap();
    assert_eq!(data.raw.len(), 6);
    assert!(!data.raw.contains(TableKind::TeamsPost));
    assert!(data.structured.teams_post.is_none());
    assert!(data.structured.teams.is_some());
    assert!(data.structured.players_teams.is_some());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn blank_division_ids_filled_with_zero() {
    let data = parse_all_data(&fixtures()).unwrap();
    let teams = data.structured.teams.unwrap();
    assert_eq!(teams[&1]["HOU"].div_id, "0");
}

// ===========================================================================
// Parsed structures
// ===========================================================================

#[test]
fn team_scoring_rates() {
    let data = parse_all_data(&fixtures()).unwrap();
    let teams = data.structured.teams.unwrap();

    let hou = &teams[&1]["HOU"];
    assert_eq!(hou.name, "Houston Comets");
    assert!((hou.o_ppg - 2530.0 / 32.0).abs() < 1e-9);
    assert!((hou.d_ppg - 2151.0 / 32.0).abs() < 1e-9);
    assert!((hou.margin - 379.0 / 32.0).abs() < 1e-9);

    let expansion = &teams[&3]["NEW"];
    assert_eq!(expansion.gp, 0);
    assert_eq!(expansion.o_ppg, 0.0);
    assert_eq!(expansion.d_ppg, 0.0);
    assert_eq!(expansion.margin, 0.0);
}

#[test]
fn traded_player_keeps_both_stints() {
    let data = parse_all_data(&fixtures()).unwrap();
    let stints = data.structured.players_teams.unwrap();

    let abross = stints.for_player("abrossv01w");
    assert_eq!(abross.len(), 2);
    assert_eq!((abross[0].team_id.as_str(), abross[0].regular.points), ("MIN", 40));
    assert_eq!((abross[1].team_id.as_str(), abross[1].regular.points), ("HOU", 30));

    let houston_1 = stints.for_team_season(1, "HOU");
    let ids: Vec<&str> = houston_1.iter().map(|s| s.player_id.as_str()).collect();
    assert_eq!(ids, vec!["abrossv01w", "cooperc01w", "swoopsh01w"]);

    let idle = &stints.for_player("thompti01w")[0];
    assert_eq!(idle.regular.points_per_game(), 0.0);
}

#[test]
fn postseason_views() {
    let data = parse_all_data(&fixtures()).unwrap();
    let league = data.structured;

    let series = league.series_post.unwrap();
    let finals: Vec<_> = series[&1].iter().filter(|s| s.is_final()).collect();
    assert_eq!(finals.len(), 1);
    assert_eq!(finals[0].winner, "HOU");

    let teams_post = league.teams_post.unwrap();
    assert_eq!(teams_post[&1]["HOU"].wins, 6);
    assert_eq!(teams_post[&2]["HOU"].losses, 2);

    let coaches = league.coaches.unwrap();
    assert_eq!(coaches["chancva99w"].len(), 2);

    let awards = league.awards_players.unwrap();
    assert_eq!(awards["swoopsh01w"].len(), 2);
    assert!(!awards.contains_key("abrossv01w"));

    let players = league.players.unwrap();
    assert_eq!(players.len(), 5);
    assert_eq!(
        players["cooperc01w"].born().map(|d| d.to_string()),
        Some("1962-09-27".to_string())
    );
}

// ===========================================================================
// Cleaning and holdout
// ===========================================================================

#[test]
fn clean_players_drops_unrostered_players() {
    let raw = load_tables(&fixtures()).unwrap();
    let players = raw.get(TableKind::Players).unwrap();
    let players_teams = raw.get(TableKind::PlayersTeams).unwrap();

    let cleaned = clean_players(players, players_teams).unwrap();
    assert_eq!(cleaned.len(), 4);
    assert!(!cleaned.column("bioID").unwrap().any(|id| id == "unusedxx01w"));
}

#[test]
fn cleaned_tables_still_parse() {
    let raw = load_tables(&fixtures()).unwrap();
    let cleaned = clean_all(&raw).unwrap();
    let league = parse_all(&cleaned).unwrap();

    let teams = league.teams.unwrap();
    assert_eq!(teams[&1]["HOU"].name, "");
    assert!((teams[&1]["HOU"].o_ppg - 2530.0 / 32.0).abs() < 1e-9);
    assert_eq!(league.players.unwrap().len(), 4);
    assert_eq!(league.players_teams.unwrap().for_player("cooperc01w")[0].league, "");
}

#[test]
fn holdout_for_first_season() {
    let raw = load_tables(&fixtures()).unwrap();
    let set = holdout::test_set(
        1,
        raw.get(TableKind::Coaches).unwrap(),
        raw.get(TableKind::Teams).unwrap(),
        raw.get(TableKind::PlayersTeams).unwrap(),
    )
    .unwrap();

    assert_eq!(set.teams.len(), 3);
    assert_eq!(set.coaches.len(), 2);
    assert_eq!(set.players_teams.len(), 4);
    assert!(!set.teams.has_column("won"));
    assert!(set.teams.has_column("name"));
    assert_eq!(
        set.players_teams.headers().iter().collect::<Vec<_>>(),
        vec!["playerID", "year", "stint", "tmID", "lgID"]
    );
}
