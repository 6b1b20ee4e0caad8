// Integration tests for the prospect board.
//
// These tests exercise the full system end-to-end using the library
// crate's public API: dataset decoding, consensus ranking, stat
// summarization, disagreement classification, and the report store,
// wired together through the Board.

use scout_hub::board::Board;
use scout_hub::dataset::{load_document_from_reader, ProspectDocument};
use scout_hub::engine::consensus::ConsensusCall;

use serde_json::json;

// ===========================================================================
// Test helpers
// ===========================================================================

/// Build the shared sample document -- single source of truth for the
/// end-to-end fixtures.
fn sample_document() -> ProspectDocument {
    let doc_json = json!({
        "bio": [
            {"playerId": 101, "name": "Cooper Flagg", "currentTeam": "Duke",
             "league": "NCAA", "height": 81, "weight": 205,
             "homeTown": "Newport", "homeCountry": "USA"},
            {"playerId": 102, "name": "Dylan Harper", "currentTeam": "Rutgers"},
            {"playerId": 103, "name": "Ace Bailey", "currentTeam": "Rutgers"},
            {"playerId": 104, "name": "Unranked Sleeper"}
        ],
        "scoutRankings": [
            {"playerId": 101, "ESPN Rank": 1, "Sam Vecenie Rank": 1, "Kevin O'Connor Rank": 1},
            {"playerId": 102, "ESPN Rank": 2, "Sam Vecenie Rank": 3, "Kevin O'Connor Rank": "N/A"},
            {"playerId": 103, "ESPN Rank": 2, "Sam Vecenie Rank": 9, "Kevin O'Connor Rank": 4},
            {"playerId": 104, "ESPN Rank": "N/A"}
        ],
        "scoutingReports": [
            {"playerId": 101, "scout": "Sam Vecenie", "report": "Best two-way wing in the class."},
            {"playerId": 102, "scout": "Kevin O'Connor", "report": "Lead guard with positional size."}
        ],
        "game_logs": [
            {"playerId": 101, "date": "2025-01-15", "team": "Duke", "opponent": "UNC",
             "pts": 20, "reb": 8, "ast": 6, "fg%": 52.0, "stl": 2, "blk": 3},
            {"playerId": 101, "date": "2025-01-18", "team": "Duke", "opponent": "Wake Forest",
             "pts": 18, "reb": 10, "ast": 4, "fg%": 48.5, "stl": 1, "blk": 1},
            {"playerId": 102, "date": "2025-01-12", "team": "Rutgers", "opponent": "Purdue",
             "pts": 27, "reb": 5, "ast": 7}
        ],
        "seasonLogs": [
            {"playerId": 101, "Season": "2024-25", "GP": 35, "PTS": 19.2, "TRB": 7.5,
             "AST": 4.2, "FG%": 48.1, "STL": 1.4, "BLK": 1.3}
        ]
    })
    .to_string();
    load_document_from_reader(doc_json.as_bytes()).expect("sample document should decode")
}

fn sample_board() -> Board {
    Board::new(sample_document())
}

// ===========================================================================
// Roster ordering
// ===========================================================================

#[test]
fn roster_sorted_with_unranked_last() {
    let board = sample_board();
    let roster = board.roster();

    let names: Vec<&str> = roster.iter().map(|e| e.name.as_str()).collect();
    // Averages: Flagg 1.0, Harper 2.5, Bailey 5.0, Sleeper unranked.
    assert_eq!(
        names,
        vec!["Cooper Flagg", "Dylan Harper", "Ace Bailey", "Unranked Sleeper"]
    );

    assert_eq!(roster[0].avg_rank, Some(1.0));
    assert_eq!(roster[1].avg_rank, Some(2.5));
    assert_eq!(roster[2].avg_rank, Some(5.0));
    assert_eq!(roster[3].avg_rank, None);
}

#[test]
fn roster_is_stable_across_reads() {
    let board = sample_board();
    let first: Vec<u64> = board.roster().iter().map(|e| e.player_id).collect();
    let second: Vec<u64> = board.roster().iter().map(|e| e.player_id).collect();
    assert_eq!(first, second);
}

// ===========================================================================
// Detail bundle
// ===========================================================================

#[test]
fn detail_bundle_for_ranked_player() {
    let board = sample_board();
    let detail = board.detail(101).expect("player 101 exists");

    assert_eq!(detail.bio.name, "Cooper Flagg");
    assert_eq!(detail.bio.home_country.as_deref(), Some("USA"));
    assert_eq!(detail.avg_rank, Some(1.0));

    // Season log is the preferred stat source.
    assert_eq!(detail.summary.season.as_deref(), Some("2024-25"));
    assert_eq!(detail.summary.points, Some(19.2));
    assert_eq!(detail.summary.rebounds, Some(7.5));
    assert_eq!(detail.summary.games_played, Some(35.0));

    // Breakdown in record order, all scouts at the consensus.
    let scouts: Vec<&str> = detail
        .rank_breakdown
        .iter()
        .map(|d| d.scout.as_str())
        .collect();
    assert_eq!(scouts, vec!["ESPN Rank", "Sam Vecenie Rank", "Kevin O'Connor Rank"]);
    assert!(detail
        .rank_breakdown
        .iter()
        .all(|d| d.call == ConsensusCall::NearConsensus));

    assert_eq!(detail.reports.len(), 1);
    assert_eq!(detail.game_logs.len(), 2);
}

#[test]
fn detail_falls_back_to_game_log_averages() {
    let board = sample_board();
    let detail = board.detail(102).expect("player 102 exists");

    // No season log: points average (27.0) from the single game log.
    assert_eq!(detail.summary.season, None);
    assert_eq!(detail.summary.points, Some(27.0));
    assert_eq!(detail.summary.rebounds, Some(5.0));
    // Never logged anywhere: not-available sentinel.
    assert_eq!(detail.summary.blocks, None);
    assert_eq!(detail.summary.games_played, None);
}

#[test]
fn disagreement_classified_against_consensus() {
    let board = sample_board();
    let detail = board.detail(103).expect("player 103 exists");

    // Average of 2, 9, 4 is 5.0; deltas are -3, +4, -1.
    assert_eq!(detail.avg_rank, Some(5.0));
    let calls: Vec<ConsensusCall> = detail.rank_breakdown.iter().map(|d| d.call).collect();
    assert_eq!(
        calls,
        vec![
            ConsensusCall::HighOnPlayer,
            ConsensusCall::LowOnPlayer,
            ConsensusCall::NearConsensus
        ]
    );
}

#[test]
fn unranked_player_has_empty_breakdown() {
    let board = sample_board();
    let detail = board.detail(104).expect("player 104 exists");
    assert_eq!(detail.avg_rank, None);
    assert!(detail.rank_breakdown.is_empty());
}

// ===========================================================================
// Report round trip
// ===========================================================================

#[test]
fn report_round_trip_through_board() {
    let mut board = sample_board();
    let before = board.report_count();

    assert!(board.add_report(102, "Jeremy Woo", "Shot selection keeps improving."));
    assert_eq!(board.report_count(), before + 1);

    let detail = board.detail(102).unwrap();
    assert_eq!(detail.reports[0].report, "Shot selection keeps improving.");
    assert_eq!(detail.reports[0].scout, "Jeremy Woo");
    assert!(detail.reports[0].filed_at.is_some());
    assert_eq!(detail.reports[1].scout, "Kevin O'Connor");

    // Blank submissions leave the store untouched.
    assert!(!board.add_report(102, "  ", "body"));
    assert!(!board.add_report(102, "scout", " \t"));
    assert_eq!(board.report_count(), before + 1);
}

// ===========================================================================
// Navigation
// ===========================================================================

#[test]
fn navigation_wraps_over_sorted_roster() {
    let mut board = sample_board();

    board.select_next();
    assert_eq!(board.selected(), Some(101));

    // Backward from the first entry wraps to the last (the unranked one).
    board.select_prev();
    assert_eq!(board.selected(), Some(104));

    board.select_next();
    assert_eq!(board.selected(), Some(101));

    assert!(board.select(103));
    board.select_next();
    assert_eq!(board.selected(), Some(104));
}

// ===========================================================================
// Loader leniency end-to-end
// ===========================================================================

#[test]
fn malformed_records_do_not_sink_the_board() {
    let doc_json = json!({
        "bio": [
            {"playerId": 1, "name": "Valid Player"},
            {"name": "missing id"},
            {"playerId": 2, "name": "Also Valid"}
        ],
        "scoutRankings": [
            {"ESPN Rank": 5},
            {"playerId": 1, "ESPN Rank": 3}
        ],
        "game_logs": [
            {"playerId": 1, "pts": "DNP"},
            {"playerId": 1, "pts": 11}
        ]
    })
    .to_string();

    let doc = load_document_from_reader(doc_json.as_bytes()).unwrap();
    assert_eq!(doc.bios.len(), 2);
    assert_eq!(doc.scout_rankings.len(), 1);

    let board = Board::new(doc);
    let roster = board.roster();
    assert_eq!(roster[0].name, "Valid Player");
    assert_eq!(roster[0].avg_rank, Some(3.0));
    assert_eq!(roster[1].avg_rank, None);

    // The "DNP" entry is excluded from the points average.
    assert_eq!(board.detail(1).unwrap().summary.points, Some(11.0));
}

#[test]
fn orphaned_records_are_silently_ignored() {
    // Rankings and logs for a player with no bio never reach the roster.
    let doc_json = json!({
        "bio": [{"playerId": 1, "name": "Only Player"}],
        "scoutRankings": [{"playerId": 999, "ESPN Rank": 1}],
        "game_logs": [{"playerId": 999, "pts": 50}]
    })
    .to_string();

    let board = Board::new(load_document_from_reader(doc_json.as_bytes()).unwrap());
    let roster = board.roster();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].name, "Only Player");
    assert_eq!(roster[0].avg_rank, None);
    assert!(board.detail(999).is_none());
}
