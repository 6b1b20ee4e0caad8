// Per-player stat summaries with alias-based field resolution.
//
// Season logs and game logs spell the same statistic differently (PTS vs
// pts, TRB vs reb). Every lookup goes through the fixed alias table below,
// compared case-insensitively, so the alias policy lives in one auditable
// place instead of per-field fallback chains.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::dataset::{GameLogEntry, PlayerId};
use crate::engine::index::RecordIndex;

// ---------------------------------------------------------------------------
// Alias table
// ---------------------------------------------------------------------------

/// Accepted spellings per tracked statistic, tried in order. Case is
/// ignored, so one entry covers both `PTS` and `pts`.
const POINTS: &[&str] = &["PTS"];
const REBOUNDS: &[&str] = &["TRB", "REB"];
const ASSISTS: &[&str] = &["AST"];
const FIELD_GOAL_PCT: &[&str] = &["FG%"];
const STEALS: &[&str] = &["STL"];
const BLOCKS: &[&str] = &["BLK"];
const GAMES_PLAYED: &[&str] = &["GP"];
const SEASON_LABEL: &[&str] = &["Season"];

/// Case-insensitive alias lookup over a raw record map.
fn lookup<'m>(fields: &'m Map<String, Value>, aliases: &[&str]) -> Option<&'m Value> {
    aliases.iter().find_map(|alias| {
        fields
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(alias))
            .map(|(_, value)| value)
    })
}

/// Numeric coercion: finite numbers only, everything else is absent.
fn numeric(value: &Value) -> Option<f64> {
    value.as_f64().filter(|n| n.is_finite())
}

/// Round to one decimal place for display.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ---------------------------------------------------------------------------
// Summary record
// ---------------------------------------------------------------------------

/// Fixed-shape per-player summary. `None` is the not-available sentinel:
/// no data in either source, distinct from a legitimate zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatSummary {
    pub season: Option<String>,
    /// Games played is a count: looked up from the season log only, never
    /// averaged from game logs.
    pub games_played: Option<f64>,
    pub points: Option<f64>,
    pub rebounds: Option<f64>,
    pub assists: Option<f64>,
    pub field_goal_pct: Option<f64>,
    pub steals: Option<f64>,
    pub blocks: Option<f64>,
}

// ---------------------------------------------------------------------------
// Summarization
// ---------------------------------------------------------------------------

/// Mean of a field across the player's game logs, rounded to one decimal.
/// Entries where the field is absent or non-numeric are excluded from both
/// the sum and the count. `None` when no entry qualifies.
fn game_log_average(logs: &[&GameLogEntry], aliases: &[&str]) -> Option<f64> {
    let values: Vec<f64> = logs
        .iter()
        .filter_map(|log| lookup(&log.stats, aliases).and_then(numeric))
        .collect();
    if values.is_empty() {
        return None;
    }
    Some(round1(values.iter().sum::<f64>() / values.len() as f64))
}

/// Summarize a player's season from the available sources.
///
/// The first season-log entry is preferred; any numeric field it lacks
/// falls back to the game-log average of that field. Both sources absent
/// for a field leaves it `None`.
pub fn summarize(player_id: PlayerId, index: &RecordIndex<'_>) -> StatSummary {
    let season = index.season_logs(player_id).first().copied();
    let games = index.game_logs(player_id);

    let stat = |aliases: &[&str]| -> Option<f64> {
        season
            .and_then(|entry| lookup(&entry.fields, aliases).and_then(numeric))
            .or_else(|| game_log_average(games, aliases))
    };

    StatSummary {
        season: season
            .and_then(|entry| lookup(&entry.fields, SEASON_LABEL))
            .and_then(Value::as_str)
            .map(str::to_string),
        games_played: season.and_then(|entry| lookup(&entry.fields, GAMES_PLAYED).and_then(numeric)),
        points: stat(POINTS),
        rebounds: stat(REBOUNDS),
        assists: stat(ASSISTS),
        field_goal_pct: stat(FIELD_GOAL_PCT),
        steals: stat(STEALS),
        blocks: stat(BLOCKS),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
