// Prospect dataset model and JSON loading.
//
// The dataset is a single JSON document with five top-level collections
// (bio, scoutRankings, scoutingReports, game_logs, seasonLogs). Each
// collection is decoded element-wise so one malformed record never sinks
// the whole load.

use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

/// Player identifier linking rankings, logs, and reports to a bio.
pub type PlayerId = u64;

// ---------------------------------------------------------------------------
// Record types
// ---------------------------------------------------------------------------

/// Static biographical data for one prospect. Loaded once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerBio {
    pub player_id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub current_team: Option<String>,
    #[serde(default)]
    pub league: Option<String>,
    /// Height in inches.
    #[serde(default)]
    pub height: Option<f64>,
    /// Weight in pounds.
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub home_town: Option<String>,
    #[serde(default)]
    pub home_country: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// One player's ranks as assigned by each scout.
///
/// The scout set is record-defined and varies in width across players; a
/// scout that didn't rank the player is an absent key, never zero. The
/// identifier is captured by the typed field, so it never appears in the
/// scout map. Map order is the record's own field order (the breakdown
/// view depends on it).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoutRanking {
    pub player_id: PlayerId,
    #[serde(flatten)]
    pub ranks: Map<String, Value>,
}

/// A single game's box-score line. Any stat field may be absent or
/// non-numeric; consumers decide what qualifies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameLogEntry {
    pub player_id: PlayerId,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub opponent: Option<String>,
    #[serde(flatten)]
    pub stats: Map<String, Value>,
}

/// Season aggregate line. Field names appear in upper- or lower-case
/// variants depending on the source, so everything (including the season
/// label) stays in the raw map and is resolved case-insensitively.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonLogEntry {
    pub player_id: PlayerId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Free-text scouting report. `filed_at` is set for reports added at
/// runtime; reports seeded from the dataset carry none.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoutingReport {
    pub player_id: PlayerId,
    pub scout: String,
    pub report: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filed_at: Option<DateTime<Utc>>,
}

/// The fully decoded dataset handed to the aggregation core.
#[derive(Debug, Clone, Default)]
pub struct ProspectDocument {
    pub bios: Vec<PlayerBio>,
    pub scout_rankings: Vec<ScoutRanking>,
    pub scouting_reports: Vec<ScoutingReport>,
    pub game_logs: Vec<GameLogEntry>,
    pub season_logs: Vec<SeasonLogEntry>,
}

impl ProspectDocument {
    /// Look up a bio by player id.
    pub fn bio(&self, player_id: PlayerId) -> Option<&PlayerBio> {
        self.bios.iter().find(|b| b.player_id == player_id)
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid JSON in dataset {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

// ---------------------------------------------------------------------------
// Raw document (private) — top-level collections as untyped values
// ---------------------------------------------------------------------------

/// Top-level shape of the JSON document. Collections are kept untyped here
/// so malformed records can be skipped individually; a missing collection
/// decodes as empty.
#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    bio: Vec<Value>,
    #[serde(default, rename = "scoutRankings")]
    scout_rankings: Vec<Value>,
    #[serde(default, rename = "scoutingReports")]
    scouting_reports: Vec<Value>,
    #[serde(default)]
    game_logs: Vec<Value>,
    #[serde(default, rename = "seasonLogs")]
    season_logs: Vec<Value>,
}

/// Decode one collection element-wise, warning about and skipping records
/// that fail to decode (missing identifier, wrong type, etc.).
fn decode_collection<T: DeserializeOwned>(raw: Vec<Value>, what: &str) -> Vec<T> {
    let mut out = Vec::with_capacity(raw.len());
    for value in raw {
        match serde_json::from_value::<T>(value) {
            Ok(record) => out.push(record),
            Err(e) => warn!("skipping malformed {} record: {}", what, e),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Loaders
// ---------------------------------------------------------------------------

/// Decode a dataset document from a reader. Exposed for testing and
/// flexibility; only top-level JSON syntax errors are fatal.
pub fn load_document_from_reader<R: Read>(rdr: R) -> Result<ProspectDocument, serde_json::Error> {
    let raw: RawDocument = serde_json::from_reader(rdr)?;
    Ok(ProspectDocument {
        bios: decode_collection(raw.bio, "bio"),
        scout_rankings: decode_collection(raw.scout_rankings, "scout ranking"),
        scouting_reports: decode_collection(raw.scouting_reports, "scouting report"),
        game_logs: decode_collection(raw.game_logs, "game log"),
        season_logs: decode_collection(raw.season_logs, "season log"),
    })
}

/// Load the dataset document from a JSON file.
pub fn load_document(path: &Path) -> Result<ProspectDocument, DatasetError> {
    let file = std::fs::File::open(path).map_err(|e| DatasetError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    load_document_from_reader(std::io::BufReader::new(file)).map_err(|e| DatasetError::Json {
        path: path.display().to_string(),
        source: e,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
