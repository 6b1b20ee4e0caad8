// Scout disagreement classification against the consensus average.

use serde::Serialize;
use serde_json::Value;

use crate::dataset::ScoutRanking;

/// Signed gap (scout rank minus consensus average) at which a scout's view
/// counts as notable. Symmetric and inclusive at the boundary.
const NOTABLE_GAP: f64 = 3.0;

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// How one scout's rank sits relative to the consensus average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConsensusCall {
    /// At least `NOTABLE_GAP` spots better (lower number) than consensus.
    HighOnPlayer,
    /// At least `NOTABLE_GAP` spots worse (higher number) than consensus.
    LowOnPlayer,
    /// Within the notable gap on either side.
    NearConsensus,
}

impl ConsensusCall {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ConsensusCall::HighOnPlayer => "notably higher on player than consensus",
            ConsensusCall::LowOnPlayer => "notably lower on player than consensus",
            ConsensusCall::NearConsensus => "near consensus",
        }
    }
}

fn classify(delta: f64) -> ConsensusCall {
    if delta <= -NOTABLE_GAP {
        ConsensusCall::HighOnPlayer
    } else if delta >= NOTABLE_GAP {
        ConsensusCall::LowOnPlayer
    } else {
        ConsensusCall::NearConsensus
    }
}

// ---------------------------------------------------------------------------
// Breakdown
// ---------------------------------------------------------------------------

/// One scout's entry in the ranking breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct ScoutDeviation {
    pub scout: String,
    pub rank: f64,
    /// Signed difference from the consensus average (rank − average).
    pub delta: f64,
    pub call: ConsensusCall,
}

/// Per-scout deviation breakdown for one ranking record, in the record's
/// own field order (no re-sorting). Non-numeric values are skipped.
///
/// With an undefined average the breakdown is empty: disagreement has no
/// meaning without a consensus baseline.
pub fn rank_breakdown(record: &ScoutRanking, avg_rank: Option<f64>) -> Vec<ScoutDeviation> {
    let Some(avg) = avg_rank else {
        return Vec::new();
    };
    record
        .ranks
        .iter()
        .filter_map(|(scout, value)| {
            let rank = numeric(value)?;
            let delta = rank - avg;
            Some(ScoutDeviation {
                scout: scout.clone(),
                rank,
                delta,
                call: classify(delta),
            })
        })
        .collect()
}

fn numeric(value: &Value) -> Option<f64> {
    value.as_f64().filter(|n| n.is_finite())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
