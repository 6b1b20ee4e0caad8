// Consensus rank aggregation and roster ordering.

use std::collections::HashMap;

use serde_json::Value;

use crate::dataset::{PlayerBio, PlayerId, ScoutRanking};
use crate::engine::index::RecordIndex;

// ---------------------------------------------------------------------------
// Average rank
// ---------------------------------------------------------------------------

/// A rank value qualifies for the consensus average when it is a finite,
/// strictly positive number. Strings ("N/A"), nulls, and zero/negative
/// placeholders are excluded from the mean rather than treated as zero.
fn qualifying_rank(value: &Value) -> Option<f64> {
    let rank = value.as_f64()?;
    (rank.is_finite() && rank > 0.0).then_some(rank)
}

/// Arithmetic mean of a player's qualifying scout ranks.
///
/// Returns `None` when no qualifying values exist: the player is unranked,
/// which is a defined state, never zero or NaN.
pub fn average_rank(record: &ScoutRanking) -> Option<f64> {
    let ranks: Vec<f64> = record.ranks.values().filter_map(qualifying_rank).collect();
    if ranks.is_empty() {
        return None;
    }
    Some(ranks.iter().sum::<f64>() / ranks.len() as f64)
}

/// Map of player id to consensus average. Ids with no qualifying ranks are
/// absent from the map (the "unranked" state). When a player id appears on
/// several records, the last record wins, clearing any earlier average if
/// the later record has no qualifying values.
pub fn consensus_averages(rankings: &[ScoutRanking]) -> HashMap<PlayerId, f64> {
    let mut averages = HashMap::new();
    for record in rankings {
        match average_rank(record) {
            Some(avg) => {
                averages.insert(record.player_id, avg);
            }
            None => {
                averages.remove(&record.player_id);
            }
        }
    }
    averages
}

// ---------------------------------------------------------------------------
// Roster ordering
// ---------------------------------------------------------------------------

/// A bio paired with its consensus average.
#[derive(Debug, Clone)]
pub struct RankedProspect<'a> {
    pub bio: &'a PlayerBio,
    pub avg_rank: Option<f64>,
}

/// All bios sorted ascending by consensus average.
///
/// Unranked players sort after every ranked player (average treated as
/// positive infinity). The sort is stable, so equal averages and unranked
/// groups keep the original bio-list order; no player id is used as a
/// secondary key. Deterministic across repeated calls with the same input.
pub fn consensus_board<'a>(
    bios: &'a [PlayerBio],
    index: &RecordIndex<'_>,
) -> Vec<RankedProspect<'a>> {
    let mut board: Vec<RankedProspect<'a>> = bios
        .iter()
        .map(|bio| RankedProspect {
            bio,
            avg_rank: index.ranking(bio.player_id).and_then(average_rank),
        })
        .collect();

    board.sort_by(|a, b| {
        let ka = a.avg_rank.unwrap_or(f64::INFINITY);
        let kb = b.avg_rank.unwrap_or(f64::INFINITY);
        ka.partial_cmp(&kb).unwrap_or(std::cmp::Ordering::Equal)
    });
    board
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
