// Board state and the output boundary toward the presentation layer.
//
// Owns the loaded document, the report store, and the current selection.
// Aggregation is re-run from current state on every read; the dataset is
// small and bounded, so nothing is cached incrementally.

use serde::Serialize;

use crate::dataset::{GameLogEntry, PlayerBio, PlayerId, ProspectDocument, ScoutingReport};
use crate::engine::consensus::{self, ScoutDeviation};
use crate::engine::index::RecordIndex;
use crate::engine::rank;
use crate::engine::reports::ReportStore;
use crate::engine::stats::{self, StatSummary};

// ---------------------------------------------------------------------------
// Snapshot types (consumed by the presentation layer as plain data)
// ---------------------------------------------------------------------------

/// One row of the ranked roster listing.
#[derive(Debug, Clone, Serialize)]
pub struct RosterEntry {
    pub player_id: PlayerId,
    pub name: String,
    pub current_team: Option<String>,
    pub avg_rank: Option<f64>,
}

/// Everything the detail view needs for one player.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerDetail {
    pub bio: PlayerBio,
    pub avg_rank: Option<f64>,
    pub summary: StatSummary,
    pub rank_breakdown: Vec<ScoutDeviation>,
    /// Matching reports, newest first.
    pub reports: Vec<ScoutingReport>,
    /// Raw game-log entries in dataset order.
    pub game_logs: Vec<GameLogEntry>,
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// Application state for the prospect board.
///
/// The selection is a stable player id, not a position in the sorted
/// list, so it survives re-sorting.
#[derive(Debug)]
pub struct Board {
    doc: ProspectDocument,
    reports: ReportStore,
    selected: Option<PlayerId>,
}

impl Board {
    /// Build a board over a loaded document. The document's pre-existing
    /// reports move into the report store, which is the single source of
    /// truth for reports from here on.
    pub fn new(mut doc: ProspectDocument) -> Self {
        let seeded = std::mem::take(&mut doc.scouting_reports);
        Board {
            doc,
            reports: ReportStore::seeded(seeded),
            selected: None,
        }
    }

    /// Ranked roster listing, sorted by consensus average (unranked last).
    pub fn roster(&self) -> Vec<RosterEntry> {
        let index = RecordIndex::build(&self.doc);
        rank::consensus_board(&self.doc.bios, &index)
            .into_iter()
            .map(|prospect| RosterEntry {
                player_id: prospect.bio.player_id,
                name: prospect.bio.name.clone(),
                current_team: prospect.bio.current_team.clone(),
                avg_rank: prospect.avg_rank,
            })
            .collect()
    }

    pub fn selected(&self) -> Option<PlayerId> {
        self.selected
    }

    /// Select a player by id. Ids without a bio are refused so the
    /// selection can never dangle.
    pub fn select(&mut self, player_id: PlayerId) -> bool {
        if self.doc.bio(player_id).is_some() {
            self.selected = Some(player_id);
            true
        } else {
            false
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Move the selection one step forward in the current sorted order,
    /// wrapping at the end. With nothing selected, lands on the first
    /// entry.
    pub fn select_next(&mut self) {
        self.step(1);
    }

    /// Move the selection one step backward, wrapping at the start. With
    /// nothing selected, lands on the last entry.
    pub fn select_prev(&mut self) {
        self.step(-1);
    }

    fn step(&mut self, dir: isize) {
        let order: Vec<PlayerId> = self.roster().iter().map(|e| e.player_id).collect();
        if order.is_empty() {
            return;
        }
        let next = match self
            .selected
            .and_then(|id| order.iter().position(|&p| p == id))
        {
            Some(pos) => (pos as isize + dir).rem_euclid(order.len() as isize) as usize,
            None if dir >= 0 => 0,
            None => order.len() - 1,
        };
        self.selected = Some(order[next]);
    }

    /// Detail bundle for the currently selected player.
    pub fn selected_detail(&self) -> Option<PlayerDetail> {
        self.selected.and_then(|id| self.detail(id))
    }

    /// Detail bundle for any player id. `None` when the id has no bio.
    pub fn detail(&self, player_id: PlayerId) -> Option<PlayerDetail> {
        let bio = self.doc.bio(player_id)?.clone();
        let index = RecordIndex::build(&self.doc);
        let ranking = index.ranking(player_id);
        let avg_rank = ranking.and_then(rank::average_rank);
        let rank_breakdown = ranking
            .map(|record| consensus::rank_breakdown(record, avg_rank))
            .unwrap_or_default();
        Some(PlayerDetail {
            avg_rank,
            summary: stats::summarize(player_id, &index),
            rank_breakdown,
            reports: self
                .reports
                .for_player(player_id)
                .into_iter()
                .cloned()
                .collect(),
            game_logs: index.game_logs(player_id).iter().map(|&g| g.clone()).collect(),
            bio,
        })
    }

    /// Submit a new scouting report. Returns false (leaving state
    /// untouched) when the scout name or body is blank; the new report is
    /// visible to the next `detail` read in the same turn.
    pub fn add_report(&mut self, player_id: PlayerId, scout: &str, body: &str) -> bool {
        self.reports.add(player_id, scout, body)
    }

    pub fn report_count(&self) -> usize {
        self.reports.len()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
