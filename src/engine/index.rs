// Record lookups keyed by player id.

use std::collections::HashMap;

use crate::dataset::{
    GameLogEntry, PlayerId, ProspectDocument, ScoutRanking, ScoutingReport, SeasonLogEntry,
};

/// Lookup structures over a loaded document, built once per read pass.
///
/// Pure view: borrows the document, never mutates it. Absent matches come
/// back as `None` or an empty slice, not errors; ids with no bio are still
/// indexed and simply never reached by aggregation.
#[derive(Debug)]
pub struct RecordIndex<'a> {
    rankings: HashMap<PlayerId, &'a ScoutRanking>,
    game_logs: HashMap<PlayerId, Vec<&'a GameLogEntry>>,
    season_logs: HashMap<PlayerId, Vec<&'a SeasonLogEntry>>,
    reports: HashMap<PlayerId, Vec<&'a ScoutingReport>>,
}

impl<'a> RecordIndex<'a> {
    pub fn build(doc: &'a ProspectDocument) -> Self {
        let mut rankings: HashMap<PlayerId, &ScoutRanking> = HashMap::new();
        for ranking in &doc.scout_rankings {
            // At most one ranking record per player; last record wins.
            rankings.insert(ranking.player_id, ranking);
        }

        let mut game_logs: HashMap<PlayerId, Vec<&GameLogEntry>> = HashMap::new();
        for log in &doc.game_logs {
            game_logs.entry(log.player_id).or_default().push(log);
        }

        let mut season_logs: HashMap<PlayerId, Vec<&SeasonLogEntry>> = HashMap::new();
        for log in &doc.season_logs {
            season_logs.entry(log.player_id).or_default().push(log);
        }

        let mut reports: HashMap<PlayerId, Vec<&ScoutingReport>> = HashMap::new();
        for report in &doc.scouting_reports {
            reports.entry(report.player_id).or_default().push(report);
        }

        RecordIndex {
            rankings,
            game_logs,
            season_logs,
            reports,
        }
    }

    /// The player's ranking record, if any.
    pub fn ranking(&self, player_id: PlayerId) -> Option<&'a ScoutRanking> {
        self.rankings.get(&player_id).copied()
    }

    /// The player's game-log entries in dataset order.
    pub fn game_logs(&self, player_id: PlayerId) -> &[&'a GameLogEntry] {
        self.game_logs
            .get(&player_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The player's season-log entries in dataset order.
    pub fn season_logs(&self, player_id: PlayerId) -> &[&'a SeasonLogEntry] {
        self.season_logs
            .get(&player_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The player's dataset-seeded report records in dataset order.
    pub fn reports(&self, player_id: PlayerId) -> &[&'a ScoutingReport] {
        self.reports
            .get(&player_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
