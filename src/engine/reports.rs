// In-memory scouting report store (append-only, newest first).

use chrono::Utc;

use crate::dataset::{PlayerId, ScoutingReport};

/// Process-wide report collection for the session. Seeded once from the
/// dataset's pre-existing reports; the only write path afterwards is
/// `add`. No deletion, no updates, no persistence beyond process lifetime.
#[derive(Debug, Clone, Default)]
pub struct ReportStore {
    entries: Vec<ScoutingReport>,
}

impl ReportStore {
    /// Seed the store from the dataset's reports, kept in their given
    /// order (newest first by convention).
    pub fn seeded(entries: Vec<ScoutingReport>) -> Self {
        ReportStore { entries }
    }

    /// Validate and prepend a new report, stamped with the current UTC
    /// time. Scout name and body are trimmed; if either is empty after
    /// trimming the store is left untouched and `false` is returned
    /// (callers are expected to pre-validate their input).
    pub fn add(&mut self, player_id: PlayerId, scout: &str, body: &str) -> bool {
        let scout = scout.trim();
        let body = body.trim();
        if scout.is_empty() || body.is_empty() {
            return false;
        }
        self.entries.insert(
            0,
            ScoutingReport {
                player_id,
                scout: scout.to_string(),
                report: body.to_string(),
                filed_at: Some(Utc::now()),
            },
        );
        true
    }

    /// All reports for one player, preserving store order (newest first).
    pub fn for_player(&self, player_id: PlayerId) -> Vec<&ScoutingReport> {
        self.entries
            .iter()
            .filter(|r| r.player_id == player_id)
            .collect()
    }

    /// Full store contents, newest first.
    pub fn entries(&self) -> &[ScoutingReport] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
