// Aggregation engine: record lookups, consensus ranks, stat summaries,
// scout disagreement, report store.

pub mod consensus;
pub mod index;
pub mod rank;
pub mod reports;
pub mod stats;
