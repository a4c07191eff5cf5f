//! `stockpilot-runtime`
//!
//! **Responsibility:** caller-side scheduling around the pure advisory
//! engine.
//!
//! The engine itself has no timers and no cancellation semantics; periodic
//! re-evaluation, manual triggers and result publication live here, behind
//! narrow seams (`SnapshotReader` in, `AdvisorySink` out).

pub mod runner;
pub mod sink;
pub mod snapshot;

pub use runner::{AdvisoryRunner, AdvisoryRunnerHandle};
pub use sink::{AdvisorySink, InMemoryAdvisorySink};
pub use snapshot::{InMemorySnapshotReader, SnapshotError, SnapshotReader};
