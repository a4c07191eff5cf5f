//! The seam between the orchestrator and individual advisors.

use crate::action::{Action, AgentId};

/// A tagged source of advisory actions.
///
/// Sources may evaluate real snapshot data (the stock rules) or stand in for
/// a future subsystem with fixed findings (expense, calling). The
/// orchestrator depends only on this trait, so a real implementation can be
/// substituted without touching it.
pub trait AdvisorySource: Send + Sync {
    /// The tag attached to every action this source emits.
    fn agent(&self) -> AgentId;

    /// Produce this source's actions for one evaluation pass.
    ///
    /// Must be deterministic given the source's input and must not mutate
    /// shared state. An input with nothing to report yields an empty list,
    /// never an error.
    fn collect(&self) -> Vec<Action>;
}
