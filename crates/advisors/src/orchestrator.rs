//! Aggregation point over all advisory sources.

use stockpilot_catalog::CatalogSnapshot;

use crate::action::{Action, AgentId};
use crate::calling::CallingAdvisor;
use crate::expense::ExpenseAdvisor;
use crate::inventory::InventoryAdvisor;
use crate::source::AdvisorySource;

/// Runs every registered source once, in registration order, and concatenates
/// their output into a single list.
///
/// Plain synchronous iteration: no retry, no partial-failure handling. An
/// empty snapshot simply contributes zero stock actions. The aggregate of the
/// most recent run is retained so callers can query it by originating agent.
pub struct AdvisoryOrchestrator {
    sources: Vec<Box<dyn AdvisorySource>>,
    last_run: Vec<Action>,
}

impl AdvisoryOrchestrator {
    /// Standard wiring: stock rules over `snapshot` plus the two fixed-data
    /// simulators, in that order.
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self::with_sources(vec![
            Box::new(InventoryAdvisor::new(snapshot)),
            Box::new(ExpenseAdvisor::new()),
            Box::new(CallingAdvisor::new()),
        ])
    }

    /// Custom source set, e.g. substituting a real expense detector for the
    /// simulator.
    pub fn with_sources(sources: Vec<Box<dyn AdvisorySource>>) -> Self {
        Self {
            sources,
            last_run: Vec::new(),
        }
    }

    /// Run all sources once and retain the aggregate.
    pub fn run_all(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        for source in &self.sources {
            actions.extend(source.collect());
        }
        self.last_run = actions.clone();
        actions
    }

    /// Actions from the most recent run originating from `agent`.
    pub fn actions_for(&self, agent: AgentId) -> Vec<Action> {
        self.last_run
            .iter()
            .filter(|a| a.agent == agent)
            .cloned()
            .collect()
    }

    /// All actions from the most recent run, in emission order.
    pub fn all_actions(&self) -> &[Action] {
        &self.last_run
    }
}
