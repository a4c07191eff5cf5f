//! Publication of completed advisory passes.

use std::sync::Mutex;

use stockpilot_advisors::Action;

/// Sink for advisory runs.
///
/// Deliberately separate from any domain event stream: advisory actions are
/// insights for display, not events to replay.
pub trait AdvisorySink: Send + Sync + 'static {
    fn publish(&self, actions: Vec<Action>);
}

/// In-memory sink for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryAdvisorySink {
    inner: Mutex<Vec<Vec<Action>>>,
}

impl InMemoryAdvisorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All published runs, oldest first.
    pub fn runs(&self) -> Vec<Vec<Action>> {
        self.inner.lock().unwrap().clone()
    }

    /// The most recently published run, if any.
    pub fn latest(&self) -> Option<Vec<Action>> {
        self.inner.lock().unwrap().last().cloned()
    }
}

impl AdvisorySink for InMemoryAdvisorySink {
    fn publish(&self, actions: Vec<Action>) {
        self.inner.lock().unwrap().push(actions);
    }
}
