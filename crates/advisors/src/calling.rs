//! Outbound-calling advisory simulator.

use serde_json::json;

use crate::action::{Action, ActionStatus, AgentId};
use crate::source::AdvisorySource;

/// Fixed-data stand-in for a future outbound-calling subsystem.
///
/// Returns scripted call outcomes and one payment follow-up; no calls are
/// placed anywhere. Substitute a real implementation through
/// [`AdvisorySource`].
#[derive(Debug, Default, Clone, Copy)]
pub struct CallingAdvisor;

/// (supplier, connected, outcome) scripted call fixtures.
const CALL_OUTCOMES: [(&str, bool, &str); 3] = [
    ("Tech Supplies Co.", true, "Delivery confirmed for Dec 5, 2025"),
    ("Global Electronics", true, "Order PO-2024-156 confirmed"),
    ("Office Depot BD", false, "No answer, will retry in 2 hours"),
];

impl CallingAdvisor {
    pub fn new() -> Self {
        Self
    }

    /// Scripted supplier call outcomes.
    pub fn make_supplier_calls(&self) -> Vec<Action> {
        CALL_OUTCOMES
            .iter()
            .map(|&(supplier, connected, outcome)| {
                let (status, verdict) = if connected {
                    (ActionStatus::Success, "Call Completed")
                } else {
                    (ActionStatus::Error, "Call Failed")
                };

                Action::new(
                    AgentId::Calling,
                    status,
                    format!("{verdict}: {supplier}"),
                    outcome,
                )
                .with_payload(json!({
                    "supplier": supplier,
                    "connected": connected,
                }))
            })
            .collect()
    }

    /// Scripted overdue-payment follow-up summary.
    pub fn follow_up_payments(&self) -> Vec<Action> {
        vec![
            Action::new(
                AgentId::Calling,
                ActionStatus::Pending,
                "Payment Follow-up Initiated",
                "Called 3 customers with overdue payments. 2 promised payment by Friday, 1 scheduled a callback for tomorrow.",
            )
            .with_payload(json!({
                "contacted_customers": 3,
                "pending_amount": 15_600,
            })),
        ]
    }
}

impl AdvisorySource for CallingAdvisor {
    fn agent(&self) -> AgentId {
        AgentId::Calling
    }

    fn collect(&self) -> Vec<Action> {
        let mut actions = self.make_supplier_calls();
        actions.extend(self.follow_up_payments());
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_calls_map_to_statuses() {
        let actions = CallingAdvisor::new().make_supplier_calls();

        assert_eq!(actions.len(), 3);
        assert_eq!(actions[0].status, ActionStatus::Success);
        assert_eq!(actions[0].title, "Call Completed: Tech Supplies Co.");
        assert_eq!(actions[1].status, ActionStatus::Success);
        assert_eq!(actions[2].status, ActionStatus::Error);
        assert_eq!(actions[2].title, "Call Failed: Office Depot BD");
        assert_eq!(actions[2].details, "No answer, will retry in 2 hours");
    }

    #[test]
    fn payment_follow_up_is_pending() {
        let actions = CallingAdvisor::new().follow_up_payments();

        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].status, ActionStatus::Pending);
        assert_eq!(actions[0].payload["contacted_customers"], 3);
        assert_eq!(actions[0].payload["pending_amount"], 15_600);
    }

    #[test]
    fn collect_is_deterministic_in_content() {
        let advisor = CallingAdvisor::new();
        let first = advisor.collect();
        let second = advisor.collect();

        assert_eq!(first.len(), 4);
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.title, b.title);
            assert_eq!(a.status, b.status);
            assert_eq!(a.details, b.details);
            assert_eq!(a.payload, b.payload);
        }
        assert!(first.iter().all(|a| a.agent == AgentId::Calling));
    }
}
