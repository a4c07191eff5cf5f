//! Expense advisory simulator.

use serde_json::json;

use crate::action::{Action, ActionStatus, AgentId};
use crate::source::AdvisorySource;

/// Variance findings are flagged once spend exceeds the monthly average by
/// this percentage.
const VARIANCE_FLAG_PERCENT: u64 = 50;

/// Fixed-data stand-in for a future expense-anomaly subsystem.
///
/// Takes no real input: it returns a deterministic set of illustrative
/// findings so downstream surfaces have believable content to render. No
/// detection logic runs here; substitute a real detector through
/// [`AdvisorySource`] when one exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExpenseAdvisor;

/// (category, amount, monthly average) illustrative variance fixtures.
const VARIANCES: [(&str, u64, u64); 2] = [
    ("Office Supplies", 5_000, 1_500),
    ("Marketing", 12_000, 5_000),
];

/// (invoice, amount, supplier) illustrative duplicate fixtures.
const DUPLICATES: [(&str, u64, &str); 1] = [("INV-2024-234", 2_400, "Tech Supplies Co.")];

impl ExpenseAdvisor {
    pub fn new() -> Self {
        Self
    }

    /// Illustrative monthly-variance findings.
    pub fn detect_anomalies(&self) -> Vec<Action> {
        VARIANCES
            .iter()
            .filter_map(|&(category, amount, average)| {
                let percent_above =
                    ((amount - average) as f64 / average as f64 * 100.0).round() as u64;
                if percent_above <= VARIANCE_FLAG_PERCENT {
                    return None;
                }

                Some(
                    Action::new(
                        AgentId::Expense,
                        ActionStatus::Error,
                        format!("Unusual Expense Detected: {category}"),
                        format!(
                            "Expense of ${amount} is {percent_above}% above the monthly average (${average}). Requires immediate review."
                        ),
                    )
                    .with_payload(json!({
                        "amount": amount,
                        "average": average,
                        "variance_percent": percent_above,
                    })),
                )
            })
            .collect()
    }

    /// Illustrative duplicate-invoice findings.
    pub fn find_duplicate_invoices(&self) -> Vec<Action> {
        DUPLICATES
            .iter()
            .map(|&(invoice, amount, supplier)| {
                Action::new(
                    AgentId::Expense,
                    ActionStatus::Warning,
                    format!("Duplicate Invoice Found: {invoice}"),
                    format!(
                        "Invoice {invoice} from {supplier} appears twice in the system. Total duplicate amount: ${amount}. Flagged for review."
                    ),
                )
                .with_payload(json!({
                    "invoice": invoice,
                    "amount": amount,
                    "supplier": supplier,
                }))
            })
            .collect()
    }

    /// Illustrative cost-saving tip.
    pub fn find_savings(&self) -> Vec<Action> {
        vec![
            Action::new(
                AgentId::Expense,
                ActionStatus::Success,
                "Cost-Saving Opportunity Identified",
                "Bulk purchase discount available from supplier S-045. Save $1200 (15%) on the next electronics order by ordering 25% more inventory.",
            )
            .with_payload(json!({
                "potential_savings": 1200,
                "supplier": "S-045",
                "category": "Electronics",
            })),
        ]
    }
}

impl AdvisorySource for ExpenseAdvisor {
    fn agent(&self) -> AgentId {
        AgentId::Expense
    }

    fn collect(&self) -> Vec<Action> {
        let mut actions = self.detect_anomalies();
        actions.extend(self.find_duplicate_invoices());
        actions.extend(self.find_savings());
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_variance_fixtures_are_flagged() {
        let actions = ExpenseAdvisor::new().detect_anomalies();

        assert_eq!(actions.len(), 2);
        assert!(actions.iter().all(|a| a.status == ActionStatus::Error));
        assert!(actions[0].details.contains("233% above"));
        assert_eq!(actions[0].payload["variance_percent"], 233);
        assert!(actions[1].details.contains("140% above"));
        assert_eq!(actions[1].payload["variance_percent"], 140);
    }

    #[test]
    fn duplicate_invoice_is_a_warning() {
        let actions = ExpenseAdvisor::new().find_duplicate_invoices();

        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].status, ActionStatus::Warning);
        assert_eq!(actions[0].title, "Duplicate Invoice Found: INV-2024-234");
        assert_eq!(actions[0].payload["supplier"], "Tech Supplies Co.");
    }

    #[test]
    fn savings_tip_is_a_success() {
        let actions = ExpenseAdvisor::new().find_savings();

        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].status, ActionStatus::Success);
        assert_eq!(actions[0].payload["potential_savings"], 1200);
    }

    #[test]
    fn collect_is_deterministic_in_content() {
        let advisor = ExpenseAdvisor::new();
        let first = advisor.collect();
        let second = advisor.collect();

        assert_eq!(first.len(), 4);
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.title, b.title);
            assert_eq!(a.status, b.status);
            assert_eq!(a.details, b.details);
            assert_eq!(a.payload, b.payload);
        }
        assert!(first.iter().all(|a| a.agent == AgentId::Expense));
    }
}
