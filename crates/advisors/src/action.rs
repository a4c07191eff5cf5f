//! Advisory action model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use stockpilot_core::ActionId;

/// Originating source tag for an advisory action.
///
/// A categorization label over a small fixed set, not a concurrent or
/// autonomous process.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentId {
    /// Stock rules, demand heuristic, purchase-order advisories.
    Inventory,
    /// Expense variance / duplicate-invoice / savings findings.
    Expense,
    /// Supplier call and payment follow-up outcomes.
    Calling,
}

impl AgentId {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentId::Inventory => "inventory",
            AgentId::Expense => "expense",
            AgentId::Calling => "calling",
        }
    }
}

impl core::fmt::Display for AgentId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome classification attached to an advisory action.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    Success,
    Warning,
    Error,
    Pending,
}

/// One advisory entry surfaced to the user.
///
/// Actions are value objects: created fresh on each evaluation pass, never
/// updated in place, never persisted. Their lifetime is the UI session that
/// displays them. The status is fixed by the rule that produced the action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub id: ActionId,
    pub agent: AgentId,
    pub title: String,
    pub issued_at: DateTime<Utc>,
    pub status: ActionStatus,
    pub details: String,

    /// Free-form structured payload (suggested quantities, costs, names).
    ///
    /// `Null` when a rule has nothing structured to attach. Actions carry no
    /// back-reference to a triggering record beyond what is embedded here.
    pub payload: JsonValue,
}

impl Action {
    pub fn new(
        agent: AgentId,
        status: ActionStatus,
        title: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            id: ActionId::new(),
            agent,
            title: title.into(),
            issued_at: Utc::now(),
            status,
            details: details.into(),
            payload: JsonValue::Null,
        }
    }

    pub fn with_payload(mut self, payload: JsonValue) -> Self {
        self.payload = payload;
        self
    }
}
