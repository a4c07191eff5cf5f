//! Stock-level rules, demand heuristic, and purchase-order advisories.

use serde_json::json;

use stockpilot_catalog::{CatalogSnapshot, Money, ProductRecord};

use crate::action::{Action, ActionStatus, AgentId};
use crate::source::AdvisorySource;

/// Suggested reorder quantity, as a multiple of the minimum threshold.
const REORDER_FACTOR: u64 = 2;
/// Emergency reorder multiple for critically low records.
const EMERGENCY_REORDER_FACTOR: u64 = 3;
/// A record holding more than this multiple of its minimum is overstocked.
const OVERSTOCK_FACTOR: u64 = 5;
/// Records below this multiple of their minimum count toward the demand
/// heuristic.
const DEMAND_WINDOW_FACTOR: u64 = 2;
/// Fixed promotional discount suggested for overstocked records.
const SUGGESTED_DISCOUNT_PERCENT: u64 = 15;
/// The demand forecast names at most this many trending products.
const DEMAND_FORECAST_SAMPLE: usize = 3;

/// Threshold-based advisor over one catalog snapshot.
///
/// Evaluation is a flat scan: each record is checked against the rules
/// independently, and a single record may emit zero, one, or several actions
/// (the low-stock and critical rules are deliberately not exclusive). Output
/// order follows snapshot order, not severity.
#[derive(Debug, Clone)]
pub struct InventoryAdvisor {
    snapshot: CatalogSnapshot,
}

impl InventoryAdvisor {
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self { snapshot }
    }

    /// Scan every record against the low/critical/overstock thresholds.
    pub fn check_stock_levels(&self) -> Vec<Action> {
        let mut actions = Vec::new();

        for record in self.snapshot.records() {
            if is_low_stock(record) {
                actions.push(low_stock_action(record));
            }
            if is_critical_stock(record) {
                actions.push(critical_stock_action(record));
            }
            if is_overstocked(record) {
                actions.push(overstock_action(record));
            }
        }

        actions
    }

    /// Count-based demand heuristic over records trending toward their
    /// minimum. Emits at most one aggregate action; nothing when no record
    /// qualifies.
    pub fn forecast_demand(&self) -> Vec<Action> {
        let trending: Vec<&ProductRecord> = self
            .snapshot
            .records()
            .iter()
            .filter(|r| is_trending(r))
            .take(DEMAND_FORECAST_SAMPLE)
            .collect();

        if trending.is_empty() {
            return Vec::new();
        }

        let names: Vec<&str> = trending.iter().map(|r| r.name()).collect();

        vec![
            Action::new(
                AgentId::Inventory,
                ActionStatus::Success,
                "Demand Forecast Generated",
                format!(
                    "Analyzed {} products. Predicted 25% increase in demand for {} items over the next 7 days.",
                    self.snapshot.len(),
                    trending.len()
                ),
            )
            .with_payload(json!({ "products": names })),
        ]
    }

    /// Aggregate reorder advisory over all records below their minimum.
    ///
    /// Advisory text only: nothing is ordered anywhere. Omitted entirely when
    /// no record needs a reorder.
    pub fn generate_purchase_orders(&self) -> Vec<Action> {
        let needs_reorder: Vec<&ProductRecord> = self
            .snapshot
            .records()
            .iter()
            .filter(|r| is_low_stock(r))
            .collect();

        if needs_reorder.is_empty() {
            return Vec::new();
        }

        let total: Money = needs_reorder
            .iter()
            .map(|r| r.price().times(reorder_quantity(r)))
            .sum();

        let lines: Vec<serde_json::Value> = needs_reorder
            .iter()
            .map(|r| json!({ "name": r.name(), "quantity": reorder_quantity(r) }))
            .collect();

        vec![
            Action::new(
                AgentId::Inventory,
                ActionStatus::Success,
                format!("Created {} Purchase Orders", needs_reorder.len()),
                format!(
                    "Auto-generated purchase orders for {} products. Total value: ${total}.",
                    needs_reorder.len()
                ),
            )
            .with_payload(json!({
                "order_count": needs_reorder.len(),
                "total_value": total,
                "products": lines,
            })),
        ]
    }
}

impl AdvisorySource for InventoryAdvisor {
    fn agent(&self) -> AgentId {
        AgentId::Inventory
    }

    fn collect(&self) -> Vec<Action> {
        let mut actions = self.check_stock_levels();
        actions.extend(self.forecast_demand());
        actions.extend(self.generate_purchase_orders());
        actions
    }
}

fn is_low_stock(record: &ProductRecord) -> bool {
    record.stock() < record.min_stock()
}

fn is_critical_stock(record: &ProductRecord) -> bool {
    // stock < min_stock / 2, without integer truncation on odd minimums.
    u64::from(record.stock()) * 2 < u64::from(record.min_stock())
}

fn is_overstocked(record: &ProductRecord) -> bool {
    // A zero minimum would flag any positive stock as overstocked (and the
    // held-percentage math would divide by zero); treat it as "no threshold
    // configured" instead. See DESIGN.md for the boundary discussion.
    record.min_stock() > 0
        && u64::from(record.stock()) > u64::from(record.min_stock()) * OVERSTOCK_FACTOR
}

fn is_trending(record: &ProductRecord) -> bool {
    u64::from(record.stock()) < u64::from(record.min_stock()) * DEMAND_WINDOW_FACTOR
}

fn reorder_quantity(record: &ProductRecord) -> u64 {
    u64::from(record.min_stock()) * REORDER_FACTOR
}

fn emergency_quantity(record: &ProductRecord) -> u64 {
    u64::from(record.min_stock()) * EMERGENCY_REORDER_FACTOR
}

fn low_stock_action(record: &ProductRecord) -> Action {
    let quantity = reorder_quantity(record);
    let cost = record.price().times(quantity);

    Action::new(
        AgentId::Inventory,
        ActionStatus::Warning,
        format!("Low Stock Alert: {}", record.name()),
        format!(
            "Current: {} units, Min: {} units. Reorder suggested: {quantity} units (${cost}).",
            record.stock(),
            record.min_stock()
        ),
    )
    .with_payload(json!({
        "product_id": record.id_typed(),
        "reorder_quantity": quantity,
        "reorder_cost": cost,
    }))
}

fn critical_stock_action(record: &ProductRecord) -> Action {
    let quantity = emergency_quantity(record);

    Action::new(
        AgentId::Inventory,
        ActionStatus::Error,
        format!("CRITICAL: {} almost out of stock", record.name()),
        format!(
            "Only {} units left. Immediate action required. Suggested emergency order: {quantity} units.",
            record.stock()
        ),
    )
    .with_payload(json!({
        "product_id": record.id_typed(),
        "priority": "URGENT",
        "reorder_quantity": quantity,
    }))
}

fn overstock_action(record: &ProductRecord) -> Action {
    // Callers guarantee min_stock > 0 here.
    let held_percent =
        (f64::from(record.stock()) / f64::from(record.min_stock()) * 100.0).round() as u64;

    Action::new(
        AgentId::Inventory,
        ActionStatus::Warning,
        format!("Overstock Detected: {}", record.name()),
        format!(
            "Stock level ({}) is {held_percent}% of minimum. Consider promotional discount to move inventory.",
            record.stock()
        ),
    )
    .with_payload(json!({
        "product_id": record.id_typed(),
        "suggested_discount_percent": SUGGESTED_DISCOUNT_PERCENT,
    }))
}
