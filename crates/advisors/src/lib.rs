//! `stockpilot-advisors`
//!
//! **Responsibility:** the advisory/alert rule engine.
//!
//! This crate is intentionally pure:
//! - It must not perform IO or touch storage.
//! - It must not mutate the catalog snapshot it evaluates.
//! - It emits **advisory actions**, not domain events.
//!
//! Every evaluation pass is an independent function of its input snapshot
//! (plus clock reads for timestamps), so callers may invoke it from any
//! thread or task model without locking.

pub mod action;
pub mod calling;
pub mod expense;
pub mod inventory;
pub mod orchestrator;
pub mod source;

pub use action::{Action, ActionStatus, AgentId};
pub use calling::CallingAdvisor;
pub use expense::ExpenseAdvisor;
pub use inventory::InventoryAdvisor;
pub use orchestrator::AdvisoryOrchestrator;
pub use source::AdvisorySource;
