//! Catalog snapshot data model consumed by the advisory engine.
//!
//! This crate contains the product-shaped subset of the catalog read model,
//! implemented purely as deterministic domain data (no IO, no HTTP, no
//! storage). Snapshots are immutable: the advisory engine only ever reads
//! them.

pub mod money;
pub mod record;

pub use money::Money;
pub use record::{CatalogSnapshot, ProductRecord};
