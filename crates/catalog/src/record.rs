//! Product records and the catalog snapshot the advisory engine evaluates.

use serde::{Deserialize, Serialize};

use stockpilot_core::{DomainError, DomainResult, Entity, ProductId};

use crate::money::Money;

/// One product observation inside a catalog snapshot.
///
/// Immutable by construction: the advisory engine reads records, it never
/// adjusts them. Stock counts and thresholds are non-negative unit counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    id: ProductId,
    name: String,
    sku: String,
    stock: u32,
    min_stock: u32,
    price: Money,
}

impl ProductRecord {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        sku: impl Into<String>,
        stock: u32,
        min_stock: u32,
        price: Money,
    ) -> DomainResult<Self> {
        let name = name.into();
        let sku = sku.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if sku.trim().is_empty() {
            return Err(DomainError::validation("SKU cannot be empty"));
        }

        Ok(Self {
            id,
            name,
            sku,
            stock,
            min_stock,
            price,
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    /// Units currently on hand.
    pub fn stock(&self) -> u32 {
        self.stock
    }

    /// Minimum-stock threshold configured for the product.
    ///
    /// A zero threshold means no minimum has been set for the product.
    pub fn min_stock(&self) -> u32 {
        self.min_stock
    }

    /// Unit price in minor currency units.
    pub fn price(&self) -> Money {
        self.price
    }
}

impl Entity for ProductRecord {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Ordered collection of product records captured at one point in time.
///
/// Record order is preserved; advisory output follows this order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    records: Vec<ProductRecord>,
}

impl CatalogSnapshot {
    pub fn new(records: Vec<ProductRecord>) -> Self {
        Self { records }
    }

    /// Snapshot with no records (the degraded-fetch fallback).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
