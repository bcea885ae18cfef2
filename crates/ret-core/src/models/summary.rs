//! Aggregated totals over a record collection.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::record::DocumentType;

/// Grouped and grand totals, recomputed from a record collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateSummary {
    /// Sum of `total_value` over all records.
    pub grand_total: Decimal,

    /// Sum of `quantity` over all records.
    pub total_quantity: Decimal,

    /// Number of records summarized.
    pub document_count: usize,

    /// Records whose `total_value` is above zero.
    pub with_values: usize,

    /// Per-type groups in first-seen order.
    pub per_type: Vec<TypeSummary>,
}

/// Count and sums for one document type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSummary {
    pub document_type: DocumentType,
    pub count: usize,
    pub sum: Decimal,
    pub quantity: Decimal,
}

impl AggregateSummary {
    /// Look up the group for a document type.
    pub fn group(&self, document_type: DocumentType) -> Option<&TypeSummary> {
        self.per_type
            .iter()
            .find(|g| g.document_type == document_type)
    }

    pub fn is_empty(&self) -> bool {
        self.document_count == 0
    }
}
