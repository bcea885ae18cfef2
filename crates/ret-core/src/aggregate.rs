//! Totals by document type.

use rust_decimal::Decimal;
use tracing::warn;

use crate::models::record::Record;
use crate::models::summary::{AggregateSummary, TypeSummary};

/// Fold records into per-type and grand totals in a single pass.
///
/// Groups appear in the order their type is first seen. Sums that would
/// leave the `Decimal` range stop at [`Decimal::MAX`].
pub fn summarize(records: &[Record]) -> AggregateSummary {
    let mut summary = AggregateSummary::default();

    for record in records {
        summary.grand_total = add_capped(summary.grand_total, record.total_value);
        summary.total_quantity = add_capped(summary.total_quantity, record.quantity);
        summary.document_count += 1;
        if record.total_value > Decimal::ZERO {
            summary.with_values += 1;
        }

        match summary
            .per_type
            .iter_mut()
            .find(|g| g.document_type == record.document_type)
        {
            Some(group) => {
                group.count += 1;
                group.sum = add_capped(group.sum, record.total_value);
                group.quantity = add_capped(group.quantity, record.quantity);
            }
            None => summary.per_type.push(TypeSummary {
                document_type: record.document_type,
                count: 1,
                sum: record.total_value,
                quantity: record.quantity,
            }),
        }
    }

    summary
}

fn add_capped(acc: Decimal, value: Decimal) -> Decimal {
    acc.checked_add(value).unwrap_or_else(|| {
        warn!("Total overflowed while adding {}; capping at {}", value, Decimal::MAX);
        Decimal::MAX
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::{DocumentType, NoteKind};
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;
    use std::str::FromStr;

    fn record(document_type: DocumentType, total: &str, quantity: &str) -> Record {
        Record {
            source_path: PathBuf::from("doc.pdf"),
            document_type,
            company: "N/A".to_string(),
            note_kind: NoteKind::Unknown,
            note_number: String::new(),
            due_date: String::new(),
            total_value: Decimal::from_str(total).unwrap(),
            quantity: Decimal::from_str(quantity).unwrap(),
            unit_value: Decimal::ZERO,
            matched_amounts: Vec::new(),
        }
    }

    #[test]
    fn test_empty() {
        let summary = summarize(&[]);
        assert_eq!(summary.grand_total, Decimal::ZERO);
        assert!(summary.per_type.is_empty());
        assert!(summary.is_empty());
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let records = vec![
            record(DocumentType::TakeoffPoint, "100.00", "1"),
            record(DocumentType::Eat, "50.50", "0"),
            record(DocumentType::TakeoffPoint, "25.00", "2"),
            record(DocumentType::Other, "0", "0"),
        ];

        let summary = summarize(&records);

        let order: Vec<DocumentType> = summary.per_type.iter().map(|g| g.document_type).collect();
        assert_eq!(
            order,
            vec![DocumentType::TakeoffPoint, DocumentType::Eat, DocumentType::Other]
        );

        let top = summary.group(DocumentType::TakeoffPoint).unwrap();
        assert_eq!(top.count, 2);
        assert_eq!(top.sum, Decimal::from_str("125.00").unwrap());
        assert_eq!(top.quantity, Decimal::from(3));

        assert_eq!(summary.grand_total, Decimal::from_str("175.50").unwrap());
        assert_eq!(summary.document_count, 4);
        assert_eq!(summary.with_values, 3);
        assert!(summary.group(DocumentType::Penalty).is_none());
    }

    #[test]
    fn test_overflowing_totals_are_capped() {
        let huge = "40000000000000000000000000000";
        let records = vec![
            record(DocumentType::Eat, huge, "0"),
            record(DocumentType::Eat, huge, "0"),
            record(DocumentType::Eat, "1.00", "0"),
        ];

        let summary = summarize(&records);

        assert_eq!(summary.grand_total, Decimal::MAX);
        let eat = summary.group(DocumentType::Eat).unwrap();
        assert_eq!(eat.sum, Decimal::MAX);
        assert_eq!(eat.count, 3);
        assert_eq!(summary.with_values, 3);
    }

    #[test]
    fn test_groups_add_up_to_grand_total() {
        let records: Vec<Record> = (0..20)
            .map(|i| {
                let document_type = match i % 4 {
                    0 => DocumentType::Eat,
                    1 => DocumentType::Penalty,
                    2 => DocumentType::TakeoffPoint,
                    _ => DocumentType::Other,
                };
                record(document_type, &format!("{}.{:02}", i * 37, i), "1")
            })
            .collect();

        let summary = summarize(&records);

        let group_sum: Decimal = summary.per_type.iter().map(|g| g.sum).sum();
        let group_count: usize = summary.per_type.iter().map(|g| g.count).sum();
        assert_eq!(group_sum, summary.grand_total);
        assert_eq!(group_count, records.len());
    }
}
