//! Summary: group normalized transactions by type with exact totals.

use releve_core::{Transaction, TransactionType};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

const SAMPLE_LABELS: usize = 3;

/// Totals for one transaction type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeSummary {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub count: usize,
    /// Sum of positive amounts
    pub credits: Decimal,
    /// Sum of negative amounts (negative or zero)
    pub debits: Decimal,
    pub net: Decimal,
    /// A few distinct labels, in statement order
    pub sample_labels: Vec<String>,
}

/// Totals over a whole statement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub count: usize,
    pub credits: Decimal,
    pub debits: Decimal,
    pub net: Decimal,
}

pub struct Summary;

impl Summary {
    /// One entry per type present, largest absolute net first.
    pub fn by_type<'a>(txns: impl IntoIterator<Item = &'a Transaction>) -> Vec<TypeSummary> {
        let mut groups: HashMap<TransactionType, TypeSummary> = HashMap::new();

        for txn in txns {
            let entry = groups.entry(txn.kind).or_insert_with(|| TypeSummary {
                kind: txn.kind,
                count: 0,
                credits: Decimal::ZERO,
                debits: Decimal::ZERO,
                net: Decimal::ZERO,
                sample_labels: Vec::new(),
            });
            entry.count += 1;
            if txn.amount.is_sign_negative() {
                entry.debits += txn.amount;
            } else {
                entry.credits += txn.amount;
            }
            entry.net += txn.amount;
            if entry.sample_labels.len() < SAMPLE_LABELS && !entry.sample_labels.contains(&txn.label) {
                entry.sample_labels.push(txn.label.clone());
            }
        }

        let mut summaries: Vec<TypeSummary> = groups.into_values().collect();
        summaries.sort_by(|a, b| b.net.abs().cmp(&a.net.abs()).then(a.kind.cmp(&b.kind)));
        summaries
    }

    pub fn totals<'a>(txns: impl IntoIterator<Item = &'a Transaction>) -> Totals {
        txns.into_iter().fold(Totals::default(), |mut t, txn| {
            t.count += 1;
            if txn.amount.is_sign_negative() {
                t.debits += txn.amount;
            } else {
                t.credits += txn.amount;
            }
            t.net += txn.amount;
            t
        })
    }
}
