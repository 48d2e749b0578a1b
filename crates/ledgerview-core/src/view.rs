//! Report view model: derived presentation values
//!
//! Consumes a report result and exposes a read-only hierarchical
//! structure ready for display. The engine is the sole source of
//! numeric precision: amounts are concatenated verbatim, never
//! rounded or locale-reformatted here, to avoid double-rounding.

use ledgerview_engine::{Amount, PrintReport, PrintTransaction};
use serde::Serialize;

/// Format one amount for display: commodity then quantity, verbatim
pub fn format_amount(amount: &Amount) -> String {
    format!("{}{}", amount.commodity, amount.quantity)
}

/// Copyable `"file:line"` reference from a transaction's first source
/// position, if any
///
/// Used only for user-initiated copy actions, never for identity or
/// joins. Resolution is deterministic: always the first position.
pub fn source_reference(transaction: &PrintTransaction) -> Option<String> {
    transaction
        .source_positions
        .as_ref()?
        .first()
        .map(|pos| format!("{}:{}", pos.file, pos.line))
}

/// One posting, ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostingRow {
    pub account: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Formatted amount strings, engine order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub amounts: Vec<String>,
    /// Formatted balance assertion (e.g. "= $100.00")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_assertion: Option<String>,
}

/// One transaction, ready for display
///
/// Empty sections are omitted from the serialized form rather than
/// rendered as placeholders: an empty tag list means "no tags", not a
/// tags section with nothing in it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRow {
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<(String, String)>,
    pub postings: Vec<PostingRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_reference: Option<String>,
}

/// Read-only view over a print report
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct PrintView {
    rows: Vec<TransactionRow>,
}

impl PrintView {
    /// Build the view, deriving all presentation values up front
    pub fn new(report: &PrintReport) -> Self {
        let rows = report
            .iter()
            .map(|transaction| TransactionRow {
                date: transaction.date.clone(),
                date2: transaction.date2.clone(),
                status: transaction.status.clone(),
                code: transaction.code.clone(),
                description: transaction.description.clone(),
                comment: transaction.comment.clone(),
                tags: transaction.tags.clone(),
                postings: transaction
                    .postings
                    .iter()
                    .map(|posting| PostingRow {
                        account: posting.account.clone(),
                        comment: posting.comment.clone(),
                        amounts: posting.amounts.iter().map(format_amount).collect(),
                        balance_assertion: posting
                            .balance_assertion
                            .as_ref()
                            .map(|assertion| format!("= {}", format_amount(&assertion.amount))),
                    })
                    .collect(),
                source_reference: source_reference(transaction),
            })
            .collect();
        Self { rows }
    }

    /// Number of transactions in the report
    pub fn transaction_count(&self) -> usize {
        self.rows.len()
    }

    /// True iff the report has zero transactions
    ///
    /// Drives the explicit "no data" state, distinct from loading and
    /// from error.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Display rows, in report order
    pub fn rows(&self) -> &[TransactionRow] {
        &self.rows
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerview_engine::{BalanceAssertion, PrintPosting, SourcePosition};

    fn transaction() -> PrintTransaction {
        PrintTransaction {
            date: "2024-03-05".to_string(),
            date2: None,
            status: Some("*".to_string()),
            code: None,
            description: "rent".to_string(),
            comment: None,
            tags: vec![],
            postings: vec![PrintPosting {
                account: "expenses:rent".to_string(),
                amounts: vec![Amount {
                    commodity: "$".to_string(),
                    quantity: "1500.00".to_string(),
                }],
                comment: None,
                balance_assertion: None,
            }],
            source_positions: None,
        }
    }

    #[test]
    fn test_format_amount_is_verbatim_concatenation() {
        let amount = Amount {
            commodity: "$".to_string(),
            quantity: "1234.5670".to_string(),
        };
        // No rounding, no locale formatting: trailing zeros survive
        assert_eq!(format_amount(&amount), "$1234.5670");

        let amount = Amount {
            commodity: "EUR ".to_string(),
            quantity: "-3.50".to_string(),
        };
        assert_eq!(format_amount(&amount), "EUR -3.50");
    }

    #[test]
    fn test_empty_report() {
        let view = PrintView::new(&vec![]);
        assert!(view.is_empty());
        assert_eq!(view.transaction_count(), 0);
        assert!(view.rows().is_empty());
    }

    #[test]
    fn test_source_reference_uses_first_position() {
        let mut txn = transaction();
        txn.source_positions = Some(vec![
            SourcePosition {
                file: "ledger.journal".to_string(),
                line: 41,
            },
            SourcePosition {
                file: "ledger.journal".to_string(),
                line: 45,
            },
        ]);
        assert_eq!(
            source_reference(&txn).as_deref(),
            Some("ledger.journal:41")
        );

        txn.source_positions = None;
        assert_eq!(source_reference(&txn), None);

        txn.source_positions = Some(vec![]);
        assert_eq!(source_reference(&txn), None);
    }

    #[test]
    fn test_empty_tags_section_is_omitted() {
        let view = PrintView::new(&vec![transaction()]);
        let value = serde_json::to_value(view.rows()).unwrap();
        let row = &value.as_array().unwrap()[0];

        assert!(row.get("tags").is_none(), "empty tags must be omitted");
        assert!(row.get("date2").is_none());
        assert_eq!(row["description"], "rent");
        assert_eq!(row["postings"][0]["amounts"][0], "$1500.00");
    }

    #[test]
    fn test_tags_kept_in_order_when_present() {
        let mut txn = transaction();
        txn.tags = vec![
            ("site".to_string(), "home".to_string()),
            ("kind".to_string(), "fixed".to_string()),
        ];
        let view = PrintView::new(&vec![txn]);
        assert_eq!(
            view.rows()[0].tags,
            vec![
                ("site".to_string(), "home".to_string()),
                ("kind".to_string(), "fixed".to_string()),
            ]
        );
    }

    #[test]
    fn test_balance_assertion_rendering() {
        let mut txn = transaction();
        txn.postings[0].balance_assertion = Some(BalanceAssertion {
            amount: Amount {
                commodity: "$".to_string(),
                quantity: "0".to_string(),
            },
            total: false,
            inclusive: false,
        });
        let view = PrintView::new(&vec![txn]);
        assert_eq!(
            view.rows()[0].postings[0].balance_assertion.as_deref(),
            Some("= $0")
        );
    }
}
