//! Core data models for the dashboard

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::types::{CardType, PaymentMethod};

/// A single payment transaction, immutable once fetched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique transaction identifier
    pub id: String,
    /// Transaction amount, non-negative
    pub amount: f64,
    /// Card brand used for the payment
    pub card: CardType,
    /// Number of installments, positive
    pub installments: u32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp; the filter engine keys off this field
    pub updated_at: DateTime<Utc>,
    /// Payment method used
    pub payment_method: PaymentMethod,
}

impl Transaction {
    /// Get the update date, dropping the time component
    pub fn updated_date(&self) -> NaiveDate {
        self.updated_at.date_naive()
    }

    /// Check whether the record is dated after the given instant
    pub fn is_future(&self, now: DateTime<Utc>) -> bool {
        self.updated_at > now
    }
}

/// A value/label pair for populating filter option lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataOption {
    pub value: String,
    pub label: String,
}

/// Per-field metadata shipped alongside the transactions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Card filter options
    pub cards: Vec<MetadataOption>,
    /// Payment method filter options
    pub payment_methods: Vec<MetadataOption>,
}

/// The upstream fetch payload: transactions plus their metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionsPayload {
    pub transactions: Vec<Transaction>,
    pub metadata: Metadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_deserializes_camel_case() {
        let raw = r#"{
            "transactions": [
                {
                    "id": "abc-1",
                    "amount": 150.5,
                    "card": "visa",
                    "installments": 3,
                    "createdAt": "2023-10-26T10:00:00.000Z",
                    "updatedAt": "2023-10-27T11:30:00.000Z",
                    "paymentMethod": "qr"
                }
            ],
            "metadata": {
                "cards": [{"value": "visa", "label": "Visa"}],
                "paymentMethods": [{"value": "qr", "label": "QR"}]
            }
        }"#;

        let payload: TransactionsPayload = serde_json::from_str(raw).unwrap();
        assert_eq!(payload.transactions.len(), 1);

        let tx = &payload.transactions[0];
        assert_eq!(tx.id, "abc-1");
        assert_eq!(tx.card, CardType::Visa);
        assert_eq!(tx.payment_method, PaymentMethod::Qr);
        assert_eq!(tx.installments, 3);
        assert_eq!(tx.updated_date().to_string(), "2023-10-27");

        assert_eq!(payload.metadata.cards[0].label, "Visa");
        assert_eq!(payload.metadata.payment_methods[0].value, "qr");
    }

    #[test]
    fn test_is_future() {
        let raw = r#"{
            "id": "t",
            "amount": 10.0,
            "card": "amex",
            "installments": 1,
            "createdAt": "2023-10-28T12:00:00Z",
            "updatedAt": "2023-10-28T12:00:00Z",
            "paymentMethod": "link"
        }"#;
        let tx: Transaction = serde_json::from_str(raw).unwrap();

        let before = "2023-10-28T11:00:00Z".parse().unwrap();
        let after = "2023-10-28T13:00:00Z".parse().unwrap();
        assert!(tx.is_future(before));
        assert!(!tx.is_future(after));
    }
}
