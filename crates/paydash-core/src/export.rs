//! Export request assembly for the PDF collaborator.
//!
//! The engine only contributes the filtered rows, the table shape and the
//! file name; byte-level PDF encoding happens outside this crate.

use serde::{Deserialize, Serialize};

use super::currency::{format_currency, CurrencyStyle};
use super::models::Transaction;
use super::time::{iso_date, DateRange};

/// Column headers for the export table
pub const EXPORT_COLUMNS: [&str; 5] = ["Fecha", "Tarjeta", "Método", "Cuotas", "Monto"];

/// One row of the export table, already display-formatted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    /// Update date as `dd/mm/yyyy`
    pub date: String,
    /// Card brand, uppercased
    pub card: String,
    /// Payment method, uppercased
    pub method: String,
    /// Installment count
    pub installments: u32,
    /// Formatted amount
    pub amount: String,
}

/// Everything the export collaborator needs to produce a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRequest {
    /// Suggested file name, e.g. `transacciones_completo.pdf`
    pub file_name: String,
    /// Table column headers
    pub columns: Vec<String>,
    /// Display-formatted rows
    pub rows: Vec<ExportRow>,
}

/// Derive the file label from the explicit date range: `{from}_{to}` in ISO
/// dates when the range is complete, otherwise the full-range literal
pub fn export_file_label(range: Option<&DateRange>, full_range_label: &str) -> String {
    if let Some(range) = range {
        if let (Some(from), Some(to)) = (range.from, range.to) {
            return format!("{}_{}", iso_date(from), iso_date(to));
        }
    }
    full_range_label.to_string()
}

/// Assemble the export file name from prefix and label
pub fn export_file_name(prefix: &str, label: &str) -> String {
    format!("{}_{}.pdf", prefix, label)
}

/// Map filtered transactions to display-formatted export rows
pub fn build_export_rows(transactions: &[Transaction], style: &CurrencyStyle) -> Vec<ExportRow> {
    transactions
        .iter()
        .map(|t| ExportRow {
            date: t.updated_at.format("%d/%m/%Y").to_string(),
            card: t.card.to_string().to_uppercase(),
            method: t.payment_method.to_string().to_uppercase(),
            installments: t.installments,
            amount: format_currency(t.amount, style),
        })
        .collect()
}
