//! Core transaction filtering and business logic
//!
//! The [`Dashboard`] owns one browsing session: the fetched payload, the
//! mutable filter criteria, and the derived views recomputed from both.
//! Filtering itself lives in [`filter`] as pure functions; everything here
//! is session plumbing.

pub mod currency;
pub mod error;
pub mod export;
pub mod filter;
pub mod models;
pub mod source;
pub mod time;
pub mod types;

use chrono::{DateTime, Utc};
use paydash_config::Config;
use serde::Serialize;
use std::sync::RwLock;

pub use error::{CoreError, ErrorCode};
pub use filter::FilterCriteria;
pub use models::{Metadata, MetadataOption, Transaction, TransactionsPayload};
pub use paydash_config::TransactionPeriod;
pub use source::{JsonFileSource, SourceRef, TransactionSource};
pub use time::DateRange;
pub use types::{CardType, PaymentMethod};

use currency::CurrencyStyle;
use export::{ExportRequest, EXPORT_COLUMNS};

/// In-memory session data, present after a successful load
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub transactions: Vec<Transaction>,
    pub metadata: Metadata,
}

/// Derived views: pure function of (source data, criteria, now)
#[derive(Debug, Clone, Serialize)]
pub struct DerivedView {
    /// Base-filtered set, sorted by `updated_at` descending
    pub base_transactions: Vec<Transaction>,
    /// Period-filtered subset of the base set
    pub visible_transactions: Vec<Transaction>,
    /// Sum of visible amounts
    pub total: f64,
    /// Distinct installment counts across the source list
    pub installment_options: Vec<u32>,
}

/// One dashboard session: source handle, payload, and filter criteria.
///
/// There is exactly one writer (the API event loop) and reads are
/// synchronous snapshots, so plain locks around the two cells suffice.
pub struct Dashboard {
    config: Config,
    source: SourceRef,
    data: RwLock<Option<DashboardData>>,
    criteria: RwLock<FilterCriteria>,
}

impl Dashboard {
    /// Create a session with criteria seeded from configuration
    pub fn new(config: Config, source: SourceRef) -> Self {
        let criteria =
            FilterCriteria::new(config.filters.default_period, config.amount_bounds());
        Self {
            config,
            source,
            data: RwLock::new(None),
            criteria: RwLock::new(criteria),
        }
    }

    /// Fetch the payload through the source collaborator. A fetch failure
    /// is surfaced as-is; previously loaded data is kept.
    pub async fn load(&self) -> Result<(), CoreError> {
        let payload = self.source.fetch().await?;
        log::info!(
            "loaded {} transactions, {} card options, {} method options",
            payload.transactions.len(),
            payload.metadata.cards.len(),
            payload.metadata.payment_methods.len()
        );

        let mut data = self.data.write().unwrap();
        *data = Some(DashboardData {
            transactions: payload.transactions,
            metadata: payload.metadata,
        });
        Ok(())
    }

    /// Re-fetch the payload from the source
    pub async fn reload(&self) -> Result<(), CoreError> {
        self.load().await
    }

    /// Whether a payload has been loaded
    pub fn is_loaded(&self) -> bool {
        self.data.read().unwrap().is_some()
    }

    /// The session configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Snapshot of the raw source transactions
    pub fn transactions(&self) -> Result<Vec<Transaction>, CoreError> {
        let data = self.data.read().unwrap();
        data.as_ref()
            .map(|d| d.transactions.clone())
            .ok_or(CoreError::NotLoaded)
    }

    /// Snapshot of the payload metadata
    pub fn metadata(&self) -> Result<Metadata, CoreError> {
        let data = self.data.read().unwrap();
        data.as_ref()
            .map(|d| d.metadata.clone())
            .ok_or(CoreError::NotLoaded)
    }

    /// Snapshot of the current criteria
    pub fn criteria(&self) -> FilterCriteria {
        self.criteria.read().unwrap().clone()
    }

    // ==================== Criteria Mutators ====================

    fn update_criteria(&self, apply: impl FnOnce(FilterCriteria) -> FilterCriteria) {
        let mut guard = self.criteria.write().unwrap();
        let next = apply(guard.clone());
        log::debug!("criteria updated: {:?}", next);
        *guard = next;
    }

    /// Switch the rolling period
    pub fn set_period(&self, period: TransactionPeriod) {
        self.update_criteria(|c| c.with_period(period));
    }

    /// Toggle a card brand selection
    pub fn toggle_card(&self, card: CardType) {
        self.update_criteria(|c| c.toggle_card(card));
    }

    /// Clear the card selection
    pub fn reset_cards(&self) {
        self.update_criteria(FilterCriteria::reset_cards);
    }

    /// Toggle a payment method selection
    pub fn toggle_method(&self, method: PaymentMethod) {
        self.update_criteria(|c| c.toggle_method(method));
    }

    /// Clear the payment method selection
    pub fn reset_methods(&self) {
        self.update_criteria(FilterCriteria::reset_methods);
    }

    /// Toggle an installment count selection
    pub fn toggle_installment(&self, installments: u32) {
        self.update_criteria(|c| c.toggle_installment(installments));
    }

    /// Clear the installment selection
    pub fn reset_installments(&self) {
        self.update_criteria(FilterCriteria::reset_installments);
    }

    /// Replace the explicit date range
    pub fn set_dates(&self, range: Option<DateRange>) {
        self.update_criteria(|c| c.with_dates(range));
    }

    /// Drop the explicit date range
    pub fn reset_dates(&self) {
        self.update_criteria(FilterCriteria::reset_dates);
    }

    /// Replace the amount range, clamping both endpoints to the
    /// configured bounds
    pub fn set_amount_range(&self, min: f64, max: f64) {
        let (lo, hi) = self.config.amount_bounds();
        let min = min.clamp(lo, hi);
        let max = max.clamp(lo, hi);
        self.update_criteria(|c| c.with_amount_range(min, max));
    }

    /// Restore the amount range to the configured bounds
    pub fn reset_amount_range(&self) {
        let bounds = self.config.amount_bounds();
        self.update_criteria(|c| c.reset_amount_range(bounds));
    }

    // ==================== Derived Views ====================

    /// Recompute the derived views against an explicit reference time
    pub fn derived_at(&self, now: DateTime<Utc>) -> Result<DerivedView, CoreError> {
        let data = self.data.read().unwrap();
        let data = data.as_ref().ok_or(CoreError::NotLoaded)?;
        let criteria = self.criteria();

        let base_transactions = filter::base_filter(&data.transactions, &criteria, now);
        let visible_transactions = filter::visible_filter(&base_transactions, &criteria, now);
        let total = filter::sum_transactions(&visible_transactions);
        let installment_options = filter::unique_installments(&data.transactions);

        Ok(DerivedView {
            base_transactions,
            visible_transactions,
            total,
            installment_options,
        })
    }

    /// Recompute the derived views as of now
    pub fn derived(&self) -> Result<DerivedView, CoreError> {
        self.derived_at(Utc::now())
    }

    /// Distinct installment counts across the source list, for the
    /// filter option pane
    pub fn installment_options(&self) -> Result<Vec<u32>, CoreError> {
        let data = self.data.read().unwrap();
        data.as_ref()
            .map(|d| filter::unique_installments(&d.transactions))
            .ok_or(CoreError::NotLoaded)
    }

    /// Display label for the active selection: the explicit date range
    /// when one is picked, otherwise the rolling period
    pub fn period_label_at(&self, now: DateTime<Utc>) -> String {
        let criteria = self.criteria();
        time::selected_dates_string(criteria.dates.as_ref())
            .unwrap_or_else(|| time::format_transaction_period(criteria.period, now))
    }

    /// Assemble the export request for the currently visible rows
    pub fn export_request_at(&self, now: DateTime<Utc>) -> Result<ExportRequest, CoreError> {
        let view = self.derived_at(now)?;
        let criteria = self.criteria();
        let style = CurrencyStyle::from_config(&self.config.currency);

        let label = export::export_file_label(
            criteria.dates.as_ref(),
            &self.config.export.full_range_label,
        );
        let file_name = export::export_file_name(&self.config.export.file_prefix, &label);

        Ok(ExportRequest {
            file_name,
            columns: EXPORT_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: export::build_export_rows(&view.visible_transactions, &style),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Arc;

    struct StaticSource {
        payload: TransactionsPayload,
    }

    #[async_trait]
    impl TransactionSource for StaticSource {
        async fn fetch(&self) -> Result<TransactionsPayload, CoreError> {
            Ok(self.payload.clone())
        }
    }

    fn at(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    fn tx(id: &str, amount: f64, card: CardType, installments: u32, updated_at: &str) -> Transaction {
        Transaction {
            id: id.to_string(),
            amount,
            card,
            installments,
            created_at: at(updated_at),
            updated_at: at(updated_at),
            payment_method: PaymentMethod::Link,
        }
    }

    fn payload() -> TransactionsPayload {
        TransactionsPayload {
            transactions: vec![
                tx("1", 100.0, CardType::Visa, 1, "2023-10-26T10:00:00Z"),
                tx("2", 200.0, CardType::Mastercard, 3, "2023-10-27T11:00:00Z"),
                tx("3", 300.0, CardType::Visa, 1, "2023-10-28T12:00:00Z"),
            ],
            metadata: Metadata {
                cards: vec![MetadataOption {
                    value: "visa".to_string(),
                    label: "Visa".to_string(),
                }],
                payment_methods: vec![MetadataOption {
                    value: "link".to_string(),
                    label: "Link de pago".to_string(),
                }],
            },
        }
    }

    fn dashboard() -> Dashboard {
        let source = Arc::new(StaticSource { payload: payload() });
        Dashboard::new(Config::default(), source)
    }

    fn now() -> DateTime<Utc> {
        at("2023-10-28T13:00:00Z")
    }

    #[test]
    fn test_access_before_load_fails_fast() {
        let dashboard = dashboard();
        assert!(!dashboard.is_loaded());
        assert!(matches!(dashboard.transactions(), Err(CoreError::NotLoaded)));
        assert!(matches!(dashboard.metadata(), Err(CoreError::NotLoaded)));
        assert!(matches!(dashboard.derived_at(now()), Err(CoreError::NotLoaded)));
        assert!(matches!(
            dashboard.export_request_at(now()),
            Err(CoreError::NotLoaded)
        ));
    }

    #[tokio::test]
    async fn test_load_and_derive() {
        let dashboard = dashboard();
        dashboard.load().await.unwrap();
        assert!(dashboard.is_loaded());

        let view = dashboard.derived_at(now()).unwrap();
        // Default period is weekly; the week of Oct 28 starts Sunday Oct 22
        assert_eq!(view.base_transactions.len(), 3);
        assert_eq!(view.visible_transactions.len(), 3);
        assert_eq!(view.total, 600.0);
        assert_eq!(view.installment_options, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_visible_is_subset_of_base() {
        let dashboard = dashboard();
        dashboard.load().await.unwrap();
        dashboard.set_period(TransactionPeriod::Daily);
        dashboard.toggle_card(CardType::Visa);

        let view = dashboard.derived_at(now()).unwrap();
        assert!(view
            .visible_transactions
            .iter()
            .all(|t| view.base_transactions.contains(t)));
        assert_eq!(view.visible_transactions.len(), 1);
        assert_eq!(view.visible_transactions[0].id, "3");
    }

    #[tokio::test]
    async fn test_mutators_produce_new_state() {
        let dashboard = dashboard();
        dashboard.load().await.unwrap();

        dashboard.toggle_card(CardType::Visa);
        assert_eq!(dashboard.criteria().cards, vec![CardType::Visa]);

        dashboard.toggle_card(CardType::Visa);
        assert!(dashboard.criteria().cards.is_empty());

        dashboard.toggle_method(PaymentMethod::Qr);
        dashboard.reset_methods();
        assert!(dashboard.criteria().methods.is_empty());
    }

    #[tokio::test]
    async fn test_amount_range_clamped_to_bounds() {
        let dashboard = dashboard();
        dashboard.load().await.unwrap();

        dashboard.set_amount_range(-50.0, 5000.0);
        assert_eq!(dashboard.criteria().amount_range, (0.0, 2000.0));

        dashboard.set_amount_range(150.0, 250.0);
        assert_eq!(dashboard.criteria().amount_range, (150.0, 250.0));

        dashboard.reset_amount_range();
        assert_eq!(dashboard.criteria().amount_range, (0.0, 2000.0));
    }

    #[tokio::test]
    async fn test_explicit_range_overrides_period_in_view() {
        let dashboard = dashboard();
        dashboard.load().await.unwrap();
        dashboard.set_period(TransactionPeriod::Monthly);

        let day = "2023-10-27".parse().unwrap();
        dashboard.set_dates(Some(DateRange::new(Some(day), Some(day))));

        let view = dashboard.derived_at(now()).unwrap();
        assert_eq!(view.visible_transactions.len(), 1);
        assert_eq!(view.visible_transactions[0].id, "2");

        dashboard.reset_dates();
        let view = dashboard.derived_at(now()).unwrap();
        assert_eq!(view.visible_transactions.len(), 3);
    }

    #[tokio::test]
    async fn test_period_label_prefers_selected_dates() {
        let dashboard = dashboard();
        dashboard.load().await.unwrap();
        dashboard.set_period(TransactionPeriod::Daily);
        assert_eq!(dashboard.period_label_at(now()), "27/10/2023");

        dashboard.set_dates(Some(DateRange::new(
            Some("2023-10-28".parse().unwrap()),
            Some("2023-10-29".parse().unwrap()),
        )));
        assert_eq!(
            dashboard.period_label_at(now()),
            "27/10/2023 — 28/10/2023"
        );
    }

    #[tokio::test]
    async fn test_export_request_naming() {
        let dashboard = dashboard();
        dashboard.load().await.unwrap();

        let request = dashboard.export_request_at(now()).unwrap();
        assert_eq!(request.file_name, "transacciones_completo.pdf");
        assert_eq!(request.columns.len(), 5);
        assert_eq!(request.rows.len(), 3);

        dashboard.set_dates(Some(DateRange::new(
            Some("2023-10-01".parse().unwrap()),
            Some("2023-10-05".parse().unwrap()),
        )));
        let request = dashboard.export_request_at(now()).unwrap();
        assert_eq!(
            request.file_name,
            "transacciones_2023-10-01_2023-10-05.pdf"
        );
    }
}
