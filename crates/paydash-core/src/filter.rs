//! Filter criteria and the two-pass transaction filter.
//!
//! Both passes compose the same criteria predicate with an effective time
//! window, so each function is independently correct:
//! - [`base_filter`] drops future-dated records, applies the criteria and an
//!   optional explicit date window, and sorts newest-first.
//! - [`visible_filter`] narrows a base-filtered list to the rolling period
//!   window, unless a complete explicit range overrides it.

use chrono::{DateTime, Utc};
use paydash_config::TransactionPeriod;
use serde::{Deserialize, Serialize};

use super::models::Transaction;
use super::time::{DateRange, TimeWindow};
use super::types::{CardType, PaymentMethod};

/// Default amount range bounds when no configuration is supplied
pub const DEFAULT_AMOUNT_RANGE: (f64, f64) = (0.0, 2000.0);

/// Session-scoped filter criteria.
///
/// Empty selections mean "all". Mutators consume the value and return the
/// next state, keeping the struct trivially testable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Active rolling period
    pub period: TransactionPeriod,
    /// Selected card brands, insertion order preserved
    pub cards: Vec<CardType>,
    /// Selected payment methods
    pub methods: Vec<PaymentMethod>,
    /// Selected installment counts
    pub installments: Vec<u32>,
    /// Explicit date range override
    pub dates: Option<DateRange>,
    /// Inclusive amount range, `min <= max`
    pub amount_range: (f64, f64),
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            period: TransactionPeriod::default(),
            cards: Vec::new(),
            methods: Vec::new(),
            installments: Vec::new(),
            dates: None,
            amount_range: DEFAULT_AMOUNT_RANGE,
        }
    }
}

impl FilterCriteria {
    /// Create criteria seeded from configuration
    pub fn new(period: TransactionPeriod, amount_range: (f64, f64)) -> Self {
        Self {
            period,
            amount_range,
            ..Self::default()
        }
    }

    /// Set the rolling period
    #[must_use]
    pub fn with_period(mut self, period: TransactionPeriod) -> Self {
        self.period = period;
        self
    }

    /// Toggle a card in or out of the selection
    #[must_use]
    pub fn toggle_card(mut self, card: CardType) -> Self {
        toggle_value(&mut self.cards, card);
        self
    }

    /// Clear the card selection, back to "all"
    #[must_use]
    pub fn reset_cards(mut self) -> Self {
        self.cards.clear();
        self
    }

    /// Toggle a payment method in or out of the selection
    #[must_use]
    pub fn toggle_method(mut self, method: PaymentMethod) -> Self {
        toggle_value(&mut self.methods, method);
        self
    }

    /// Clear the payment method selection
    #[must_use]
    pub fn reset_methods(mut self) -> Self {
        self.methods.clear();
        self
    }

    /// Toggle an installment count in or out of the selection
    #[must_use]
    pub fn toggle_installment(mut self, installments: u32) -> Self {
        toggle_value(&mut self.installments, installments);
        self
    }

    /// Clear the installment selection
    #[must_use]
    pub fn reset_installments(mut self) -> Self {
        self.installments.clear();
        self
    }

    /// Replace the explicit date range
    #[must_use]
    pub fn with_dates(mut self, dates: Option<DateRange>) -> Self {
        self.dates = dates;
        self
    }

    /// Drop the explicit date range
    #[must_use]
    pub fn reset_dates(mut self) -> Self {
        self.dates = None;
        self
    }

    /// Replace the amount range. Endpoints are reordered if inverted;
    /// clamping against configured bounds happens at the session boundary.
    #[must_use]
    pub fn with_amount_range(mut self, min: f64, max: f64) -> Self {
        self.amount_range = if min <= max { (min, max) } else { (max, min) };
        self
    }

    /// Restore the amount range to the given bounds
    #[must_use]
    pub fn reset_amount_range(mut self, bounds: (f64, f64)) -> Self {
        self.amount_range = bounds;
        self
    }

    /// The criteria predicate shared by both filter passes:
    /// card, method, installments and inclusive amount range.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if !self.cards.is_empty() && !self.cards.contains(&transaction.card) {
            return false;
        }
        if !self.methods.is_empty() && !self.methods.contains(&transaction.payment_method) {
            return false;
        }
        if !self.installments.is_empty() && !self.installments.contains(&transaction.installments)
        {
            return false;
        }
        let (min, max) = self.amount_range;
        transaction.amount >= min && transaction.amount <= max
    }

    /// Effective window for the visible pass: a complete explicit range
    /// replaces the rolling period window entirely.
    pub fn visible_window(&self, now: DateTime<Utc>) -> TimeWindow {
        self.dates
            .as_ref()
            .and_then(DateRange::explicit_window)
            .unwrap_or_else(|| TimeWindow::rolling(self.period, now))
    }
}

fn toggle_value<T: PartialEq>(values: &mut Vec<T>, value: T) {
    if let Some(pos) = values.iter().position(|v| *v == value) {
        values.remove(pos);
    } else {
        values.push(value);
    }
}

/// Base pass: drop future-dated records, apply the criteria predicate and
/// the explicit date window when a start date is set. Output is sorted by
/// `updated_at` descending.
pub fn base_filter(
    transactions: &[Transaction],
    criteria: &FilterCriteria,
    now: DateTime<Utc>,
) -> Vec<Transaction> {
    let explicit = criteria.dates.as_ref().and_then(|r| r.base_window(now));

    let mut filtered: Vec<Transaction> = transactions
        .iter()
        .filter(|t| !t.is_future(now))
        .filter(|t| explicit.map_or(true, |w| w.contains(t.updated_at)))
        .filter(|t| criteria.matches(t))
        .cloned()
        .collect();

    filtered.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    filtered
}

/// Visible pass: narrow an already base-filtered list to the effective
/// window, re-applying the criteria predicate so the function is correct on
/// its own. Input order is preserved.
pub fn visible_filter(
    base: &[Transaction],
    criteria: &FilterCriteria,
    now: DateTime<Utc>,
) -> Vec<Transaction> {
    let window = criteria.visible_window(now);

    base.iter()
        .filter(|t| window.contains(t.updated_at))
        .filter(|t| criteria.matches(t))
        .cloned()
        .collect()
}

/// Sum of transaction amounts, 0 for an empty list
pub fn sum_transactions(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(|t| t.amount).sum()
}

/// Distinct installment counts in first-seen order
pub fn unique_installments(transactions: &[Transaction]) -> Vec<u32> {
    let mut seen = Vec::new();
    for transaction in transactions {
        if !seen.contains(&transaction.installments) {
            seen.push(transaction.installments);
        }
    }
    seen
}
