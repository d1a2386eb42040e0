//! Time windows and period math for filtering transactions

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use paydash_config::TransactionPeriod;
use serde::{Deserialize, Serialize};

/// Display format for period and date-range labels
const LABEL_DATE_FORMAT: &str = "%d/%m/%Y";

/// ISO format used in export file labels
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// An explicit date range picked by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    /// Range start, inclusive
    pub from: Option<NaiveDate>,
    /// Range end, inclusive
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Create a range from optional endpoints
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// Check whether both endpoints are present
    pub fn is_complete(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    /// The window this range describes when both endpoints are set.
    ///
    /// A complete range replaces the rolling period window entirely.
    pub fn explicit_window(&self) -> Option<TimeWindow> {
        match (self.from, self.to) {
            (Some(from), Some(to)) => Some(TimeWindow::explicit(from, to)),
            _ => None,
        }
    }

    /// The window applied in the base pass: `from` is required, a missing
    /// `to` falls back to today's end of day.
    pub fn base_window(&self, now: DateTime<Utc>) -> Option<TimeWindow> {
        let from = self.from?;
        let to = self.to.unwrap_or_else(|| now.date_naive());
        Some(TimeWindow::explicit(from, to))
    }
}

/// An inclusive time window over `updated_at`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Rolling window ending at `now` for the given period
    pub fn rolling(period: TransactionPeriod, now: DateTime<Utc>) -> Self {
        Self {
            start: period_start(period, now),
            end: now,
        }
    }

    /// Explicit window spanning whole calendar days
    pub fn explicit(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            start: start_of_day(from),
            end: end_of_day(to),
        }
    }

    /// Check if an instant falls inside the window, inclusive at both ends
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }
}

/// Midnight at the start of the given day
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// The last representable millisecond of the given day
pub fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    let end = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    date.and_time(end).and_utc()
}

/// Start of the rolling period window ending at `now`:
/// - daily: start of the current calendar day
/// - weekly: start of day, rewound to the most recent Sunday
/// - monthly: start of day 1 of the current month
pub fn period_start(period: TransactionPeriod, now: DateTime<Utc>) -> DateTime<Utc> {
    let today = now.date_naive();
    let start = match period {
        TransactionPeriod::Daily => today,
        TransactionPeriod::Weekly => {
            let days_back = today.weekday().num_days_from_sunday() as i64;
            today - Duration::days(days_back)
        }
        TransactionPeriod::Monthly => today.with_day(1).unwrap_or(today),
    };
    start_of_day(start)
}

/// Format the active rolling period as a display label.
///
/// Labels run through the day before the reference date ("as of"
/// convention carried over from the web UI).
pub fn format_transaction_period(period: TransactionPeriod, reference: DateTime<Utc>) -> String {
    let end = reference.date_naive() - Duration::days(1);
    match period {
        TransactionPeriod::Daily => end.format(LABEL_DATE_FORMAT).to_string(),
        TransactionPeriod::Weekly => {
            let start = end - Duration::days(5);
            format!(
                "{} — {}",
                start.format(LABEL_DATE_FORMAT),
                end.format(LABEL_DATE_FORMAT)
            )
        }
        TransactionPeriod::Monthly => {
            let start = end.with_day(1).unwrap_or(end);
            format!(
                "{} — {}",
                start.format(LABEL_DATE_FORMAT),
                end.format(LABEL_DATE_FORMAT)
            )
        }
    }
}

/// Format an explicit date range as a display label.
///
/// Returns `None` when no range (or no start) is selected. Shown dates use
/// the same day-before convention as [`format_transaction_period`].
pub fn selected_dates_string(range: Option<&DateRange>) -> Option<String> {
    let range = range?;
    let from = range.from? - Duration::days(1);
    match range.to {
        Some(to) => Some(format!(
            "{} — {}",
            from.format(LABEL_DATE_FORMAT),
            (to - Duration::days(1)).format(LABEL_DATE_FORMAT)
        )),
        None => Some(from.format(LABEL_DATE_FORMAT).to_string()),
    }
}

/// Format a date for export file labels (ISO, `yyyy-mm-dd`)
pub fn iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_period_start_daily() {
        let start = period_start(TransactionPeriod::Daily, at("2023-10-28T13:00:00Z"));
        assert_eq!(start, at("2023-10-28T00:00:00Z"));
    }

    #[test]
    fn test_period_start_weekly_rewinds_to_sunday() {
        // 2023-10-28 is a Saturday; the week starts Sunday 2023-10-22
        let start = period_start(TransactionPeriod::Weekly, at("2023-10-28T13:00:00Z"));
        assert_eq!(start, at("2023-10-22T00:00:00Z"));

        // A Sunday is already the week start
        let start = period_start(TransactionPeriod::Weekly, at("2023-10-22T09:00:00Z"));
        assert_eq!(start, at("2023-10-22T00:00:00Z"));
    }

    #[test]
    fn test_period_start_monthly() {
        let start = period_start(TransactionPeriod::Monthly, at("2023-10-28T13:00:00Z"));
        assert_eq!(start, at("2023-10-01T00:00:00Z"));
    }

    #[test]
    fn test_window_contains_is_inclusive() {
        let window = TimeWindow::explicit(day("2023-10-27"), day("2023-10-27"));
        assert!(window.contains(at("2023-10-27T00:00:00Z")));
        assert!(window.contains(at("2023-10-27T23:59:59.999Z")));
        assert!(!window.contains(at("2023-10-26T23:59:59.999Z")));
        assert!(!window.contains(at("2023-10-28T00:00:00Z")));
    }

    #[test]
    fn test_base_window_defaults_open_end_to_today() {
        let range = DateRange::new(Some(day("2023-10-25")), None);
        let window = range.base_window(at("2023-10-28T13:00:00Z")).unwrap();
        assert_eq!(window.start, at("2023-10-25T00:00:00Z"));
        assert_eq!(window.end, at("2023-10-28T23:59:59.999Z"));
    }

    #[test]
    fn test_explicit_window_requires_both_endpoints() {
        assert!(DateRange::new(Some(day("2023-10-25")), None)
            .explicit_window()
            .is_none());
        assert!(DateRange::new(Some(day("2023-10-25")), Some(day("2023-10-26")))
            .explicit_window()
            .is_some());
    }

    #[test]
    fn test_format_daily_period() {
        let label = format_transaction_period(TransactionPeriod::Daily, at("2023-10-28T13:00:00Z"));
        assert_eq!(label, "27/10/2023");
    }

    #[test]
    fn test_format_weekly_period() {
        let label = format_transaction_period(TransactionPeriod::Weekly, at("2023-10-28T13:00:00Z"));
        assert_eq!(label, "22/10/2023 — 27/10/2023");
    }

    #[test]
    fn test_format_monthly_period() {
        let label =
            format_transaction_period(TransactionPeriod::Monthly, at("2023-10-28T13:00:00Z"));
        assert_eq!(label, "01/10/2023 — 27/10/2023");
    }

    #[test]
    fn test_selected_dates_string_none() {
        assert_eq!(selected_dates_string(None), None);
        let empty = DateRange::default();
        assert_eq!(selected_dates_string(Some(&empty)), None);
    }

    #[test]
    fn test_selected_dates_string_single() {
        let range = DateRange::new(Some(day("2023-10-28")), None);
        assert_eq!(
            selected_dates_string(Some(&range)),
            Some("27/10/2023".to_string())
        );
    }

    #[test]
    fn test_selected_dates_string_complete() {
        let range = DateRange::new(Some(day("2023-10-28")), Some(day("2023-10-29")));
        assert_eq!(
            selected_dates_string(Some(&range)),
            Some("27/10/2023 — 28/10/2023".to_string())
        );
    }
}
